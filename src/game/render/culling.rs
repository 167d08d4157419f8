// ============================================
// Culling - Отсечение инстансов по дистанции и взгляду
// ============================================
// Приближённый frustum: только yaw. Батч пересчитывается, когда
// игрок сместился или повернулся сильнее порога с момента
// последнего пересчёта этого батча.

use std::f32::consts::{PI, TAU};

use log::debug;
use ultraviolet::Vec3;

use crate::game::blocks::BlockType;

use super::{BatchRegistry, Renderer};

/// Косинус, ниже которого блок считается за спиной
pub const FACING_THRESHOLD: f32 = -0.2;

/// Параметры отсечения
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingSettings {
    pub render_distance: f32,
    /// Ближе этого блок виден всегда
    pub min_render_distance: f32,
    pub move_threshold: f32,
    pub rotate_threshold: f32,
}

impl Default for CullingSettings {
    fn default() -> Self {
        Self {
            render_distance: 40.0,
            min_render_distance: 10.0,
            move_threshold: 2.0,
            rotate_threshold: 0.1,
        }
    }
}

/// Видим ли блок. Порядок: дальше render_distance → скрыт,
/// ближе min_distance → виден, иначе по направлению взгляда
pub fn is_block_visible(
    block_center: Vec3,
    player: Vec3,
    forward: Vec3,
    render_distance: f32,
    min_distance: f32,
) -> bool {
    let to_block = block_center - player;
    let distance = to_block.mag();

    if distance > render_distance {
        return false;
    }
    if distance <= min_distance {
        return true;
    }
    to_block.normalized().dot(forward) > FACING_THRESHOLD
}

/// Горизонтальный forward по yaw
#[inline]
pub fn yaw_forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Разница углов в [-PI, PI]
fn angle_delta(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    if d > PI { d - TAU } else { d }
}

/// Итог одного обновления
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullingStats {
    pub batches_recomputed: usize,
    pub shown: usize,
    pub hidden: usize,
}

pub struct CullingController {
    pub settings: CullingSettings,
    /// Позиция и yaw игрока при последнем пересчёте батча
    snapshots: [Option<(Vec3, f32)>; BlockType::COUNT],
}

impl CullingController {
    pub fn new(settings: CullingSettings) -> Self {
        Self {
            settings,
            snapshots: [None; BlockType::COUNT],
        }
    }

    fn needs_update(&self, block: BlockType, position: Vec3, yaw: f32) -> bool {
        match self.snapshots[block.index()] {
            None => true,
            Some((last_pos, last_yaw)) => {
                (position - last_pos).mag() >= self.settings.move_threshold
                    || angle_delta(yaw, last_yaw).abs() >= self.settings.rotate_threshold
            }
        }
    }

    /// Пересчитать видимость и отправить рендереру только изменившиеся инстансы
    pub fn update(
        &mut self,
        position: Vec3,
        yaw: f32,
        batches: &mut BatchRegistry,
        renderer: &mut dyn Renderer,
    ) -> CullingStats {
        let mut stats = CullingStats::default();
        let forward = yaw_forward(yaw);

        for block in BlockType::ALL {
            if !self.needs_update(block, position, yaw) {
                continue;
            }
            self.snapshots[block.index()] = Some((position, yaw));
            stats.batches_recomputed += 1;

            let batch = batches.get_mut(block);
            for index in 0..batch.len() {
                let Some(pos) = batch.position(index) else { continue };
                let visible = is_block_visible(
                    pos.center(),
                    position,
                    forward,
                    self.settings.render_distance,
                    self.settings.min_render_distance,
                );
                if let Some(transform) = batch.set_visible(index, visible) {
                    renderer.set_instance_transform(block, index, transform);
                    if visible {
                        stats.shown += 1;
                    } else {
                        stats.hidden += 1;
                    }
                }
            }
        }

        if stats.batches_recomputed > 0 {
            debug!(
                "Culling: {} batches recomputed, {} shown, {} hidden",
                stats.batches_recomputed, stats.shown, stats.hidden
            );
        }
        stats
    }
}

impl Default for CullingController {
    fn default() -> Self {
        Self::new(CullingSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::render::HeadlessRenderer;
    use crate::game::terrain::TerrainGenerator;

    const RENDER: f32 = 40.0;
    const MIN: f32 = 10.0;

    #[test]
    fn near_blocks_ignore_facing() {
        let player = Vec3::new(50.0, 10.0, 50.0);
        let forward = yaw_forward(0.0);
        assert!(is_block_visible(player - forward * 5.0, player, forward, RENDER, MIN));
        assert!(is_block_visible(player + forward * 5.0, player, forward, RENDER, MIN));
    }

    #[test]
    fn far_blocks_hidden() {
        let player = Vec3::new(50.0, 10.0, 50.0);
        let forward = yaw_forward(0.0);
        assert!(!is_block_visible(player + forward * 50.0, player, forward, RENDER, MIN));
        // Направление взгляда не спасает дальний блок
        assert!(!is_block_visible(player - forward * 50.0, player, forward, RENDER, MIN));
        assert!(!is_block_visible(player - forward * 50.0, player, -forward, RENDER, MIN));
    }

    #[test]
    fn behind_visible_after_turning_around() {
        let player = Vec3::new(50.0, 10.0, 50.0);
        let yaw = 0.3;
        let block = player - yaw_forward(yaw) * 20.0;
        assert!(!is_block_visible(block, player, yaw_forward(yaw), RENDER, MIN));
        assert!(is_block_visible(block, player, yaw_forward(yaw + PI), RENDER, MIN));
    }

    #[test]
    fn angle_delta_wraps() {
        assert!((angle_delta(0.05, TAU - 0.05) - 0.1).abs() < 1e-5);
        assert!((angle_delta(-3.1, 3.1) - (TAU - 6.2)).abs() < 1e-5);
    }

    #[test]
    fn recompute_only_past_thresholds() {
        let terrain = TerrainGenerator::new().generate(64, 7);
        let mut batches = BatchRegistry::from_terrain(&terrain);
        let mut renderer = HeadlessRenderer::new();
        let mut culling = CullingController::default();
        let start = Vec3::new(32.0, 12.0, 32.0);

        let first = culling.update(start, 0.0, &mut batches, &mut renderer);
        assert_eq!(first.batches_recomputed, BlockType::COUNT);
        assert!(first.hidden > 0);

        // Мелкое движение и поворот ниже порогов
        let idle = culling.update(start + Vec3::new(1.0, 0.0, 0.0), 0.05, &mut batches, &mut renderer);
        assert_eq!(idle, CullingStats::default());

        let turned = culling.update(start, PI, &mut batches, &mut renderer);
        assert_eq!(turned.batches_recomputed, BlockType::COUNT);
        assert!(turned.shown > 0 && turned.hidden > 0);
    }

    #[test]
    fn batch_state_matches_predicate() {
        let terrain = TerrainGenerator::new().generate(64, 7);
        let mut batches = BatchRegistry::from_terrain(&terrain);
        let mut renderer = HeadlessRenderer::new();
        let mut culling = CullingController::default();
        let player = Vec3::new(10.0, 12.0, 10.0);
        let yaw = 1.0;

        culling.update(player, yaw, &mut batches, &mut renderer);

        let grass = batches.get(BlockType::Grass);
        for (i, pos) in grass.positions().iter().enumerate() {
            let expected = is_block_visible(pos.center(), player, yaw_forward(yaw), RENDER, MIN);
            assert_eq!(grass.is_visible(i), expected);
        }
    }
}
