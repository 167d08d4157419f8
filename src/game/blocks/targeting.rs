// ============================================
// Block Targeting - Raycast от камеры к блоку
// ============================================
// Луч против видимых инстансов всех батчей (slab-тест по ячейке),
// побеждает ближайшее попадание. Результат нужен только UI.

use ultraviolet::Vec3;

use crate::game::blocks::BlockType;
use crate::game::render::BatchRegistry;
use crate::game::terrain::BlockPos;

/// Максимальная длина луча
pub const MAX_TARGET_DISTANCE: f32 = 10.0;

/// Половина диагонали единичного куба (для грубой проверки)
const CELL_HALF_DIAGONAL: f32 = 0.8661;

/// Блок под прицелом
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetedBlock {
    pub position: BlockPos,
    /// Индекс инстанса в батче
    pub index: usize,
    pub block: BlockType,
    /// Дистанция от глаз до точки входа луча
    pub distance: f32,
}

/// Дистанция входа луча в ячейку [min, min + 1]³ или None при промахе.
/// direction должен быть нормализован
pub fn ray_cell_distance(origin: Vec3, direction: Vec3, min: Vec3) -> Option<f32> {
    let o = [origin.x, origin.y, origin.z];
    let d = [direction.x, direction.y, direction.z];
    let lo = [min.x, min.y, min.z];

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let hi = lo[axis] + 1.0;
        if d[axis].abs() < 1e-8 {
            // Луч параллелен плоскостям: должен быть между ними
            if o[axis] < lo[axis] || o[axis] > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d[axis];
        let t1 = (lo[axis] - o[axis]) * inv;
        let t2 = (hi - o[axis]) * inv;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
    }

    if t_far < t_near.max(0.0) {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Прицеливание по батчам
#[derive(Debug, Clone, Copy)]
pub struct BlockTargeting {
    pub max_distance: f32,
}

impl BlockTargeting {
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Ближайший видимый блок на луче. Глаза под водой → None
    pub fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        batches: &BatchRegistry,
        water_level: f32,
    ) -> Option<TargetedBlock> {
        if origin.y <= water_level {
            return None;
        }
        if direction.mag_sq() == 0.0 {
            return None;
        }
        let direction = direction.normalized();
        let reach = self.max_distance + CELL_HALF_DIAGONAL;
        let reach_sq = reach * reach;

        let mut best: Option<TargetedBlock> = None;

        for batch in batches.iter() {
            for (index, pos) in batch.positions().iter().enumerate() {
                if !batch.is_visible(index) {
                    continue;
                }
                if (pos.center() - origin).mag_sq() > reach_sq {
                    continue;
                }
                let Some(distance) = ray_cell_distance(origin, direction, pos.min_corner()) else {
                    continue;
                };
                if distance > self.max_distance {
                    continue;
                }
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(TargetedBlock {
                        position: *pos,
                        index,
                        block: batch.block,
                        distance,
                    });
                }
            }
        }
        best
    }
}

impl Default for BlockTargeting {
    fn default() -> Self {
        Self::new(MAX_TARGET_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::terrain::TerrainGenerator;

    #[test]
    fn slab_hits_and_misses() {
        let min = Vec3::new(5.0, 0.0, 0.0);
        let hit = ray_cell_distance(Vec3::new(0.0, 0.5, 0.5), Vec3::unit_x(), min);
        assert_eq!(hit, Some(5.0));
        assert_eq!(ray_cell_distance(Vec3::new(0.0, 1.5, 0.5), Vec3::unit_x(), min), None);
        // Ячейка позади луча
        assert_eq!(ray_cell_distance(Vec3::new(7.0, 0.5, 0.5), Vec3::unit_x(), min), None);
        // Начало внутри ячейки
        assert_eq!(ray_cell_distance(Vec3::new(5.5, 0.5, 0.5), Vec3::unit_x(), min), Some(0.0));
    }

    #[test]
    fn looking_down_hits_surface_grass() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        let batches = BatchRegistry::from_terrain(&terrain);
        let eye = Vec3::new(100.5, 12.6, 100.5);

        let target = BlockTargeting::default()
            .cast(eye, Vec3::new(0.0, -1.0, 0.0), &batches, 7.0)
            .unwrap();

        assert_eq!(target.block, BlockType::Grass);
        assert_eq!(target.position, BlockPos::new(100, 10, 100));
        assert!((target.distance - 1.6).abs() < 1e-4);
        assert_eq!(batches.get(BlockType::Grass).position(target.index), Some(target.position));
    }

    #[test]
    fn sky_and_underwater_have_no_target() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        let batches = BatchRegistry::from_terrain(&terrain);
        let targeting = BlockTargeting::default();

        assert!(targeting.cast(Vec3::new(100.5, 12.6, 100.5), Vec3::unit_y(), &batches, 7.0).is_none());
        assert!(targeting.cast(Vec3::new(100.5, 6.5, 100.5), -Vec3::unit_y(), &batches, 7.0).is_none());
    }

    #[test]
    fn hidden_instances_are_skipped() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        let mut batches = BatchRegistry::from_terrain(&terrain);
        let eye = Vec3::new(100.5, 12.6, 100.5);
        let down = -Vec3::unit_y();

        let first = BlockTargeting::default().cast(eye, down, &batches, 7.0).unwrap();
        batches.get_mut(first.block).set_visible(first.index, false);

        let second = BlockTargeting::default().cast(eye, down, &batches, 7.0).unwrap();
        assert_eq!(second.position, BlockPos::new(100, 9, 100));
        assert_eq!(second.block, BlockType::Dirt);
    }
}
