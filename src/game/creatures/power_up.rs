// ============================================
// Power-Up - Бонус двойного прыжка
// ============================================
// Вращающееся ядро с покачиванием и три спутника-сферы,
// которые качаются независимо. Подбирается один раз.

use std::f32::consts::TAU;

use log::{info, warn};
use ultraviolet::Vec3;

use crate::game::physics::CollisionResolver;

/// Дистанция подбора
pub const COLLECT_RADIUS: f32 = 2.0;

/// Сколько случайных точек пробуем при спавне
pub const SPAWN_ATTEMPTS: usize = 50;

/// Высота зависания над землёй
const HOVER_HEIGHT: f32 = 1.5;

const SPIN_SPEED: f32 = 1.5;
const CORE_BOB_SPEED: f32 = 2.0;
const CORE_BOB_AMOUNT: f32 = 0.3;
pub const ORB_COUNT: usize = 3;
const ORB_RADIUS: f32 = 0.8;
const ORB_BOB_AMOUNT: f32 = 0.15;

/// Спутник вокруг ядра
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Угол на орбите относительно вращения ядра
    pub angle: f32,
    /// Собственная фаза покачивания
    pub phase: f32,
    pub bob_speed: f32,
    /// Текущее смещение по y
    pub bob: f32,
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    /// Базовая позиция (без анимации)
    pub position: Vec3,
    pub phase: f32,
    pub spin: f32,
    /// Текущее смещение ядра по y
    pub core_bob: f32,
    pub orbs: [Orb; ORB_COUNT],
    collected: bool,
}

impl PowerUp {
    pub fn new(position: Vec3) -> Self {
        let orbs = std::array::from_fn(|i| {
            let t = i as f32 / ORB_COUNT as f32;
            Orb {
                angle: t * TAU,
                phase: t * TAU * 0.5,
                bob_speed: 3.0 + i as f32 * 0.7,
                bob: 0.0,
            }
        });
        Self {
            position,
            phase: 0.0,
            spin: 0.0,
            core_bob: 0.0,
            orbs,
            collected: false,
        }
    }

    /// Найти сухую точку над водой. После SPAWN_ATTEMPTS неудач берём центр мира
    pub fn spawn(
        resolver: &CollisionResolver,
        world_size: i32,
        water_level: i32,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let margin = 10.0_f32.min(world_size as f32 * 0.25);
        let span = (world_size as f32 - 2.0 * margin).max(0.0);

        for _ in 0..SPAWN_ATTEMPTS {
            let x = margin + rng.f32() * span;
            let z = margin + rng.f32() * span;
            let ground = resolver.ground_height(x, z);
            if ground > water_level as f32 + 1.0 {
                let position = Vec3::new(x, ground + HOVER_HEIGHT, z);
                info!("Power-up spawned at ({:.1}, {:.1}, {:.1})", position.x, position.y, position.z);
                return Self::new(position);
            }
        }

        let center = world_size as f32 * 0.5;
        let ground = resolver.ground_height(center, center).max(water_level as f32 + 1.0);
        let position = Vec3::new(center, ground + HOVER_HEIGHT, center);
        warn!(
            "No dry spot for power-up after {} attempts, using ({:.1}, {:.1}, {:.1})",
            SPAWN_ATTEMPTS, position.x, position.y, position.z
        );
        Self::new(position)
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Позиция ядра с учётом покачивания
    pub fn core_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.core_bob, 0.0)
    }

    /// Позиции всех спутников
    pub fn orb_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.orbs.len()).filter_map(|i| self.orb_position(i))
    }

    /// Позиция спутника
    pub fn orb_position(&self, index: usize) -> Option<Vec3> {
        let orb = self.orbs.get(index)?;
        let angle = self.spin + orb.angle;
        Some(self.position + Vec3::new(angle.cos() * ORB_RADIUS, orb.bob, angle.sin() * ORB_RADIUS))
    }

    pub fn update(&mut self, dt: f32) {
        if self.collected {
            return;
        }
        self.phase += dt;
        self.spin = (self.spin + SPIN_SPEED * dt) % TAU;
        self.core_bob = (self.phase * CORE_BOB_SPEED).sin() * CORE_BOB_AMOUNT;
        for orb in &mut self.orbs {
            orb.bob = (self.phase * orb.bob_speed + orb.phase).sin() * ORB_BOB_AMOUNT;
        }
    }

    /// true ровно один раз: в тик, когда игрок подошёл ближе COLLECT_RADIUS
    pub fn try_collect(&mut self, player_position: Vec3) -> bool {
        if self.collected {
            return false;
        }
        if (player_position - self.position).mag() < COLLECT_RADIUS {
            self.collected = true;
            info!("Power-up collected");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::terrain::{BlockPos, VoxelWorld};

    #[test]
    fn collected_once() {
        let mut power_up = PowerUp::new(Vec3::new(10.0, 12.0, 10.0));
        assert!(!power_up.try_collect(Vec3::new(13.0, 12.0, 10.0)));
        assert!(power_up.try_collect(Vec3::new(11.0, 11.0, 10.0)));
        assert!(power_up.is_collected());
        assert!(!power_up.try_collect(Vec3::new(10.0, 12.0, 10.0)));
    }

    #[test]
    fn animation_stays_bounded() {
        let mut power_up = PowerUp::new(Vec3::new(0.0, 5.0, 0.0));
        for _ in 0..600 {
            power_up.update(1.0 / 60.0);
            assert!(power_up.core_bob.abs() <= CORE_BOB_AMOUNT + 1e-6);
            assert!((0.0..TAU).contains(&power_up.spin));
            for orb in &power_up.orbs {
                assert!(orb.bob.abs() <= ORB_BOB_AMOUNT + 1e-6);
            }
        }
        // Спутники качаются не синхронно
        assert_ne!(power_up.orbs[0].bob, power_up.orbs[1].bob);
        assert!(power_up.orb_position(2).is_some());
        assert!(power_up.orb_position(3).is_none());
    }

    #[test]
    fn spawns_on_dry_land() {
        let mut world = VoxelWorld::new();
        for x in 0..64 {
            for z in 0..64 {
                let top = if x < 32 { 3 } else { 12 };
                world.set(BlockPos::new(x, top, z));
            }
        }
        let resolver = CollisionResolver::new(&world);
        let mut rng = fastrand::Rng::with_seed(42);
        let power_up = PowerUp::spawn(&resolver, 64, 7, &mut rng);
        assert!(power_up.position.x >= 32.0);
        assert_eq!(power_up.position.y, 13.0 + HOVER_HEIGHT);
    }

    #[test]
    fn flooded_world_uses_fallback() {
        let world = VoxelWorld::new();
        let resolver = CollisionResolver::new(&world);
        let mut rng = fastrand::Rng::with_seed(42);
        let power_up = PowerUp::spawn(&resolver, 64, 7, &mut rng);
        assert_eq!(power_up.position, Vec3::new(32.0, 8.0 + HOVER_HEIGHT, 32.0));
    }
}
