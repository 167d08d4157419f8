// ============================================
// Collision Resolver - Раздельное по осям движение
// ============================================
// Хитбокс игрока: ±0.3 по x/z, высота 1.9 от ног.
// Порядок осей: X (старые y, z) → Z (новый x, старый y) → Y.

use crate::game::actor::ActorState;
use crate::game::terrain::VoxelWorld;

/// Полуширина хитбокса
pub const PLAYER_RADIUS: f32 = 0.3;

/// Высота хитбокса от ног
pub const PLAYER_HEIGHT: f32 = 1.9;

/// С какой высоты ищется земля
pub const GROUND_PROBE_CEILING: i32 = 50;

/// Допуск прилипания к земле при падении
pub const GROUND_SNAP_EPSILON: f32 = 0.1;

/// Запросы коллизий поверх мира (только чтение)
#[derive(Clone, Copy)]
pub struct CollisionResolver<'w> {
    world: &'w VoxelWorld,
}

impl<'w> CollisionResolver<'w> {
    pub fn new(world: &'w VoxelWorld) -> Self {
        Self { world }
    }

    /// Пересекает ли хитбокс с ногами в (x, y, z) твёрдый блок
    pub fn check_collision(&self, x: f32, y: f32, z: f32) -> bool {
        let min_x = (x - PLAYER_RADIUS).floor() as i32;
        let max_x = (x + PLAYER_RADIUS).floor() as i32;
        let min_y = y.floor() as i32;
        let max_y = (y + PLAYER_HEIGHT).floor() as i32;
        let min_z = (z - PLAYER_RADIUS).floor() as i32;
        let max_z = (z + PLAYER_RADIUS).floor() as i32;

        for bx in min_x..=max_x {
            for by in min_y..=max_y {
                for bz in min_z..=max_z {
                    if self.world.has_xyz(bx, by, bz) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Верх самого высокого твёрдого блока в колонке, 0 если колонка пуста
    pub fn ground_height(&self, x: f32, z: f32) -> f32 {
        let bx = x.floor() as i32;
        let bz = z.floor() as i32;
        (0..=GROUND_PROBE_CEILING)
            .rev()
            .find(|&y| self.world.has_xyz(bx, y, bz))
            .map_or(0.0, |y| (y + 1) as f32)
    }

    /// Поднять ноги на целые блоки, пока хитбокс задевает ступеньку под краем.
    /// Не выше ближайшего целого над исходной высотой
    fn lift_out_of_blocks(&self, x: f32, mut y: f32, z: f32, limit: f32) -> f32 {
        while y + 1.0 <= limit.ceil() && self.check_collision(x, y, z) {
            y += 1.0;
        }
        y
    }

    /// Интегрировать скорость актёра за dt с коллизиями
    pub fn move_actor(&self, actor: &mut ActorState, dt: f32) {
        let old = actor.position;

        // === X ===
        let new_x = old.x + actor.velocity.x * dt;
        if self.check_collision(new_x, old.y, old.z) {
            actor.velocity.x = 0.0;
        } else {
            actor.position.x = new_x;
        }

        // === Z ===
        let new_z = old.z + actor.velocity.z * dt;
        if self.check_collision(actor.position.x, old.y, new_z) {
            actor.velocity.z = 0.0;
        } else {
            actor.position.z = new_z;
        }

        // === Y ===
        let new_y = old.y + actor.velocity.y * dt;
        if actor.velocity.y <= 0.0 {
            let (x, z) = (actor.position.x, actor.position.z);
            let ground = self.ground_height(x, z);
            let landing = if new_y <= ground + GROUND_SNAP_EPSILON {
                Some(ground)
            } else if self.check_collision(x, new_y - GROUND_SNAP_EPSILON, z) {
                // Край хитбокса над ступенькой выше колонки центра
                Some((new_y - GROUND_SNAP_EPSILON).floor() + 1.0)
            } else {
                None
            };

            match landing {
                Some(y) => {
                    actor.position.y = self.lift_out_of_blocks(x, y, z, old.y);
                    actor.velocity.y = 0.0;
                    actor.on_ground = true;
                }
                None => {
                    actor.position.y = new_y;
                    actor.on_ground = false;
                }
            }
        } else {
            if self.check_collision(actor.position.x, new_y, actor.position.z) {
                // Удар головой
                actor.velocity.y = 0.0;
            } else {
                actor.position.y = new_y;
            }
            actor.on_ground = false;
        }
    }
}
