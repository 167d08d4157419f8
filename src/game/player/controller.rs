// ============================================
// Player Controller - Ввод → кинематика игрока
// ============================================

use ultraviolet::Vec3;

use crate::game::actor::{apply_gravity, clamp_to_arena, Arena, GRAVITY, WATER_GRAVITY};
use crate::game::physics::CollisionResolver;
use crate::game::systems::InputSnapshot;

use super::player::{Player, PITCH_LIMIT};

/// Множитель скорости в воде
pub const WATER_SPEED_FACTOR: f32 = 0.5;

/// Множитель прыжка в воде
pub const WATER_JUMP_FACTOR: f32 = 0.8;

/// Затухание вертикальной скорости в воде за тик
pub const WATER_DRAG: f32 = 0.9;

/// Контроллер игрока (параметры мира, в которых он двигается)
#[derive(Debug, Clone, Copy)]
pub struct PlayerController {
    pub water_level: f32,
    pub arena: Arena,
}

impl PlayerController {
    pub fn new(water_level: i32, arena: Arena) -> Self {
        Self {
            water_level: water_level as f32,
            arena,
        }
    }

    /// Ноги на уровне воды или ниже
    pub fn in_water(&self, player: &Player) -> bool {
        player.actor.position.y <= self.water_level
    }

    /// Один тик игрока
    pub fn update(&self, player: &mut Player, input: &InputSnapshot, resolver: &CollisionResolver, dt: f32) {
        // === Вращение ===
        player.actor.yaw += input.yaw_delta;
        player.pitch = (player.pitch + input.pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        if input.reset {
            player.respawn();
            return;
        }

        let in_water = self.in_water(player);
        let (speed, jump, gravity) = if in_water {
            (
                player.actor.speed * WATER_SPEED_FACTOR,
                player.actor.jump_power * WATER_JUMP_FACTOR,
                WATER_GRAVITY,
            )
        } else {
            (player.actor.speed, player.actor.jump_power, GRAVITY)
        };

        // === Движение относительно yaw ===
        let forward = player.forward_horizontal();
        let right = player.right_horizontal();
        let mut move_dir = Vec3::zero();

        if input.forward { move_dir += forward; }
        if input.backward { move_dir -= forward; }
        if input.right { move_dir += right; }
        if input.left { move_dir -= right; }

        if move_dir.mag_sq() > 0.0 {
            move_dir = move_dir.normalized();
        }

        player.actor.velocity.x = move_dir.x * speed;
        player.actor.velocity.z = move_dir.z * speed;

        // === Прыжок ===
        if player.actor.on_ground {
            player.double_jump_used = false;
            if input.jump_held {
                player.actor.velocity.y = jump;
                player.actor.on_ground = false;
            }
        } else if input.jump_pressed && player.double_jump && !player.double_jump_used {
            player.actor.velocity.y = jump;
            player.double_jump_used = true;
        }

        if !player.actor.on_ground {
            apply_gravity(&mut player.actor, gravity, dt);
        }

        if in_water {
            player.actor.velocity.y *= WATER_DRAG;
        }

        resolver.move_actor(&mut player.actor, dt);
        clamp_to_arena(&mut player.actor, self.arena);
    }
}
