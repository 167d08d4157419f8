// ============================================
// Kinematics - Общие шаги интеграции
// ============================================

use super::{ActorState, Arena};

/// Гравитация на суше
pub const GRAVITY: f32 = 25.0;

/// Гравитация в воде
pub const WATER_GRAVITY: f32 = 10.0;

/// Затухание горизонтального толчка за тик
pub const PUSH_FRICTION: f32 = 0.9;

#[inline]
pub fn apply_gravity(actor: &mut ActorState, gravity: f32, dt: f32) {
    actor.velocity.y -= gravity * dt;
}

/// Поставить на землю если ноги ниже неё. Возвращает true при касании
pub fn snap_to_ground(actor: &mut ActorState, ground: f32) -> bool {
    if actor.position.y <= ground {
        actor.position.y = ground;
        actor.velocity.y = 0.0;
        actor.on_ground = true;
        true
    } else {
        actor.on_ground = false;
        false
    }
}

/// Зажать x/z в границы арены с отступом по виду актёра
pub fn clamp_to_arena(actor: &mut ActorState, arena: Arena) {
    let margin = Arena::margin_for(actor.kind);
    let max = (arena.size - margin).max(margin);
    actor.position.x = actor.position.x.clamp(margin, max);
    actor.position.z = actor.position.z.clamp(margin, max);
}

#[inline]
pub fn apply_friction(actor: &mut ActorState, factor: f32) {
    actor.velocity.x *= factor;
    actor.velocity.z *= factor;
}
