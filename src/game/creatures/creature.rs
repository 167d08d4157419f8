// ============================================
// Creature - Бродячие существа (свиньи, гремлины)
// ============================================
// Автомат блуждания: идём по курсу, через случайную паузу
// выбираем новый курс. Толчок от игрока подавляет блуждание,
// пока трение не погасит горизонтальную скорость.
// Горизонтальных коллизий нет, только прилипание к земле.

use std::f32::consts::TAU;

use log::info;
use ultraviolet::Vec3;

use crate::game::actor::{
    apply_friction, apply_gravity, clamp_to_arena, snap_to_ground, ActorKind, ActorState, Arena,
    CreatureVariant, GRAVITY, PUSH_FRICTION,
};
use crate::game::physics::{CollisionResolver, PLAYER_HEIGHT};

/// Порог горизонтальной скорости, выше которого существо считается толкаемым
pub const PUSH_THRESHOLD: f32 = 0.1;

/// Горизонтальная дистанция, на которой игрок толкает существо
pub const PUSH_RADIUS: f32 = 1.0;

/// Сила толчка
pub const PUSH_STRENGTH: f32 = 4.0;

/// Частота и амплитуда покачивания тела
const BOB_FREQUENCY: f32 = 10.0;
const BOB_AMOUNT: f32 = 0.02;

/// Параметры вида
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureProfile {
    pub speed: f32,
    pub jump_power: f32,
    /// Пауза до смены курса: min + rand * span
    pub dwell_min: f32,
    pub dwell_span: f32,
    /// Интервал случайных прыжков, None = не прыгает
    pub jump_interval: Option<(f32, f32)>,
}

impl CreatureProfile {
    pub fn of(variant: CreatureVariant) -> Self {
        match variant {
            CreatureVariant::Pig => Self {
                speed: 2.0,
                jump_power: 6.0,
                dwell_min: 2.0,
                dwell_span: 3.0,
                jump_interval: Some((3.0, 4.0)),
            },
            CreatureVariant::Gremlin => Self {
                speed: 1.5,
                jump_power: 5.0,
                dwell_min: 1.0,
                dwell_span: 2.0,
                jump_interval: None,
            },
        }
    }

    fn roll_dwell(&self, rng: &mut fastrand::Rng) -> f32 {
        self.dwell_min + rng.f32() * self.dwell_span
    }

    fn roll_jump(&self, rng: &mut fastrand::Rng) -> f32 {
        self.jump_interval
            .map_or(f32::INFINITY, |(min, span)| min + rng.f32() * span)
    }
}

/// Существо
#[derive(Debug, Clone)]
pub struct Creature {
    pub variant: CreatureVariant,
    pub actor: ActorState,
    profile: CreatureProfile,
    /// Смещение тела по y для анимации
    pub body_bob: f32,
}

impl Creature {
    pub fn new(variant: CreatureVariant, position: Vec3, rng: &mut fastrand::Rng) -> Self {
        let profile = CreatureProfile::of(variant);
        let mut actor = ActorState::new(ActorKind::Creature(variant), position, profile.speed, profile.jump_power);
        actor.yaw = rng.f32() * TAU;
        actor.timers.dwell = profile.roll_dwell(rng);
        actor.timers.jump = profile.roll_jump(rng);
        Self {
            variant,
            actor,
            profile,
            body_bob: 0.0,
        }
    }

    /// Толкается ли сейчас
    pub fn is_pushed(&self) -> bool {
        self.actor.velocity.x.abs() > PUSH_THRESHOLD || self.actor.velocity.z.abs() > PUSH_THRESHOLD
    }

    /// Добавить горизонтальный импульс
    pub fn push(&mut self, impulse: Vec3) {
        self.actor.velocity.x += impulse.x;
        self.actor.velocity.z += impulse.z;
    }

    /// Оттолкнуть от игрока, если он вплотную. fallback = направление,
    /// когда центры совпадают по x/z
    pub fn push_away_from(&mut self, player: Vec3, fallback: Vec3) -> bool {
        if (self.actor.position.y - player.y).abs() > PLAYER_HEIGHT {
            return false;
        }
        let dx = self.actor.position.x - player.x;
        let dz = self.actor.position.z - player.z;
        let distance = (dx * dx + dz * dz).sqrt();
        if distance >= PUSH_RADIUS {
            return false;
        }
        let direction = if distance > 1e-4 {
            Vec3::new(dx / distance, 0.0, dz / distance)
        } else {
            fallback
        };
        self.push(direction * PUSH_STRENGTH);
        true
    }

    pub fn update(&mut self, resolver: &CollisionResolver, arena: Arena, rng: &mut fastrand::Rng, dt: f32) {
        let actor = &mut self.actor;
        actor.timers.walk += dt;
        actor.timers.dwell -= dt;

        if !self.is_pushed() {
            let actor = &mut self.actor;
            if actor.timers.dwell <= 0.0 {
                actor.yaw = rng.f32() * TAU;
                actor.timers.dwell = self.profile.roll_dwell(rng);
            }

            let heading = Vec3::new(actor.yaw.cos(), 0.0, actor.yaw.sin());
            actor.position += heading * actor.speed * dt;

            if self.profile.jump_interval.is_some() {
                actor.timers.jump -= dt;
                if actor.on_ground && actor.timers.jump <= 0.0 {
                    actor.velocity.y = actor.jump_power;
                    actor.on_ground = false;
                    actor.timers.jump = self.profile.roll_jump(rng);
                }
            }
        }

        let actor = &mut self.actor;
        apply_gravity(actor, GRAVITY, dt);
        actor.position += actor.velocity * dt;
        apply_friction(actor, PUSH_FRICTION);

        let ground = resolver.ground_height(actor.position.x, actor.position.z);
        snap_to_ground(actor, ground);
        clamp_to_arena(actor, arena);

        self.body_bob = (actor.timers.walk * BOB_FREQUENCY).sin() * BOB_AMOUNT;
    }
}

/// Заспавнить группу вокруг якоря со случайным смещением ±spread/2 по x/z
pub fn spawn_group(
    variant: CreatureVariant,
    count: usize,
    anchor: Vec3,
    spread: f32,
    rng: &mut fastrand::Rng,
) -> Vec<Creature> {
    let creatures: Vec<Creature> = (0..count)
        .map(|_| {
            let offset = Vec3::new((rng.f32() - 0.5) * spread, 0.0, (rng.f32() - 0.5) * spread);
            Creature::new(variant, anchor + offset, rng)
        })
        .collect();

    info!(
        "Spawned {} {:?} near ({:.0}, {:.0}, {:.0})",
        creatures.len(),
        variant,
        anchor.x,
        anchor.y,
        anchor.z
    );
    creatures
}
