// ============================================
// Actor Module - Кинематическое состояние существ
// ============================================
// Игрок и существа хранят одно и то же состояние,
// различаются тегом ActorKind.

mod kinematics;

pub use kinematics::*;

use ultraviolet::Vec3;

/// Вид существа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureVariant {
    Pig,
    Gremlin,
}

/// Тег актёра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Creature(CreatureVariant),
}

/// Таймеры анимации
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationTimers {
    /// Фаза ходьбы / покачивания
    pub walk: f32,
    /// Время до смены направления
    pub dwell: f32,
    /// Время до следующего прыжка (свиньи)
    pub jump: f32,
}

/// Кинематика актёра (позиция ног)
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    pub kind: ActorKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub speed: f32,
    pub jump_power: f32,
    pub on_ground: bool,
    /// Горизонтальный угол
    pub yaw: f32,
    pub timers: AnimationTimers,
}

impl ActorState {
    pub fn new(kind: ActorKind, position: Vec3, speed: f32, jump_power: f32) -> Self {
        Self {
            kind,
            position,
            velocity: Vec3::zero(),
            speed,
            jump_power,
            on_ground: false,
            yaw: 0.0,
            timers: AnimationTimers::default(),
        }
    }
}

/// Квадратная арена [0, size)² по x/z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub size: f32,
}

impl Arena {
    /// Отступ от края для игрока
    pub const PLAYER_MARGIN: f32 = 0.5;
    /// Отступ от края для существ
    pub const CREATURE_MARGIN: f32 = 5.0;

    pub fn new(size: i32) -> Self {
        Self { size: size as f32 }
    }

    pub fn margin_for(kind: ActorKind) -> f32 {
        match kind {
            ActorKind::Player => Self::PLAYER_MARGIN,
            ActorKind::Creature(_) => Self::CREATURE_MARGIN,
        }
    }
}
