// ============================================
// Player Entity - Физическая сущность игрока
// ============================================
// Хранит позицию ног. Кинематика общая с существами (ActorState),
// сверху точка спавна, наклон головы и двойной прыжок.

use ultraviolet::Vec3;

use crate::game::actor::{ActorKind, ActorState};

/// Высота глаз от ног
pub const EYE_HEIGHT: f32 = 1.6;

/// Предел наклона головы (чуть меньше 90°)
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Игрок
#[derive(Debug, Clone)]
pub struct Player {
    pub actor: ActorState,

    /// Куда возвращает сброс
    pub spawn: Vec3,

    /// Вертикальный угол головы
    pub pitch: f32,

    /// Получен ли двойной прыжок (бонус)
    pub double_jump: bool,

    /// Потрачен ли второй прыжок в текущем полёте
    pub double_jump_used: bool,
}

impl Player {
    pub fn new(spawn: Vec3, speed: f32, jump_power: f32) -> Self {
        Self {
            actor: ActorState::new(ActorKind::Player, spawn, speed, jump_power),
            spawn,
            pitch: 0.0,
            double_jump: false,
            double_jump_used: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.actor.position
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.actor.yaw
    }

    /// Позиция глаз (камера от первого лица)
    pub fn eye_position(&self) -> Vec3 {
        self.actor.position + Vec3::new(0.0, EYE_HEIGHT, 0.0)
    }

    /// Направление взгляда с учётом pitch
    pub fn forward(&self) -> Vec3 {
        let yaw = self.actor.yaw;
        Vec3::new(
            yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            yaw.sin() * self.pitch.cos(),
        )
        .normalized()
    }

    /// Горизонтальное направление (без pitch)
    pub fn forward_horizontal(&self) -> Vec3 {
        let yaw = self.actor.yaw;
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Горизонтальный вектор вправо
    pub fn right_horizontal(&self) -> Vec3 {
        self.forward_horizontal().cross(Vec3::unit_y()).normalized()
    }

    /// Вернуть на точку спавна
    pub fn respawn(&mut self) {
        self.actor.position = self.spawn;
        self.actor.velocity = Vec3::zero();
        self.actor.on_ground = false;
        self.double_jump_used = false;
    }

    /// Выдать двойной прыжок
    pub fn grant_double_jump(&mut self) {
        self.double_jump = true;
    }
}
