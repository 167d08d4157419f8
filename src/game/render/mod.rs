// ============================================
// Render Module - Граница с графическим движком
// ============================================
// Ядро не рисует само: оно сообщает рендереру, какие объекты есть,
// где они стоят и какие инстансы батчей скрыты.

mod batch;
mod culling;
mod headless;

pub use batch::*;
pub use culling::*;
pub use headless::HeadlessRenderer;

use ultraviolet::{Mat4, Vec3};

use crate::game::actor::ActorKind;
use crate::game::blocks::BlockType;

/// Идентификатор объекта сцены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawableId {
    Batch(BlockType),
    Player,
    Creature(usize),
    PowerUp,
    /// Спутник бонуса по индексу
    PowerUpOrb(usize),
}

/// Что добавляется в сцену
pub enum Drawable<'a> {
    /// Инстанс-батч (начальные трансформы и материал)
    Batch(&'a InstancedBatch),
    /// Модель актёра
    Actor { kind: ActorKind, position: Vec3, yaw: f32 },
    /// Ядро бонуса
    PowerUp { position: Vec3 },
    /// Спутник бонуса
    PowerUpOrb { position: Vec3 },
}

/// Рендерер / сцена
pub trait Renderer {
    fn add_drawable(&mut self, id: DrawableId, drawable: Drawable<'_>);

    fn remove_drawable(&mut self, id: DrawableId);

    /// Обновить один инстанс батча (скрытый = нулевой масштаб)
    fn set_instance_transform(&mut self, block: BlockType, index: usize, transform: InstanceTransform);

    /// Зеркало позиции актёра или бонуса
    fn set_drawable_transform(&mut self, id: DrawableId, position: Vec3, yaw: f32);

    /// Матрица вида-проекции кадра
    fn set_camera(&mut self, view_projection: Mat4);

    fn render(&mut self);
}
