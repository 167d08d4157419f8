// ============================================
// Player Module - Игрок и камера
// ============================================

mod player;
mod controller;
mod camera;

pub use player::*;
pub use controller::*;
pub use camera::*;
