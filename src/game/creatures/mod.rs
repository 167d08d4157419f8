// ============================================
// Creatures Module - Существа и бонусы
// ============================================

mod creature;
mod power_up;

pub use creature::*;
pub use power_up::*;
