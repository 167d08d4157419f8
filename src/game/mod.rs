// ============================================
// Game Module - Ядро воксельной песочницы
// ============================================
// Статичный воксельный мир, игрок с коллизиями, существа,
// бонус, хотбар и отсечение инстансов по взгляду.
// Рендерер, ввод и UI подключаются через трейты.

pub mod actor;
pub mod blocks;
pub mod creatures;
pub mod gui;
pub mod physics;
pub mod player;
pub mod render;
pub mod terrain;

pub mod core;
pub mod systems;

pub use self::core::app::run;
