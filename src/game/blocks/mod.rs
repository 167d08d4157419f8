// ============================================
// Blocks Module - Типы, материалы, прицеливание
// ============================================
// Data-Driven Architecture: материалы загружаются из JSON

mod types;
mod definition;
mod registry;
mod targeting;

pub use types::*;
pub use definition::*;
pub use registry::*;
pub use targeting::*;
