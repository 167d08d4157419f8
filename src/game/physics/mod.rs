// ============================================
// Physics Module - Коллизии с воксельным миром
// ============================================

mod collision;

pub use collision::*;
