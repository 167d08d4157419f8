// ============================================
// Terrain Module - Статичный воксельный мир
// ============================================

pub mod generation;
pub mod world;

// Re-exports
pub use generation::{height_at, GeneratedTerrain, HeightMap, TerrainGenerator};
pub use world::{BlockPos, VoxelWorld};
