// ============================================
// Terrain Generator - Рельеф, вода, постройки
// ============================================
// Один проход при старте: карта высот (параллельно), затем
// последовательная запись колонок и стен в VoxelWorld.

pub mod height;
pub mod structure;

pub use height::{height_at, HeightMap};
pub use structure::{WallRing, COBBLESTONE_BOX};

use log::{info, warn};

use crate::game::blocks::BlockType;
use crate::game::terrain::world::{BlockPos, VoxelWorld};

/// Результат генерации мира
pub struct GeneratedTerrain {
    pub world_size: i32,
    pub water_level: i32,
    pub heights: HeightMap,
    /// Твёрдые блоки (вода сюда не входит)
    pub world: VoxelWorld,
    /// Позиции по типам в порядке генерации; индекс в списке = индекс в батче
    pub blocks: [Vec<BlockPos>; BlockType::COUNT],
}

impl GeneratedTerrain {
    pub fn positions(&self, block: BlockType) -> &[BlockPos] {
        &self.blocks[block.index()]
    }

}

/// Генератор статичного мира
pub struct TerrainGenerator {
    structures: Vec<WallRing>,
}

impl TerrainGenerator {
    pub fn new() -> Self {
        Self {
            structures: vec![COBBLESTONE_BOX],
        }
    }

    pub fn generate(&self, world_size: i32, water_level: i32) -> GeneratedTerrain {
        let heights = HeightMap::compute(world_size);
        let mut world = VoxelWorld::with_capacity(heights.columns().map(|(_, _, h)| (h.max(-1) + 1) as usize).sum());
        let mut blocks: [Vec<BlockPos>; BlockType::COUNT] = Default::default();

        for (x, z, h) in heights.columns() {
            for y in 0..=h {
                let pos = BlockPos::new(x, y, z);
                world.set(pos);
                blocks[BlockType::for_column_depth(y, h).index()].push(pos);
            }

            if h < water_level {
                let water = &mut blocks[BlockType::Water.index()];
                for y in (h + 1)..=water_level {
                    water.push(BlockPos::new(x, y, z));
                }
            }
        }

        for ring in &self.structures {
            Self::stamp_ring(ring, &heights, &mut world, &mut blocks[BlockType::Cobblestone.index()]);
        }

        let terrain = GeneratedTerrain {
            world_size,
            water_level,
            heights,
            world,
            blocks,
        };

        info!(
            "Terrain generated: {}x{} columns, {} solid, grass {} dirt {} stone {} cobblestone {} water {}",
            world_size,
            world_size,
            terrain.world.len(),
            terrain.positions(BlockType::Grass).len(),
            terrain.positions(BlockType::Dirt).len(),
            terrain.positions(BlockType::Stone).len(),
            terrain.positions(BlockType::Cobblestone).len(),
            terrain.positions(BlockType::Water).len(),
        );

        terrain
    }

    fn stamp_ring(ring: &WallRing, heights: &HeightMap, world: &mut VoxelWorld, out: &mut Vec<BlockPos>) {
        if !ring.fits(heights.size()) {
            warn!(
                "Structure at ({}, {}) does not fit world of size {}, skipped",
                ring.center_x,
                ring.center_z,
                heights.size()
            );
            return;
        }

        let Some(ground) = heights.get(ring.center_x, ring.center_z) else {
            return;
        };

        for pos in ring.wall_blocks(ground) {
            // Уже твёрдые от рельефа остаются в своём батче
            if world.set(pos) {
                out.push(pos);
            }
        }
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = TerrainGenerator::new().generate(96, 7);
        let b = TerrainGenerator::new().generate(96, 7);
        for block in BlockType::ALL {
            assert_eq!(a.positions(block), b.positions(block));
        }
        assert_eq!(a.world.len(), b.world.len());
    }

    #[test]
    fn columns_are_contiguous() {
        let terrain = TerrainGenerator { structures: Vec::new() }.generate(48, 7);
        for (x, z, h) in terrain.heights.columns() {
            for y in 0..=h {
                assert!(terrain.world.has_xyz(x, y, z), "hole at ({}, {}, {})", x, y, z);
            }
            assert!(!terrain.world.has_xyz(x, h + 1, z));
            assert!(!terrain.world.has_xyz(x, h + 5, z));
        }
    }

    #[test]
    fn water_is_listed_but_never_solid() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        let water = terrain.positions(BlockType::Water);
        assert!(!water.is_empty());
        for pos in water {
            assert!(!terrain.world.has(*pos));
            let h = terrain.heights.get(pos.x, pos.z).unwrap();
            assert!(pos.y > h && pos.y <= 7);
        }
    }

    #[test]
    fn reference_column() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        assert_eq!(terrain.heights.get(100, 100), Some(10));
        assert!(terrain.world.has_xyz(100, 10, 100));
        assert!(!terrain.world.has_xyz(100, 11, 100));
        assert!(!terrain
            .positions(BlockType::Water)
            .iter()
            .any(|p| p.x == 100 && p.z == 100));
    }

    #[test]
    fn every_coordinate_belongs_to_one_batch() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        let solid: usize = BlockType::ALL
            .iter()
            .filter(|b| b.is_solid())
            .map(|b| terrain.positions(*b).len())
            .sum();
        assert_eq!(solid, terrain.world.len());
    }

    #[test]
    fn cobblestone_box_has_doorway() {
        let terrain = TerrainGenerator::new().generate(200, 7);
        let ground = height_at(78, 62);
        assert!(terrain.world.has_xyz(70, ground + 1, 60));
        assert!(terrain.world.has_xyz(70, ground + 4, 60));
        for x in 77..=79 {
            assert!(!terrain.world.has_xyz(x, ground + 1, 54));
        }
        assert!(!terrain.positions(BlockType::Cobblestone).is_empty());
    }

    #[test]
    fn small_world_skips_structure() {
        let terrain = TerrainGenerator::new().generate(32, 7);
        assert!(terrain.positions(BlockType::Cobblestone).is_empty());
    }
}
