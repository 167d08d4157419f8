// ============================================
// Instanced Batches - Один батч на тип блока
// ============================================
// Индекс инстанса стабилен всё время жизни процесса и служит
// ключом для отсечения и прицеливания.

use bytemuck::{Pod, Zeroable};

use crate::game::blocks::{block_definition, BlockDefinition, BlockType};
use crate::game::terrain::{BlockPos, GeneratedTerrain};

/// Трансформ инстанса в формате GPU буфера
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceTransform {
    /// Центр куба
    pub translation: [f32; 3],
    /// Равномерный масштаб, 0 = скрыт
    pub scale: f32,
}

impl InstanceTransform {
    /// Скрытый инстанс (нулевой масштаб)
    pub const HIDDEN: Self = Self {
        translation: [0.0; 3],
        scale: 0.0,
    };

    /// Единичный куб, занимающий ячейку блока
    pub fn for_block(pos: BlockPos) -> Self {
        let c = pos.center();
        Self {
            translation: [c.x, c.y, c.z],
            scale: 1.0,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.scale == 0.0
    }
}

/// Батч блоков одного типа
pub struct InstancedBatch {
    pub block: BlockType,
    pub material: BlockDefinition,
    positions: Vec<BlockPos>,
    transforms: Vec<InstanceTransform>,
    visible: Vec<bool>,
}

impl InstancedBatch {
    /// Все инстансы изначально видимы
    pub fn new(block: BlockType, positions: Vec<BlockPos>, material: BlockDefinition) -> Self {
        let transforms = positions.iter().map(|p| InstanceTransform::for_block(*p)).collect();
        let visible = vec![true; positions.len()];
        Self {
            block,
            material,
            positions,
            transforms,
            visible,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[BlockPos] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<BlockPos> {
        self.positions.get(index).copied()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn transform(&self, index: usize) -> Option<InstanceTransform> {
        self.transforms.get(index).copied()
    }

    /// Переключить видимость. Возвращает новый трансформ, если он изменился
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Option<InstanceTransform> {
        let current = self.visible.get_mut(index)?;
        if *current == visible {
            return None;
        }
        *current = visible;
        let transform = if visible {
            InstanceTransform::for_block(self.positions[index])
        } else {
            InstanceTransform::HIDDEN
        };
        self.transforms[index] = transform;
        Some(transform)
    }

    /// Трансформы как байты для загрузки в инстанс-буфер
    pub fn transforms_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transforms)
    }
}

/// Реестр батчей, индексированный по BlockType. Строится один раз
pub struct BatchRegistry {
    batches: [InstancedBatch; BlockType::COUNT],
}

impl BatchRegistry {
    pub fn from_terrain(terrain: &GeneratedTerrain) -> Self {
        let batches = std::array::from_fn(|i| {
            let block = BlockType::ALL[i];
            InstancedBatch::new(block, terrain.positions(block).to_vec(), block_definition(block))
        });
        Self { batches }
    }

    pub fn get(&self, block: BlockType) -> &InstancedBatch {
        &self.batches[block.index()]
    }

    pub fn get_mut(&mut self, block: BlockType) -> &mut InstancedBatch {
        &mut self.batches[block.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstancedBatch> {
        self.batches.iter()
    }

    pub fn total_instances(&self) -> usize {
        self.batches.iter().map(InstancedBatch::len).sum()
    }
}
