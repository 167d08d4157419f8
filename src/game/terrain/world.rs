// ============================================
// Voxel World - Разреженная карта твёрдых блоков
// ============================================
// Присутствие координаты = твёрдый блок, отсутствие = воздух.
// Заполняется один раз генератором, дальше только чтение.

use std::collections::HashSet;

use ultraviolet::Vec3;

/// Ключ для блока в мире
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Минимальный угол ячейки (мировые координаты)
    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Центр ячейки
    pub fn center(&self) -> Vec3 {
        self.min_corner() + Vec3::broadcast(0.5)
    }

    pub fn to_array(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Хранилище твёрдых блоков
#[derive(Debug, Default)]
pub struct VoxelWorld {
    solid: HashSet<BlockPos>,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self {
            solid: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            solid: HashSet::with_capacity(capacity),
        }
    }

    /// Пометить координату твёрдой. Возвращает true если блок новый
    pub fn set(&mut self, pos: BlockPos) -> bool {
        self.solid.insert(pos)
    }

    /// Твёрдый ли блок в координате
    #[inline]
    pub fn has(&self, pos: BlockPos) -> bool {
        self.solid.contains(&pos)
    }

    #[inline]
    pub fn has_xyz(&self, x: i32, y: i32, z: i32) -> bool {
        self.has(BlockPos::new(x, y, z))
    }

    /// Количество твёрдых блоков
    pub fn len(&self) -> usize {
        self.solid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }
}
