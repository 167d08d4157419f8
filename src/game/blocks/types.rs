// ============================================
// Block Types - Типы блоков песочницы
// ============================================
// Пять фиксированных типов. Каждый тип = отдельный инстанс-батч.

use serde::{Deserialize, Serialize};

/// Тип блока
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Cobblestone,
    Water,
}

impl BlockType {
    /// Количество типов (размер реестра батчей)
    pub const COUNT: usize = 5;

    /// Все типы в порядке индексов
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Cobblestone,
        BlockType::Water,
    ];

    /// Индекс типа в массивах по типам
    #[inline]
    pub fn index(self) -> usize {
        match self {
            BlockType::Grass => 0,
            BlockType::Dirt => 1,
            BlockType::Stone => 2,
            BlockType::Cobblestone => 3,
            BlockType::Water => 4,
        }
    }

    /// Строковый ID (совпадает с `id` в JSON определениях)
    pub fn id(self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Cobblestone => "cobblestone",
            BlockType::Water => "water",
        }
    }

    /// Блок твёрдый? Вода никогда не твёрдая и не попадает в VoxelWorld
    #[inline]
    pub fn is_solid(self) -> bool {
        self != BlockType::Water
    }

    /// Классификация блока колонки по глубине от поверхности
    #[inline]
    pub fn for_column_depth(y: i32, surface: i32) -> BlockType {
        if y == surface {
            BlockType::Grass
        } else if y > surface - 3 {
            BlockType::Dirt
        } else {
            BlockType::Stone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_all_order() {
        for (i, block) in BlockType::ALL.iter().enumerate() {
            assert_eq!(block.index(), i);
        }
    }

    #[test]
    fn column_layers() {
        assert_eq!(BlockType::for_column_depth(12, 12), BlockType::Grass);
        assert_eq!(BlockType::for_column_depth(11, 12), BlockType::Dirt);
        assert_eq!(BlockType::for_column_depth(10, 12), BlockType::Dirt);
        assert_eq!(BlockType::for_column_depth(9, 12), BlockType::Stone);
        assert_eq!(BlockType::for_column_depth(0, 12), BlockType::Stone);
    }

    #[test]
    fn water_is_not_solid() {
        assert!(!BlockType::Water.is_solid());
        assert!(BlockType::Cobblestone.is_solid());
    }
}
