// ============================================
// Structures - Статичные постройки поверх рельефа
// ============================================
// Полая коробка из стен без пола и крыши, с проёмом в северной стене.

use crate::game::terrain::world::BlockPos;

/// Описание кольца стен
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallRing {
    pub center_x: i32,
    pub center_z: i32,
    /// Сторона квадрата в блоках
    pub size: i32,
    /// Высота стен над землёй
    pub height: i32,
    /// Полуширина проёма (1 = проём в 3 блока)
    pub door_half_width: i32,
}

/// Каменная коробка 16x16 у (78, 62)
pub const COBBLESTONE_BOX: WallRing = WallRing {
    center_x: 78,
    center_z: 62,
    size: 16,
    height: 4,
    door_half_width: 1,
};

impl WallRing {
    #[inline]
    pub fn min_x(&self) -> i32 {
        self.center_x - self.size / 2
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.center_x + self.size / 2 - 1
    }

    #[inline]
    pub fn min_z(&self) -> i32 {
        self.center_z - self.size / 2
    }

    #[inline]
    pub fn max_z(&self) -> i32 {
        self.center_z + self.size / 2 - 1
    }

    /// Помещается ли основание в мир [0, world_size)²
    pub fn fits(&self, world_size: i32) -> bool {
        self.size > 0
            && self.min_x() >= 0
            && self.min_z() >= 0
            && self.max_x() < world_size
            && self.max_z() < world_size
    }

    fn is_wall(&self, x: i32, z: i32) -> bool {
        x == self.min_x() || x == self.max_x() || z == self.min_z() || z == self.max_z()
    }

    /// Проём в стене z = min_z
    pub fn is_doorway(&self, x: i32, z: i32) -> bool {
        z == self.min_z()
            && x >= self.center_x - self.door_half_width
            && x <= self.center_x + self.door_half_width
    }

    /// Координаты стен от ground+1 до ground+height, в порядке x, z, y
    pub fn wall_blocks(&self, ground: i32) -> impl Iterator<Item = BlockPos> + '_ {
        (self.min_x()..=self.max_x()).flat_map(move |x| {
            (self.min_z()..=self.max_z())
                .filter(move |&z| self.is_wall(x, z) && !self.is_doorway(x, z))
                .flat_map(move |z| {
                    (ground + 1..=ground + self.height).map(move |y| BlockPos::new(x, y, z))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_bounds() {
        let b = COBBLESTONE_BOX;
        assert_eq!((b.min_x(), b.max_x()), (70, 85));
        assert_eq!((b.min_z(), b.max_z()), (54, 69));
        assert!(b.fits(200));
        assert!(!b.fits(80));
    }

    #[test]
    fn wall_count_excludes_doorway() {
        // Периметр 16x16 = 60 колонок, минус 3 в проёме, по 4 блока
        let blocks: Vec<_> = COBBLESTONE_BOX.wall_blocks(10).collect();
        assert_eq!(blocks.len(), (60 - 3) * 4);
        for x in 77..=79 {
            assert!(!blocks.iter().any(|p| p.x == x && p.z == 54));
        }
        assert!(blocks.iter().all(|p| (11..=14).contains(&p.y)));
    }

    #[test]
    fn interior_is_hollow() {
        let blocks: Vec<_> = COBBLESTONE_BOX.wall_blocks(10).collect();
        assert!(!blocks.iter().any(|p| p.x == 78 && p.z == 62));
    }
}
