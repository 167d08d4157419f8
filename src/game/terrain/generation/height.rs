// ============================================
// Height Map - Детерминированная карта высот
// ============================================
// Две синусоиды, считаются в f64 чтобы результат не зависел
// от порядка обхода и потоков.

use rayon::prelude::*;

/// Базовая высота рельефа
pub const BASE_HEIGHT: f64 = 10.0;

/// Высота поверхности колонки (верхний твёрдый блок)
#[inline]
pub fn height_at(x: i32, z: i32) -> i32 {
    let (x, z) = (x as f64, z as f64);
    let broad = 5.0 * (x * 0.02).sin() * (z * 0.02).cos();
    let detail = 3.0 * (x * 0.05).sin() * (z * 0.05).sin();
    (BASE_HEIGHT + broad + detail).floor() as i32
}

/// Карта высот квадратного мира, x внешний индекс
#[derive(Debug, Clone)]
pub struct HeightMap {
    size: i32,
    heights: Vec<i32>,
}

impl HeightMap {
    /// Параллельный расчёт. Запись в мир начинается только после сборки
    pub fn compute(size: i32) -> Self {
        let size = size.max(0);
        let side = size as usize;
        let heights: Vec<i32> = (0..side * side)
            .into_par_iter()
            .map(|i| height_at((i / side) as i32, (i % side) as i32))
            .collect();
        Self { size, heights }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Высота колонки или None за пределами мира
    pub fn get(&self, x: i32, z: i32) -> Option<i32> {
        if x < 0 || z < 0 || x >= self.size || z >= self.size {
            return None;
        }
        self.heights.get(x as usize * self.size as usize + z as usize).copied()
    }

    /// Обход колонок в порядке генерации (x внешний, z внутренний)
    pub fn columns(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        let size = self.size;
        self.heights
            .iter()
            .enumerate()
            .map(move |(i, &h)| (i as i32 / size, i as i32 % size, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_columns() {
        // sin(0) = 0 по обеим осям
        assert_eq!(height_at(0, 0), 10);
        assert_eq!(height_at(0, 137), 10);
        assert_eq!(height_at(100, 100), 10);
    }

    #[test]
    fn parallel_map_matches_direct_formula() {
        let map = HeightMap::compute(64);
        for (x, z, h) in map.columns() {
            assert_eq!(h, height_at(x, z), "column ({}, {})", x, z);
        }
        assert_eq!(map.get(64, 0), None);
        assert_eq!(map.get(-1, 3), None);
    }

    #[test]
    fn columns_are_x_major() {
        let map = HeightMap::compute(3);
        let order: Vec<(i32, i32)> = map.columns().map(|(x, z, _)| (x, z)).collect();
        assert_eq!(order[..4], [(0, 0), (0, 1), (0, 2), (1, 0)]);
    }
}
