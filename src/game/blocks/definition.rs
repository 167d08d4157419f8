// ============================================
// Data-Driven Block Definition
// ============================================
// Материалы блоков загружаются из JSON

use serde::{Deserialize, Serialize};

use super::types::BlockType;

/// Цвет из JSON: "#RRGGBB" или [r, g, b] (0.0-1.0)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Rgb([f32; 3]),
}

impl Default for ColorDef {
    fn default() -> Self {
        ColorDef::Rgb([0.5, 0.5, 0.5])
    }
}

impl ColorDef {
    pub fn to_rgb(&self) -> [f32; 3] {
        match self {
            ColorDef::Rgb(c) => *c,
            ColorDef::Hex(s) => parse_hex_color(s),
        }
    }
}

fn parse_hex_color(s: &str) -> [f32; 3] {
    let s = s.trim_start_matches('#');
    if s.len() != 6 {
        return [1.0, 0.0, 1.0]; // Magenta = error
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map(|v| v as f32 / 255.0).unwrap_or(0.0)
    };
    [channel(0..2), channel(2..4), channel(4..6)]
}

/// Материал блока (что нужно рендереру для батча)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Тип блока, к которому относится материал
    pub block: BlockType,

    /// Отображаемое имя
    pub name: String,

    #[serde(default)]
    pub color: ColorDef,

    /// Непрозрачность (1.0 = полностью непрозрачный)
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    #[serde(default = "default_true")]
    pub cast_shadow: bool,

    #[serde(default = "default_true")]
    pub receive_shadow: bool,

    /// Рисовать обе стороны граней (вода)
    #[serde(default)]
    pub double_sided: bool,
}

fn default_opacity() -> f32 { 1.0 }
fn default_true() -> bool { true }

impl BlockDefinition {
    /// Встроенное определение, если JSON не загрузился
    pub fn fallback(block: BlockType) -> Self {
        let (color, opacity) = match block {
            BlockType::Grass => ([0.29, 0.49, 0.35], 1.0),
            BlockType::Dirt => ([0.55, 0.27, 0.07], 1.0),
            BlockType::Stone => ([0.41, 0.41, 0.41], 1.0),
            BlockType::Cobblestone => ([0.42, 0.42, 0.42], 1.0),
            BlockType::Water => ([0.30, 0.65, 1.0], 0.7),
        };
        let liquid = block == BlockType::Water;
        Self {
            block,
            name: block.id().to_string(),
            color: ColorDef::Rgb(color),
            opacity,
            cast_shadow: !liquid,
            receive_shadow: true,
            double_sided: liquid,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Файл с определениями блоков
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksFile {
    /// Версия формата
    #[serde(default = "default_version")]
    pub version: String,

    pub blocks: Vec<BlockDefinition>,
}

fn default_version() -> String { "1.0".to_string() }
