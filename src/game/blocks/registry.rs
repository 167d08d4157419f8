// ============================================
// Block Registry - Data-Driven из JSON
// ============================================
// Единый источник правды для материалов блоков

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::definition::{BlockDefinition, BlocksFile};
use super::types::BlockType;

/// Реестр материалов, индексированный по BlockType
pub struct BlockRegistry {
    definitions: [Option<BlockDefinition>; BlockType::COUNT],
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            definitions: Default::default(),
        }
    }

    /// Реестр со встроенным JSON; недостающие типы добиваются fallback-определениями
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        if let Err(e) = registry.load_from_json(include_str!("../../../assets/blocks/default_blocks.json")) {
            log::warn!("Failed to load default blocks: {}", e);
        }
        registry.fill_missing();
        registry
    }

    /// Загрузить блоки из JSON строки
    pub fn load_from_json(&mut self, json: &str) -> Result<usize, String> {
        let blocks_file: BlocksFile = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?;

        let count = blocks_file.blocks.len();
        for block in blocks_file.blocks {
            self.register(block);
        }
        Ok(count)
    }

    /// Загрузить блоки из файла
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        self.load_from_json(&content)
    }

    /// Зарегистрировать (или переопределить) материал
    pub fn register(&mut self, definition: BlockDefinition) {
        let index = definition.block.index();
        self.definitions[index] = Some(definition);
    }

    fn fill_missing(&mut self) {
        for block in BlockType::ALL {
            if self.definitions[block.index()].is_none() {
                log::warn!("No material for {:?}, using fallback", block);
                self.register(BlockDefinition::fallback(block));
            }
        }
    }

    pub fn get(&self, block: BlockType) -> Option<&BlockDefinition> {
        self.definitions[block.index()].as_ref()
    }

    /// Количество зарегистрированных материалов
    pub fn count(&self) -> usize {
        self.definitions.iter().filter(|d| d.is_some()).count()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self { Self::new() }
}

// ============================================
// Global Registry Singleton
// ============================================

static GLOBAL_REGISTRY: OnceLock<BlockRegistry> = OnceLock::new();

/// Получить глобальный реестр материалов
pub fn global_registry() -> &'static BlockRegistry {
    GLOBAL_REGISTRY.get_or_init(BlockRegistry::with_defaults)
}

/// Материал блока; глобальный реестр всегда заполнен для всех типов
pub fn block_definition(block: BlockType) -> BlockDefinition {
    global_registry()
        .get(block)
        .cloned()
        .unwrap_or_else(|| BlockDefinition::fallback(block))
}
