// ============================================
// Config - Настройки симуляции из JSON
// ============================================
// Все поля имеют значения по умолчанию; файл может задавать
// только часть из них. Неизвестные поля считаются ошибкой.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::game::render::CullingSettings;

/// Допустимый размер мира (колонок по стороне)
pub const MIN_WORLD_SIZE: i32 = 16;
pub const MAX_WORLD_SIZE: i32 = 2048;

/// Ошибки загрузки конфига
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Группа существ одного вида
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnGroup {
    pub count: usize,
    pub anchor: [f32; 3],
    /// Полный разброс по x/z вокруг якоря
    pub spread: f32,
}

impl SpawnGroup {
    pub fn anchor(&self) -> Vec3 {
        Vec3::from(self.anchor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    // World
    pub world_size: i32,
    pub water_level: i32,

    // Culling & targeting
    pub render_distance: f32,
    pub min_render_distance: f32,
    pub cull_move_threshold: f32,
    pub cull_rotate_threshold: f32,
    pub target_distance: f32,

    // Player
    pub player_spawn: [f32; 3],
    pub player_speed: f32,
    pub player_jump_power: f32,
    pub mouse_sensitivity: f32,

    // Creatures
    pub gremlins: SpawnGroup,
    pub pigs: SpawnGroup,

    /// Сид RNG (существа, спавн бонуса)
    pub seed: u64,

    /// Дополнительные материалы блоков (JSON)
    pub blocks_file: Option<String>,

    /// Сколько тиков прогоняет хост без окна
    pub demo_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_size: 200,
            water_level: 7,
            render_distance: 40.0,
            min_render_distance: 10.0,
            cull_move_threshold: 2.0,
            cull_rotate_threshold: 0.1,
            target_distance: 10.0,
            player_spawn: [100.5, 20.0, 100.5],
            player_speed: 5.0,
            player_jump_power: 8.0,
            mouse_sensitivity: 0.002,
            gremlins: SpawnGroup {
                count: 5,
                anchor: [135.0, 20.0, 35.0],
                spread: 3.0,
            },
            pigs: SpawnGroup {
                count: 4,
                anchor: [60.0, 20.0, 120.0],
                spread: 10.0,
            },
            seed: 0x5EED,
            blocks_file: None,
            demo_ticks: 600,
        }
    }
}

impl GameConfig {
    /// Прочитать и проверить конфиг
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(MIN_WORLD_SIZE..=MAX_WORLD_SIZE).contains(&self.world_size) {
            return invalid(format!(
                "world_size must be in {}..={}, got {}",
                MIN_WORLD_SIZE, MAX_WORLD_SIZE, self.world_size
            ));
        }
        if self.water_level < 0 {
            return invalid(format!("water_level must be non-negative, got {}", self.water_level));
        }
        if !(self.min_render_distance >= 0.0 && self.render_distance > self.min_render_distance) {
            return invalid(format!(
                "render_distance ({}) must exceed min_render_distance ({})",
                self.render_distance, self.min_render_distance
            ));
        }
        if self.cull_move_threshold <= 0.0 || self.cull_rotate_threshold <= 0.0 {
            return invalid("culling thresholds must be positive".to_string());
        }
        if self.target_distance <= 0.0 {
            return invalid("target_distance must be positive".to_string());
        }
        if self.player_speed <= 0.0 || self.player_jump_power <= 0.0 {
            return invalid("player speed and jump power must be positive".to_string());
        }
        let size = self.world_size as f32;
        let [x, _, z] = self.player_spawn;
        if !(0.0..size).contains(&x) || !(0.0..size).contains(&z) {
            return invalid(format!("player_spawn ({}, {}) is outside the world", x, z));
        }
        Ok(())
    }

    pub fn culling(&self) -> CullingSettings {
        CullingSettings {
            render_distance: self.render_distance,
            min_render_distance: self.min_render_distance,
            move_threshold: self.cull_move_threshold,
            rotate_threshold: self.cull_rotate_threshold,
        }
    }

    pub fn spawn_point(&self) -> Vec3 {
        Vec3::from(self.player_spawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world_size, 200);
        assert_eq!(config.water_level, 7);
        assert_eq!(config.gremlins.count, 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "world_size": 64, "player_spawn": [32.0, 20.0, 32.0] }"#).unwrap();
        assert_eq!(config.world_size, 64);
        assert_eq!(config.water_level, 7);
        assert_eq!(config.render_distance, 40.0);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = GameConfig::from_json(r#"{ "wrold_size": 64 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_rejected() {
        let err = GameConfig::from_json(r#"{ "render_distance": 5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        // Спавн по умолчанию вне мира 32x32
        let err = GameConfig::from_json(r#"{ "world_size": 32 }"#).unwrap_err();
        assert!(err.to_string().contains("player_spawn"));
    }

    #[test]
    fn world_size_bounds() {
        let err = GameConfig::from_json(r#"{ "world_size": 8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        // 50000² колонок не помещается в i32
        let err = GameConfig::from_json(r#"{ "world_size": 50000 }"#).unwrap_err();
        assert!(err.to_string().contains("world_size"));

        let mut config = GameConfig::default();
        config.world_size = MAX_WORLD_SIZE;
        assert!(config.validate().is_ok());
        config.world_size = MAX_WORLD_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join("voxel_sandbox_config_test.json");
        fs::write(&path, r#"{ "seed": 7, "demo_ticks": 10 }"#).unwrap();
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.demo_ticks, 10);
        fs::remove_file(&path).ok();

        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
