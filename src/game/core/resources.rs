// ============================================
// Resources - Общие ресурсы симуляции
// ============================================

use crate::game::blocks::{BlockTargeting, TargetedBlock};
use crate::game::core::config::GameConfig;
use crate::game::creatures::{Creature, PowerUp};
use crate::game::gui::Hotbar;
use crate::game::player::{Camera, Player, PlayerController};
use crate::game::render::{BatchRegistry, CullingController};
use crate::game::terrain::GeneratedTerrain;

/// Все ресурсы симуляции в одном месте
pub struct GameResources {
    pub config: GameConfig,

    // World data (после генерации только чтение)
    pub terrain: GeneratedTerrain,
    pub batches: BatchRegistry,

    // Player entity
    pub player: Player,
    pub player_controller: PlayerController,

    // Camera
    pub camera: Camera,

    // Creatures
    pub creatures: Vec<Creature>,
    pub power_up: Option<PowerUp>,

    // Inventory
    pub hotbar: Hotbar,

    // Visibility & targeting
    pub culling: CullingController,
    pub targeting: BlockTargeting,
    pub target: Option<TargetedBlock>,

    pub rng: fastrand::Rng,

    // Timing
    pub elapsed: f32,
    pub ticks: u64,
}
