// ============================================
// Init System - Сборка мира и регистрация в сцене
// ============================================

use log::{info, warn};

use crate::game::actor::{ActorKind, Arena, CreatureVariant};
use crate::game::blocks::{BlockRegistry, BlockTargeting, BlockType};
use crate::game::core::{GameConfig, GameResources};
use crate::game::creatures::{spawn_group, PowerUp};
use crate::game::gui::Hotbar;
use crate::game::physics::CollisionResolver;
use crate::game::player::{Camera, Player, PlayerController};
use crate::game::render::{BatchRegistry, CullingController, Drawable, DrawableId, Renderer};
use crate::game::terrain::TerrainGenerator;

/// Система инициализации
pub struct InitSystem;

impl InitSystem {
    /// Сгенерировать мир и создать всех участников
    pub fn create_resources(config: GameConfig) -> GameResources {
        let terrain = TerrainGenerator::new().generate(config.world_size, config.water_level);

        let mut batches = BatchRegistry::from_terrain(&terrain);
        if let Some(path) = &config.blocks_file {
            Self::apply_materials(&mut batches, path);
        }

        let mut rng = fastrand::Rng::with_seed(config.seed);

        let mut creatures = spawn_group(
            CreatureVariant::Gremlin,
            config.gremlins.count,
            config.gremlins.anchor(),
            config.gremlins.spread,
            &mut rng,
        );
        creatures.extend(spawn_group(
            CreatureVariant::Pig,
            config.pigs.count,
            config.pigs.anchor(),
            config.pigs.spread,
            &mut rng,
        ));

        let power_up = PowerUp::spawn(
            &CollisionResolver::new(&terrain.world),
            config.world_size,
            config.water_level,
            &mut rng,
        );

        let player = Player::new(config.spawn_point(), config.player_speed, config.player_jump_power);
        let mut camera = Camera::new(16.0 / 9.0);
        camera.update_from_player(&player);

        info!(
            "World ready: {} batches, {} instances, {} creatures",
            BlockType::COUNT,
            batches.total_instances(),
            creatures.len()
        );

        GameResources {
            player_controller: PlayerController::new(config.water_level, Arena::new(config.world_size)),
            culling: CullingController::new(config.culling()),
            targeting: BlockTargeting::new(config.target_distance),
            target: None,
            hotbar: Hotbar::with_starter_blocks(),
            power_up: Some(power_up),
            creatures,
            camera,
            player,
            terrain,
            batches,
            rng,
            config,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Материалы из внешнего JSON поверх встроенных
    fn apply_materials(batches: &mut BatchRegistry, path: &str) {
        let mut registry = BlockRegistry::with_defaults();
        match registry.load_from_file(path) {
            Ok(count) => info!("Loaded {} block materials from {}", count, path),
            Err(e) => {
                warn!("Failed to load block materials from {}: {}", path, e);
                return;
            }
        }
        for block in BlockType::ALL {
            if let Some(definition) = registry.get(block) {
                batches.get_mut(block).material = definition.clone();
            }
        }
    }

    /// Добавить в сцену батчи, игрока, существ и бонус
    pub fn register_drawables(resources: &GameResources, renderer: &mut dyn Renderer) {
        for batch in resources.batches.iter() {
            renderer.add_drawable(DrawableId::Batch(batch.block), Drawable::Batch(batch));
        }

        renderer.add_drawable(
            DrawableId::Player,
            Drawable::Actor {
                kind: ActorKind::Player,
                position: resources.player.position(),
                yaw: resources.player.yaw(),
            },
        );

        for (i, creature) in resources.creatures.iter().enumerate() {
            renderer.add_drawable(
                DrawableId::Creature(i),
                Drawable::Actor {
                    kind: creature.actor.kind,
                    position: creature.actor.position,
                    yaw: creature.actor.yaw,
                },
            );
        }

        if let Some(power_up) = &resources.power_up {
            renderer.add_drawable(DrawableId::PowerUp, Drawable::PowerUp { position: power_up.position });
            for (i, position) in power_up.orb_positions().enumerate() {
                renderer.add_drawable(DrawableId::PowerUpOrb(i), Drawable::PowerUpOrb { position });
            }
        }
    }
}
