// ============================================
// Render System - Зеркала актёров и отправка кадра
// ============================================

use ultraviolet::Vec3;

use crate::game::core::GameResources;
use crate::game::render::{DrawableId, Renderer};

/// Система рендеринга
pub struct RenderSystem;

impl RenderSystem {
    pub fn render(resources: &GameResources, renderer: &mut dyn Renderer) {
        renderer.set_camera(resources.camera.view_projection_matrix());

        renderer.set_drawable_transform(
            DrawableId::Player,
            resources.player.position(),
            resources.player.yaw(),
        );

        for (i, creature) in resources.creatures.iter().enumerate() {
            let position = creature.actor.position + Vec3::new(0.0, creature.body_bob, 0.0);
            renderer.set_drawable_transform(DrawableId::Creature(i), position, creature.actor.yaw);
        }

        if let Some(power_up) = &resources.power_up {
            renderer.set_drawable_transform(DrawableId::PowerUp, power_up.core_position(), power_up.spin);
            for (i, position) in power_up.orb_positions().enumerate() {
                renderer.set_drawable_transform(DrawableId::PowerUpOrb(i), position, 0.0);
            }
        }

        renderer.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::core::GameConfig;
    use crate::game::render::HeadlessRenderer;
    use crate::game::systems::InitSystem;

    #[test]
    fn mirrors_actor_positions() {
        let mut config = GameConfig::default();
        config.world_size = 96;
        config.player_spawn = [40.5, 20.0, 40.5];
        config.gremlins.anchor = [30.0, 20.0, 30.0];
        config.pigs.count = 0;

        let mut resources = InitSystem::create_resources(config);
        let mut renderer = HeadlessRenderer::new();
        InitSystem::register_drawables(&resources, &mut renderer);

        resources.player.actor.position = Vec3::new(41.0, 15.0, 42.0);
        RenderSystem::render(&resources, &mut renderer);

        assert_eq!(renderer.frames(), 1);
        assert_eq!(
            renderer.node(DrawableId::Player).map(|n| n.position),
            Some(Vec3::new(41.0, 15.0, 42.0))
        );
        assert!(renderer.node(DrawableId::Creature(4)).is_some());
        assert!(renderer.node(DrawableId::Creature(5)).is_none());
    }

    #[test]
    fn camera_reaches_renderer() {
        let mut config = GameConfig::default();
        config.world_size = 96;
        config.player_spawn = [40.5, 20.0, 40.5];
        config.pigs.count = 0;

        let resources = InitSystem::create_resources(config);
        let mut renderer = HeadlessRenderer::new();
        assert!(renderer.camera().is_none());
        RenderSystem::render(&resources, &mut renderer);

        let view_proj = renderer.camera().unwrap();
        // Точка прямо по взгляду попадает в центр экрана
        let ahead = resources.camera.position + resources.camera.forward() * 5.0;
        let clip = view_proj * ahead.into_homogeneous_point();
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 1e-4);
        assert!((clip.y / clip.w).abs() < 1e-4);
    }

    #[test]
    fn power_up_orbs_follow_animation() {
        let mut config = GameConfig::default();
        config.world_size = 96;
        config.player_spawn = [40.5, 20.0, 40.5];
        config.gremlins.count = 0;
        config.pigs.count = 0;

        let mut resources = InitSystem::create_resources(config);
        let mut renderer = HeadlessRenderer::new();
        InitSystem::register_drawables(&resources, &mut renderer);

        if let Some(power_up) = resources.power_up.as_mut() {
            for _ in 0..20 {
                power_up.update(1.0 / 60.0);
            }
        }
        RenderSystem::render(&resources, &mut renderer);

        let power_up = resources.power_up.as_ref().unwrap();
        for i in 0..3 {
            let node = renderer.node(DrawableId::PowerUpOrb(i)).unwrap();
            assert_eq!(Some(node.position), power_up.orb_position(i));
        }
        assert!(renderer.node(DrawableId::PowerUpOrb(3)).is_none());
        // Спутники качаются отдельно от ядра
        let core = renderer.node(DrawableId::PowerUp).unwrap().position;
        let orb = renderer.node(DrawableId::PowerUpOrb(0)).unwrap().position;
        assert_ne!(orb.y - power_up.position.y, core.y - power_up.position.y);
    }
}
