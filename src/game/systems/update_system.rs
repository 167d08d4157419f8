// ============================================
// Update System - Один тик симуляции
// ============================================
// Порядок: ввод → игрок → существа → бонус → камера →
// отсечение → прицел → UI.

use log::debug;

use crate::game::core::GameResources;
use crate::game::gui::{ItemKind, Severity, Ui};
use crate::game::physics::CollisionResolver;
use crate::game::render::{DrawableId, Renderer};

use super::input_system::InputSnapshot;

/// Верхняя граница шага (после паузы хоста)
pub const MAX_DT: f32 = 0.1;

/// Система обновления логики
pub struct UpdateSystem;

impl UpdateSystem {
    /// Основной тик
    pub fn update(
        resources: &mut GameResources,
        input: &InputSnapshot,
        renderer: &mut dyn Renderer,
        ui: &mut dyn Ui,
        dt: f32,
    ) {
        let dt = dt.clamp(0.0, MAX_DT);
        resources.elapsed += dt;
        resources.ticks += 1;

        // 1. Хотбар
        Self::update_hotbar(resources, input, ui);

        // 2. Игрок (физика, движение)
        Self::update_player(resources, input, dt);

        // 3. Существа и толчки
        Self::update_creatures(resources, dt);

        // 4. Бонус
        Self::update_power_up(resources, renderer, ui, dt);

        // 5. Камера
        resources.camera.update_from_player(&resources.player);

        // 6. Отсечение
        resources.culling.update(
            resources.player.position(),
            resources.player.yaw(),
            &mut resources.batches,
            renderer,
        );

        // 7. Прицел
        resources.target = resources.targeting.cast(
            resources.camera.position,
            resources.camera.forward(),
            &resources.batches,
            resources.player_controller.water_level,
        );

        // 8. UI
        ui.set_coordinates(resources.player.position());
        ui.set_hotbar(resources.hotbar.slots(), resources.hotbar.selected());
        ui.set_target(resources.target.as_ref());
        ui.tick(dt);
    }

    fn update_hotbar(resources: &mut GameResources, input: &InputSnapshot, ui: &mut dyn Ui) {
        let before = resources.hotbar.selected();
        if let Some(slot) = input.hotbar_select {
            resources.hotbar.select(slot);
        }
        if input.hotbar_scroll != 0 {
            resources.hotbar.scroll(input.hotbar_scroll);
        }
        if resources.hotbar.selected() != before {
            if let Some(stack) = resources.hotbar.selected_slot() {
                let ItemKind::Block(block) = stack.item;
                ui.show_message(&format!("Selected {} x{}", block.id(), stack.count), Severity::Info);
            }
        }
    }

    fn update_player(resources: &mut GameResources, input: &InputSnapshot, dt: f32) {
        let resolver = CollisionResolver::new(&resources.terrain.world);
        resources
            .player_controller
            .update(&mut resources.player, input, &resolver, dt);
    }

    fn update_creatures(resources: &mut GameResources, dt: f32) {
        let resolver = CollisionResolver::new(&resources.terrain.world);
        let arena = resources.player_controller.arena;
        let player_pos = resources.player.position();
        let fallback = resources.player.forward_horizontal();

        for creature in &mut resources.creatures {
            creature.update(&resolver, arena, &mut resources.rng, dt);
            if creature.push_away_from(player_pos, fallback) {
                debug!("Player pushed {:?}", creature.variant);
            }
        }
    }

    fn update_power_up(resources: &mut GameResources, renderer: &mut dyn Renderer, ui: &mut dyn Ui, dt: f32) {
        let Some(power_up) = resources.power_up.as_mut() else {
            return;
        };
        power_up.update(dt);

        if power_up.try_collect(resources.player.position()) {
            resources.player.grant_double_jump();
            renderer.remove_drawable(DrawableId::PowerUp);
            for i in 0..power_up.orbs.len() {
                renderer.remove_drawable(DrawableId::PowerUpOrb(i));
            }
            resources.power_up = None;
            ui.show_message("Double jump unlocked! Press Space in mid-air", Severity::Success);
        }
    }
}
