// ============================================
// GUI Module - Хотбар, сообщения, граница с UI
// ============================================

mod hotbar;
mod messages;

pub use hotbar::*;
pub use messages::*;

use log::{debug, info, warn};
use ultraviolet::Vec3;

use crate::game::blocks::TargetedBlock;

/// То, что ядро сообщает интерфейсу
pub trait Ui {
    fn set_coordinates(&mut self, position: Vec3);

    fn set_hotbar(&mut self, slots: &[Option<InventorySlot>], selected: usize);

    fn set_target(&mut self, target: Option<&TargetedBlock>);

    fn show_message(&mut self, text: &str, severity: Severity);

    /// Продвинуть анимации (затухание сообщений)
    fn tick(&mut self, _dt: f32) {}
}

/// UI без окна: хранит последнее состояние и пишет в лог
#[derive(Default)]
pub struct LogUi {
    pub coordinates: Vec3,
    pub selected_slot: usize,
    pub hotbar: Vec<Option<InventorySlot>>,
    pub target: Option<TargetedBlock>,
    pub messages: MessageLog,
}

impl LogUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for LogUi {
    fn set_coordinates(&mut self, position: Vec3) {
        self.coordinates = position;
    }

    fn set_hotbar(&mut self, slots: &[Option<InventorySlot>], selected: usize) {
        if self.selected_slot != selected {
            debug!("Hotbar slot {} selected", selected + 1);
        }
        self.hotbar = slots.to_vec();
        self.selected_slot = selected;
    }

    fn set_target(&mut self, target: Option<&TargetedBlock>) {
        let target = target.copied();
        if target.map(|t| t.position) != self.target.map(|t| t.position) {
            if let Some(t) = &target {
                debug!(
                    "Targeting {:?} at ({}, {}, {}), {:.2} away",
                    t.block, t.position.x, t.position.y, t.position.z, t.distance
                );
            }
        }
        self.target = target;
    }

    fn show_message(&mut self, text: &str, severity: Severity) {
        if !self.messages.push(text, severity) {
            return;
        }
        match severity {
            Severity::Warning | Severity::Error => warn!("{}", text),
            Severity::Info | Severity::Success => info!("{}", text),
        }
    }

    fn tick(&mut self, dt: f32) {
        self.messages.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_ui_keeps_latest_state() {
        let mut ui = LogUi::new();
        let hotbar = Hotbar::with_starter_blocks();
        ui.set_hotbar(hotbar.slots(), 3);
        ui.set_coordinates(Vec3::new(1.0, 2.0, 3.0));
        ui.show_message("Welcome", Severity::Info);
        ui.show_message("Welcome", Severity::Info);

        assert_eq!(ui.hotbar.len(), HOTBAR_SLOTS);
        assert_eq!(ui.selected_slot, 3);
        assert_eq!(ui.coordinates, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ui.messages.len(), 1);

        ui.tick(MESSAGE_LIFETIME);
        assert!(ui.messages.is_empty());
    }
}
