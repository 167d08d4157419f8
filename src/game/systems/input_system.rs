// ============================================
// Input System - Клавиши и мышь → снимок на тик
// ============================================
// Удержание клавиш живёт между тиками, а дельты мыши и
// фронты нажатий забираются каждым снимком.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Ввод за один тик
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Прыжок удерживается
    pub jump_held: bool,
    /// Прыжок нажат в этом тике (фронт)
    pub jump_pressed: bool,
    /// Вернуться на спавн
    pub reset: bool,
    /// Поворот за тик (рад)
    pub yaw_delta: f32,
    pub pitch_delta: f32,
    /// Слот хотбара 0-8 по цифре
    pub hotbar_select: Option<usize>,
    /// Прокрутка колёсика
    pub hotbar_scroll: i32,
}

/// Накопитель ввода
#[derive(Debug, Clone)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    jump: bool,
    jump_pressed: bool,
    reset: bool,
    hotbar_select: Option<usize>,
    scroll: i32,
    mouse_dx: f32,
    mouse_dy: f32,

    /// Чувствительность мыши (рад на пиксель)
    pub sensitivity: f32,
}

impl InputState {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            jump: false,
            jump_pressed: false,
            reset: false,
            hotbar_select: None,
            scroll: 0,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            sensitivity,
        }
    }

    /// Событие клавиатуры от winit
    pub fn process_key_event(&mut self, key: KeyCode, state: ElementState) {
        self.process_keyboard(key, state == ElementState::Pressed);
    }

    /// Обработка клавиатуры
    pub fn process_keyboard(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::Space => {
                // Автоповтор не даёт нового фронта
                if pressed && !self.jump {
                    self.jump_pressed = true;
                }
                self.jump = pressed;
            }
            KeyCode::KeyR if pressed => self.reset = true,
            _ => {
                if pressed {
                    if let Some(slot) = Self::digit_slot(key) {
                        self.hotbar_select = Some(slot);
                    }
                }
            }
        }
    }

    fn digit_slot(key: KeyCode) -> Option<usize> {
        let slot = match key {
            KeyCode::Digit1 => 0,
            KeyCode::Digit2 => 1,
            KeyCode::Digit3 => 2,
            KeyCode::Digit4 => 3,
            KeyCode::Digit5 => 4,
            KeyCode::Digit6 => 5,
            KeyCode::Digit7 => 6,
            KeyCode::Digit8 => 7,
            KeyCode::Digit9 => 8,
            _ => return None,
        };
        Some(slot)
    }

    /// Обработка мыши (накапливается до снимка)
    pub fn process_mouse(&mut self, dx: f64, dy: f64) {
        self.mouse_dx += dx as f32;
        self.mouse_dy += dy as f32;
    }

    /// Колёсико мыши
    pub fn process_scroll(&mut self, delta: i32) {
        self.scroll += delta;
    }

    /// Снимок на тик. Забирает дельты мыши и одноразовые нажатия
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            jump_held: self.jump,
            jump_pressed: self.jump_pressed,
            reset: self.reset,
            yaw_delta: self.mouse_dx * self.sensitivity,
            pitch_delta: -self.mouse_dy * self.sensitivity,
            hotbar_select: self.hotbar_select,
            hotbar_scroll: self.scroll,
        };

        self.jump_pressed = false;
        self.reset = false;
        self.hotbar_select = None;
        self.scroll = 0;
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;

        snapshot
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(0.002)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_is_held_between_snapshots() {
        let mut input = InputState::default();
        input.process_keyboard(KeyCode::KeyW, true);
        input.process_keyboard(KeyCode::KeyD, true);
        assert!(input.snapshot().forward);
        let s = input.snapshot();
        assert!(s.forward && s.right && !s.left);

        input.process_key_event(KeyCode::KeyW, ElementState::Released);
        assert!(!input.snapshot().forward);
    }

    #[test]
    fn jump_edge_is_consumed() {
        let mut input = InputState::default();
        input.process_keyboard(KeyCode::Space, true);
        input.process_keyboard(KeyCode::Space, true);
        let first = input.snapshot();
        assert!(first.jump_held && first.jump_pressed);
        let second = input.snapshot();
        assert!(second.jump_held && !second.jump_pressed);
    }

    #[test]
    fn mouse_accumulates_and_resets() {
        let mut input = InputState::new(0.01);
        input.process_mouse(10.0, -5.0);
        input.process_mouse(10.0, 0.0);
        let s = input.snapshot();
        assert!((s.yaw_delta - 0.2).abs() < 1e-6);
        assert!((s.pitch_delta - 0.05).abs() < 1e-6);
        assert_eq!(input.snapshot().yaw_delta, 0.0);
    }

    #[test]
    fn scroll_is_summed_then_consumed() {
        let mut input = InputState::default();
        input.process_scroll(1);
        input.process_scroll(1);
        assert_eq!(input.snapshot().hotbar_scroll, 2);
        assert_eq!(input.snapshot().hotbar_scroll, 0);
    }

    #[test]
    fn digits_and_reset() {
        let mut input = InputState::default();
        input.process_keyboard(KeyCode::Digit3, true);
        input.process_keyboard(KeyCode::KeyR, true);
        let s = input.snapshot();
        assert_eq!(s.hotbar_select, Some(2));
        assert!(s.reset);
        let s = input.snapshot();
        assert_eq!(s.hotbar_select, None);
        assert!(!s.reset);
    }
}
