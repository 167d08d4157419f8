// ============================================
// Message Log - Всплывающие сообщения
// ============================================
// Сообщение живёт 7 секунд, последнюю секунду гаснет.
// Одинаковый текст в окне антидребезга не дублируется.

use std::collections::HashMap;

/// Время жизни сообщения (сек)
pub const MESSAGE_LIFETIME: f32 = 7.0;

/// Длительность затухания в конце жизни (сек)
pub const FADE_DURATION: f32 = 1.0;

/// Окно антидребезга одинаковых сообщений (сек)
pub const DEBOUNCE_WINDOW: f32 = 1.0;

/// Важность сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    /// Возраст (сек)
    pub age: f32,
}

impl Message {
    /// Непрозрачность: 1 до начала затухания, дальше линейно к 0
    pub fn opacity(&self) -> f32 {
        let fade_start = MESSAGE_LIFETIME - FADE_DURATION;
        if self.age <= fade_start {
            1.0
        } else {
            ((MESSAGE_LIFETIME - self.age) / FADE_DURATION).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Default)]
pub struct MessageLog {
    /// Новые в начале
    messages: Vec<Message>,
    /// Когда текст последний раз принимался
    recent: HashMap<String, f32>,
    clock: f32,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить сообщение. false если отброшено антидребезгом
    pub fn push(&mut self, text: &str, severity: Severity) -> bool {
        if let Some(&at) = self.recent.get(text) {
            if self.clock - at < DEBOUNCE_WINDOW {
                return false;
            }
        }
        self.recent.insert(text.to_string(), self.clock);
        self.messages.insert(
            0,
            Message {
                text: text.to_string(),
                severity,
                age: 0.0,
            },
        );
        true
    }

    /// Состарить сообщения и убрать истёкшие
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        for message in &mut self.messages {
            message.age += dt;
        }
        self.messages.retain(|m| m.age < MESSAGE_LIFETIME);

        let clock = self.clock;
        self.recent.retain(|_, at| clock - *at < DEBOUNCE_WINDOW);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.recent.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
