// ============================================
// Hotbar - Инвентарь быстрого доступа
// ============================================
// 9 упорядоченных слотов со стаками. Операции никогда не паникуют:
// add возвращает сколько реально положено, remove: удалось ли.

use crate::game::blocks::BlockType;

/// Количество слотов в хотбаре
pub const HOTBAR_SLOTS: usize = 9;

/// Максимальный размер стака
pub const MAX_STACK: u32 = 64;

/// Предмет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Block(BlockType),
}

/// Занятый слот
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySlot {
    pub item: ItemKind,
    pub count: u32,
}

/// Состояние хотбара
#[derive(Debug, Clone)]
pub struct Hotbar {
    /// None = пустой слот
    slots: [Option<InventorySlot>; HOTBAR_SLOTS],
    /// Индекс выбранного слота (0-8)
    selected: usize,
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Hotbar {
    pub fn new() -> Self {
        Self {
            slots: [None; HOTBAR_SLOTS],
            selected: 0,
        }
    }

    /// Хотбар со стартовыми стаками твёрдых блоков
    pub fn with_starter_blocks() -> Self {
        let mut hotbar = Self::new();
        for block in BlockType::ALL.into_iter().filter(|b| b.is_solid()) {
            hotbar.add_item(ItemKind::Block(block), MAX_STACK);
        }
        hotbar
    }

    /// Выбрать слот по индексу (0-8)
    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SLOTS {
            self.selected = index;
        }
    }

    /// Прокрутка колёсиком: сдвинуть выбор на delta слотов по кругу
    pub fn scroll(&mut self, delta: i32) {
        let slots = HOTBAR_SLOTS as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(slots) as usize;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&InventorySlot> {
        self.slots[self.selected].as_ref()
    }

    pub fn slots(&self) -> &[Option<InventorySlot>; HOTBAR_SLOTS] {
        &self.slots
    }

    /// Всего предметов этого вида
    pub fn count_of(&self, item: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.item == item)
            .map(|s| s.count)
            .sum()
    }

    /// Добавить предметы: сначала в существующие стаки, потом в пустые слоты.
    /// Возвращает сколько добавлено
    pub fn add_item(&mut self, item: ItemKind, count: u32) -> u32 {
        let mut left = count;

        for slot in self.slots.iter_mut().flatten() {
            if left == 0 {
                break;
            }
            if slot.item == item && slot.count < MAX_STACK {
                let moved = left.min(MAX_STACK - slot.count);
                slot.count += moved;
                left -= moved;
            }
        }

        for slot in self.slots.iter_mut() {
            if left == 0 {
                break;
            }
            if slot.is_none() {
                let moved = left.min(MAX_STACK);
                *slot = Some(InventorySlot { item, count: moved });
                left -= moved;
            }
        }

        count - left
    }

    /// Убрать предметы. Если столько нет, ничего не меняется и возвращается false
    pub fn remove_item(&mut self, item: ItemKind, count: u32) -> bool {
        if count == 0 {
            return true;
        }
        if self.count_of(item) < count {
            return false;
        }

        let mut left = count;
        for slot in self.slots.iter_mut().rev() {
            if left == 0 {
                break;
            }
            if let Some(stack) = slot {
                if stack.item == item {
                    let taken = left.min(stack.count);
                    stack.count -= taken;
                    left -= taken;
                    if stack.count == 0 {
                        *slot = None;
                    }
                }
            }
        }
        true
    }
}
