//! Board Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::config::BoardConfig;

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Drag state shared by lanes and cards
    pub dnd: DndSignals,
    config: StoredValue<BoardConfig>,
}

impl BoardContext {
    pub fn new(dnd: DndSignals, config: BoardConfig) -> Self {
        Self { dnd, config: StoredValue::new(config) }
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }
}

pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
