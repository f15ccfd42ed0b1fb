//! Board Page State Store
//!
//! Uses Leptos reactive_stores so the lanes re-render whenever the board changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::board::{Board, DropOutcome};
use crate::config::BoardConfig;

/// Board page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct BoardState {
    pub board: Board,
    /// Blocking message shown to the user, if any
    pub notice: Option<String>,
    /// Bumped to force the lanes to be rebuilt from the board
    pub revision: u32,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self { board, notice: None, revision: 0 }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a drop to the board and carry out what the outcome asks for
pub fn store_apply_drop(store: &BoardStore, config: &BoardConfig, item: u32, lane_id: &str) -> DropOutcome {
    let outcome = store.board().write().drop_on_lane_id(item, lane_id);

    match &outcome {
        DropOutcome::Moved { .. } => {
            if let Some((item, column)) = outcome.persist_request() {
                let project = store.board().read().store().get(item).map(|i| i.project);
                if let Some(project) = project {
                    api::persist_column(config.clone(), project, item, column);
                }
            }
        }
        DropOutcome::Rejected { reason, .. } => {
            store.notice().set(Some(format!("Move not allowed: {}", reason)));
            store_refresh(store);
        }
        DropOutcome::Aborted { .. } => {
            store.notice().set(Some("The board is out of date, please reload the page.".to_string()));
            store_refresh(store);
        }
        DropOutcome::Ignored => store_refresh(store),
    }
    outcome
}

/// Switch the board to another user story type
pub fn store_select_type(store: &BoardStore, us_type: u32) {
    if let Err(e) = store.board().write().select_type(us_type) {
        log::error!("[BOARD] {}", e);
    }
}

pub fn store_dismiss_notice(store: &BoardStore) {
    store.notice().set(None);
}

/// Rebuild the lanes from the unchanged board, putting cards back in place
pub fn store_refresh(store: &BoardStore) {
    store.revision().update(|r| *r = r.wrapping_add(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boot::BootData;
    use crate::items::tests::make_item;
    use crate::models::{Member, UsType};
    use crate::rules::Rejection;

    fn store_with_story_in(column: usize) -> BoardStore {
        let mut item = make_item(1, 1, column);
        item.assigned_member = Some(5);
        let boot = BootData {
            items: vec![item],
            us_types: vec![UsType { id: 1, name: "Feature".into(), columns: vec!["To Do".into(), "Doing".into(), "Done".into()] }],
            member: Member { id: 5, username: "dev".into(), roles: vec!["Developer".into()] },
        };
        Store::new(BoardState::new(Board::new(boot).unwrap()))
    }

    #[test]
    fn same_lane_drop_sends_nothing_and_shows_nothing() {
        let store = store_with_story_in(1);
        let outcome = store_apply_drop(&store, &BoardConfig::default(), 1, "board-Doing");

        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(outcome.persist_request(), None);
        assert_eq!(store.notice().get_untracked(), None);
        assert_eq!(store.board().with_untracked(|b| b.store().get(1).map(|i| i.column)), Some(1));
    }

    #[test]
    fn rejected_drop_sends_nothing_and_explains_why() {
        let store = store_with_story_in(1);
        let before = store.revision().get_untracked();
        let outcome = store_apply_drop(&store, &BoardConfig::default(), 1, "board-Done");

        assert_eq!(outcome, DropOutcome::Rejected { item: 1, reason: Rejection::NoActiveTasks });
        assert_eq!(outcome.persist_request(), None);
        assert_eq!(
            store.notice().get_untracked().as_deref(),
            Some("Move not allowed: no active tasks in the current column.")
        );
        assert_ne!(store.revision().get_untracked(), before);
        assert_eq!(store.board().with_untracked(|b| b.store().get(1).map(|i| i.column)), Some(1));

        store_dismiss_notice(&store);
        assert_eq!(store.notice().get_untracked(), None);
    }
}
