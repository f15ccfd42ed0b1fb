//! Kanban Board Component
//!
//! Lanes of the active user story type with drag-and-drop between them.
//! Lanes are rebuilt from the board state after every drop or type switch.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, DropTarget};

use crate::components::LaneColumn;
use crate::context::use_board_context;
use crate::store::{store_apply_drop, use_board_store, BoardStateStoreFields};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();

    bind_global_mouseup(ctx.dnd, move |dragged_id, target| {
        let DropTarget::Lane(lane_id) = target;
        log::debug!("[DND] drop: story={}, lane={}", dragged_id, lane_id);
        let outcome = store_apply_drop(&store, &ctx.config(), dragged_id, &lane_id);
        log::debug!("[DND] outcome: {:?}", outcome);
    });

    let lanes = move || {
        let _ = store.revision().get();
        store.board().with(|board| (board.lanes(), board.actor().id))
    };

    view! {
        <div class="kanban-board">
            {move || {
                let (lanes, actor) = lanes();
                lanes
                    .into_iter()
                    .map(|lane| view! { <LaneColumn lane=lane actor=actor /> })
                    .collect_view()
            }}
        </div>
    }
}
