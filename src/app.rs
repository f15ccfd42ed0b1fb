//! Board Page App
//!
//! Root components and the functions that mount them into server-rendered pages.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::board::Board;
use crate::boot::AssignmentData;
use crate::components::{KanbanBoard, MemberInfo, NoticeModal, TypeFilter};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::BoardState;

/// Element the board is rendered into
pub const BOARD_MOUNT_ID: &str = "myKanban";
/// Element the capacity summary is rendered into
pub const MEMBER_INFO_ID: &str = "member-info";
/// Sprint member select of the assignment form
pub const MEMBER_SELECT_ID: &str = "id_sprint_member";

#[component]
pub fn BoardApp(board: Board, config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::new(board));
    provide_context(store);
    provide_context(BoardContext::new(leptos_dragdrop::create_dnd_signals(), config));

    view! {
        <div class="board-layout">
            <TypeFilter />
            <KanbanBoard />
            <NoticeModal />
        </div>
    }
}

fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Mount the board into `#myKanban`, or the body if the page has no such element
pub fn mount_board(board: Board, config: BoardConfig) {
    log::info!("[BOOT] board with {} stories and {} types", board.store().len(), board.types().len());
    match element_by_id(BOARD_MOUNT_ID) {
        Some(parent) => leptos::mount::mount_to(parent, move || view! { <BoardApp board=board config=config /> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <BoardApp board=board config=config /> }),
    }
}

/// Mount the capacity summary and follow the member select
pub fn mount_member_info(data: AssignmentData) {
    let Some(parent) = element_by_id(MEMBER_INFO_ID) else {
        log::warn!("[BOOT] #{} not found, capacity summary disabled", MEMBER_INFO_ID);
        return;
    };
    let select = element_by_id(MEMBER_SELECT_ID).and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok());
    let original = select.as_ref().and_then(|s| s.value().parse::<u32>().ok());

    // The server-rendered summary is replaced by the live one
    parent.set_inner_html("");
    leptos::mount::mount_to(parent, move || {
        let (candidate, set_candidate) = signal(original);

        if let Some(select) = select {
            let source = select.clone();
            let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                set_candidate.set(source.value().parse::<u32>().ok());
            });
            let _ = select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
            on_change.forget();
        }

        view! {
            <MemberInfo
                members=data.members
                estimate=data.estimate
                original=original
                candidate=candidate
            />
        }
    })
    .forget();
}
