//! Type Filter Component
//!
//! Chooses which user story type the board shows.

use leptos::prelude::*;

use crate::store::{store_select_type, use_board_store, BoardStateStoreFields};

#[component]
pub fn TypeFilter() -> impl IntoView {
    let store = use_board_store();
    let types = store.board().with_untracked(|board| board.types().to_vec());
    let active = move || store.board().with(|board| board.active_type());

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<u32>() {
            Ok(id) => store_select_type(&store, id),
            Err(e) => log::warn!("[BOARD] bad type id in filter: {}", e),
        }
    };

    view! {
        <div class="type-filter">
            <label for="us_type">"Type"</label>
            <select id="us_type" on:change=on_change>
                {types.into_iter().map(|t| {
                    let id = t.id;
                    let label = if t.name.is_empty() { format!("Type {}", id) } else { t.name };
                    view! {
                        <option value=id.to_string() prop:selected=move || active() == id>{label}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
