//! Notice Modal Component
//!
//! Blocking message box for refused moves.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_board_store, BoardStateStoreFields};

#[component]
pub fn NoticeModal() -> impl IntoView {
    let store = use_board_store();
    let message = move || store.notice().get();

    view! {
        <Show when=move || message().is_some()>
            <div class="modal-backdrop">
                <div class="modal" role="alertdialog">
                    <p class="modal-message">{move || message().unwrap_or_default()}</p>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_dismiss_notice(&store);
                        }
                    >
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
