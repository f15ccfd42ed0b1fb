//! Lane Column Component
//!
//! One kanban lane and the cards in it.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_lane_mouseenter, make_on_lane_mouseleave};

use crate::columns::Lane;
use crate::components::StoryCard;
use crate::context::use_board_context;

#[component]
pub fn LaneColumn(lane: Lane, actor: u32) -> impl IntoView {
    let dnd = use_board_context().dnd;
    let index = lane.index;

    let on_mouseenter = make_on_lane_mouseenter(dnd, lane.id.clone());
    let on_mouseleave = make_on_lane_mouseleave(dnd, lane.id.clone());

    // Highlight lanes the dragged card could land on
    let lane_id = StoredValue::new(lane.id.clone());
    let lane_class = move || {
        let mut c = String::from("kanban-lane");
        if lane_id.with_value(|id| dnd.accepts(id)) {
            c.push_str(" drag-target");
            let hovered = lane_id.with_value(|id| {
                dnd.drop_target.with(|t| matches!(t, Some(leptos_dragdrop::DropTarget::Lane(l)) if l == id))
            });
            if hovered {
                c.push_str(" active");
            }
        }
        c
    };
    let count = lane.items.len();
    let drag_to = lane.drag_to;

    view! {
        <section class=lane_class data-id=lane.id on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <header class="kanban-lane-header">
                <span class="kanban-lane-title">{lane.title}</span>
                <span class="kanban-lane-count">{count}</span>
            </header>
            <div class="kanban-lane-items">
                {lane.items.into_iter().map(|item| {
                    let mine = item.assigned_member == Some(actor);
                    view! { <StoryCard item=item lane=index mine=mine drag_to=drag_to.clone() /> }
                }).collect_view()}
            </div>
        </section>
    }
}
