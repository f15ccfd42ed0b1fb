//! Story Card Component
//!
//! A single user story on the board.

use leptos::prelude::*;
use leptos_dragdrop::make_on_card_mousedown;

use crate::context::use_board_context;
use crate::models::WorkItem;

/// Draggable card for one user story
#[component]
pub fn StoryCard(
    item: WorkItem,
    /// Lane the card is rendered in
    lane: usize,
    /// Whether the story is assigned to the member viewing the board
    mine: bool,
    /// Lane ids the card may be dropped on
    drag_to: Vec<String>,
) -> impl IntoView {
    let ctx = use_board_context();
    let dnd = ctx.dnd;
    let id = item.id;

    let on_mousedown = make_on_card_mousedown(dnd, id, drag_to);
    let card_class = move || {
        let mut c = String::from("story-card");
        if dnd.dragging.get() == Some(id) { c.push_str(" dragging"); }
        if mine { c.push_str(" mine"); }
        c
    };
    let open_tasks = item.tasks.iter().filter(|t| t.column == item.column && !t.disabled).count();

    view! {
        <div class=card_class data-eid=format!("us-{}", id) data-lane=lane.to_string() on:mousedown=on_mousedown>
            <div class="story-card-header">
                <span class="story-code">{item.code.clone()}</span>
                {item.sprint_priority.map(|p| view! { <span class="story-priority">"P" {p}</span> })}
            </div>
            <div class="story-title">{item.title.clone()}</div>
            <div class="story-project">{item.project_label()}</div>
            <div class="story-meta">
                <span class="story-tasks">{format!("{} active tasks", open_tasks)}</span>
                {mine.then(|| view! { <span class="story-mine">"Assigned to you"</span> })}
            </div>
            <div class="story-links">
                <a href=item.details_url()>"Details"</a>
                <a href=item.create_task_url()>"Add task"</a>
            </div>
        </div>
    }
}
