//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for kanban lanes.
//! A press only becomes a drag once the pointer travels past a small threshold,
//! so plain clicks on cards (and the links inside them) keep working.
//! Each card carries the ids of the lanes it may be dropped on; every other
//! lane ignores it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a dragged card is released
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Lane id within the active board
    Lane(String),
}

/// Card pressed but not yet dragged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDrag {
    pub id: u32,
    pub start_x: i32,
    pub start_y: i32,
    /// Lanes the card accepts as targets
    pub drag_to: Vec<String>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card currently being dragged
    pub dragging: RwSignal<Option<u32>>,
    /// Lanes the dragged card may land on
    pub allowed: RwSignal<Vec<String>>,
    /// Allowed lane currently under the pointer
    pub drop_target: RwSignal<Option<DropTarget>>,
    pub pending: RwSignal<Option<PendingDrag>>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// True once the pointer has moved far enough from the press point
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        allowed: RwSignal::new(Vec::new()),
        drop_target: RwSignal::new(None),
        pending: RwSignal::new(None),
    }
}

impl DndSignals {
    /// Whether the card being dragged may be dropped on `lane_id`
    pub fn accepts(&self, lane_id: &str) -> bool {
        self.dragging.get().is_some() && self.allowed.with(|allowed| allowed.iter().any(|l| l == lane_id))
    }

    fn accepts_untracked(&self, lane_id: &str) -> bool {
        self.dragging.get_untracked().is_some()
            && self.allowed.with_untracked(|allowed| allowed.iter().any(|l| l == lane_id))
    }

    /// Promote the pending press to a drag once the pointer is at `now`
    pub fn track_pointer(&self, now: (i32, i32)) {
        if self.dragging.get_untracked().is_some() {
            return;
        }
        let Some(pending) = self.pending.get_untracked() else {
            return;
        };
        if exceeds_threshold((pending.start_x, pending.start_y), now) {
            self.dragging.set(Some(pending.id));
            self.allowed.set(pending.drag_to);
        }
    }

    /// Pointer entered lane `lane_id`
    pub fn enter_lane(&self, lane_id: &str) {
        if self.accepts_untracked(lane_id) {
            self.drop_target.set(Some(DropTarget::Lane(lane_id.to_string())));
        }
    }

    /// Pointer left lane `lane_id`
    pub fn leave_lane(&self, lane_id: &str) {
        // Entering the next lane may already have fired
        let is_current = self
            .drop_target
            .with_untracked(|t| matches!(t, Some(DropTarget::Lane(l)) if l == lane_id));
        if is_current {
            self.drop_target.set(None);
        }
    }
}

/// End drag operation, returning the dragged card and its target if both exist
pub fn end_drag(dnd: &DndSignals) -> Option<(u32, DropTarget)> {
    let dragging = dnd.dragging.get_untracked();
    let target = dnd.drop_target.get_untracked();

    dnd.dragging.set(None);
    dnd.allowed.set(Vec::new());
    dnd.drop_target.set(None);
    dnd.pending.set(None);

    dragging.zip(target)
}

/// Mousedown handler for cards. Records a pending drag with its start position.
pub fn make_on_card_mousedown(
    dnd: DndSignals,
    item_id: u32,
    drag_to: Vec<String>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some()
            {
                return;
            }
        }
        dnd.pending.set(Some(PendingDrag {
            id: item_id,
            start_x: ev.client_x(),
            start_y: ev.client_y(),
            drag_to: drag_to.clone(),
        }));
    }
}

/// Mouseenter handler for lanes
pub fn make_on_lane_mouseenter(dnd: DndSignals, lane_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| dnd.enter_lane(&lane_id)
}

/// Mouseleave handler for lanes
pub fn make_on_lane_mouseleave(dnd: DndSignals, lane_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| dnd.leave_lane(&lane_id)
}

fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        dnd.track_pointer((ev.client_x(), ev.client_y()));
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` receives the dragged card id and the lane it was released over.
/// Releasing outside every allowed lane cancels the drag without a callback.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if let Some((dragged, target)) = end_drag(&dnd) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
