//! Member Info Component
//!
//! Capacity summary shown next to the sprint member select of the assignment form.

use leptos::prelude::*;

use crate::capacity::CapacityProjection;
use crate::models::AssignableMember;

#[component]
pub fn MemberInfo(
    members: Vec<AssignableMember>,
    estimate: i64,
    /// Member assigned when the form was loaded
    original: Option<u32>,
    /// Member currently picked in the select
    candidate: ReadSignal<Option<u32>>,
) -> impl IntoView {
    let projection = move || CapacityProjection::for_candidate(&members, candidate.get(), original, estimate);

    view! {
        <p>{format!("Estimación de la US: {} Hs", estimate)}</p>
        {move || projection().map(|p| view! {
            <p>{format!("Capacidad del miembro: {} Hs", p.capacity)}</p>
            <p>{format!("Capacidad asignada al miembro luego de asignar la US: {} Hs", p.projected_used)}</p>
            <p>{format!("Capacidad del miembro restante en el sprint: {} Hs", p.remaining)}</p>
        })}
    }
}
