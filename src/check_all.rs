//! Select-all checkbox for forms with a `#check-all` control.

pub const CHECK_ALL_ID: &str = "check-all";

/// The control starts checked only when every other box already is
pub fn initial_state(others: &[bool]) -> bool {
    others.iter().all(|checked| *checked)
}

/// Toggling the control copies its state to every other box
pub fn apply_toggle(control: bool, others: &mut [bool]) {
    others.iter_mut().for_each(|checked| *checked = control);
}

/// Wire up `#check-all` on the current page. Returns `false` if it is absent.
#[cfg(target_arch = "wasm32")]
pub fn bind() -> bool {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(control) = document
        .get_element_by_id(CHECK_ALL_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return false;
    };
    let selector = format!("input[type=\"checkbox\"]:not(#{})", CHECK_ALL_ID);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return false;
    };
    let boxes: Vec<HtmlInputElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect();

    let states: Vec<bool> = boxes.iter().map(|b| b.checked()).collect();
    control.set_checked(initial_state(&states));
    log::debug!("[CHECK-ALL] bound to {} checkboxes", boxes.len());

    let source = control.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let mut states: Vec<bool> = boxes.iter().map(|b| b.checked()).collect();
        apply_toggle(source.checked(), &mut states);
        for (checkbox, checked) in boxes.iter().zip(states) {
            checkbox.set_checked(checked);
        }
    });
    let _ = control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn bind() -> bool {
    false
}
