//! Thin `web_sys` helpers for the live document. Browser only.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Option<web_sys::Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Attach `handler` to the `submit` event of the form matched by
/// `selector`, suppressing the native submission. Returns `false` when no
/// form matches.
///
/// The listener lives as long as the element; a fragment swap drops both.
pub fn on_submit(selector: &str, handler: impl Fn() + 'static) -> bool {
    let Some(form) = query(selector) else {
        log::warn!("no form matches {selector}");
        return false;
    };
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        handler();
    });
    let bound = form
        .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .is_ok();
    closure.forget();
    bound
}
