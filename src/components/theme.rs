//! Blog theme entry: mounts the front-end widgets into a static page.

/// Sidebar bar that hosts the menu toggle.
pub const TOPBAR_SELECTOR: &str = "#sidebar .topbar";

/// Title link the menu toggle sits in front of.
pub const TITLE_LINK_SELECTOR: &str = "#sidebar .topbar .title a";

/// Mount the scroll-to-top button on `<body>` and the menu toggle just
/// before the sidebar title link (or at the end of the top bar when the
/// theme has no title link).
#[cfg(feature = "csr")]
pub fn mount() {
    use super::menu_toggle::MenuToggle;
    use super::return_top::ReturnTop;

    leptos::mount::mount_to_body(ReturnTop);

    match toggle_slot() {
        Some(slot) => leptos::mount::mount_to(slot, MenuToggle).forget(),
        None => log::debug!("no {TOPBAR_SELECTOR}; menu toggle not mounted"),
    }
}

/// Empty `<span>` placed where the toggle goes.
#[cfg(feature = "csr")]
fn toggle_slot() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let doc = crate::util::dom::document()?;
    let slot = doc
        .create_element("span")
        .ok()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;

    if let Some(link) = crate::util::dom::query(TITLE_LINK_SELECTOR) {
        let parent = link.parent_node()?;
        parent.insert_before(&slot, Some(link.as_ref())).ok()?;
    } else {
        crate::util::dom::query(TOPBAR_SELECTOR)?
            .append_child(&slot)
            .ok()?;
    }
    Some(slot)
}
