//! Responsive menu toggle for the blog theme.
//!
//! While `(max-width:600px)` matches, a `☰` toggle shows in the sidebar top
//! bar and flips `#sidebar .menus` between shown and hidden, starting from
//! whatever the stylesheet currently shows. Until the first click, and again
//! once the viewport widens, the menus carry no inline `display`.

#[cfg(test)]
#[path = "menu_toggle_test.rs"]
mod menu_toggle_test;

use leptos::prelude::*;

pub const NARROW_QUERY: &str = "(max-width:600px)";
pub const MENUS_SELECTOR: &str = "#sidebar .menus";

/// Inline `display` for the menus. Empty means "leave it to the stylesheet".
///
/// `open` is `None` until the user toggles.
#[must_use]
pub fn menus_display(narrow: bool, open: Option<bool>) -> &'static str {
    match (narrow, open) {
        (false, _) | (true, None) => "",
        (true, Some(true)) => "block",
        (true, Some(false)) => "none",
    }
}

/// Menu state after a click; `shown_now` is what the page displays before it.
#[must_use]
pub fn toggled(open: Option<bool>, shown_now: bool) -> bool {
    !open.unwrap_or(shown_now)
}

/// Whether the stylesheet currently shows the menus.
fn menus_shown() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        crate::util::dom::query_all(MENUS_SELECTOR).iter().any(|menu| {
            window
                .get_computed_style(menu)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("display").ok())
                .is_some_and(|display| display != "none")
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[component]
pub fn MenuToggle() -> impl IntoView {
    let narrow = RwSignal::new(false);
    let open = RwSignal::new(None::<bool>);

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let query = web_sys::window().and_then(|w| w.match_media(NARROW_QUERY).ok().flatten());
        if let Some(query) = query {
            narrow.set(query.matches());
            let on_change = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| {
                    narrow.set(ev.matches());
                    if !ev.matches() {
                        open.set(None);
                    }
                },
            );
            query.set_onchange(Some(on_change.as_ref().unchecked_ref()));
            on_change.forget();
        }

        Effect::new(move |_| {
            let display = menus_display(narrow.get(), open.get());
            for menu in crate::util::dom::query_all(MENUS_SELECTOR) {
                let _ = menu.style().set_property("display", display);
            }
        });
    }

    let on_click = move |_| {
        let next = toggled(open.get_untracked(), menus_shown());
        open.set(Some(next));
    };

    view! {
        <Show when=move || narrow.get()>
            <span class="menu-toggle" on:click=on_click>
                "☰"
            </span>
        </Show>
    }
}
