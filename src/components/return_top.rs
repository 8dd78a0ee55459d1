//! Scroll-to-top button for the blog theme.
//!
//! Shown once the page has scrolled past the threshold; clicking it scrolls
//! the window back to the top.

#[cfg(test)]
#[path = "return_top_test.rs"]
mod return_top_test;

use leptos::prelude::*;

/// Scroll offset in pixels past which the button appears.
pub const RETURN_TOP_THRESHOLD: f64 = 30.0;

#[must_use]
pub fn return_top_visible(scroll_y: f64) -> bool {
    scroll_y > RETURN_TOP_THRESHOLD
}

#[component]
pub fn ReturnTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let update = move || {
            let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            visible.set(return_top_visible(scroll_y));
        };
        update();
        let _ = window_event_listener(leptos::ev::scroll, move |_| update());
    }

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    };

    view! {
        <button
            id="return-top"
            type="button"
            title="Back to top"
            style:display=move || if visible.get() { "block" } else { "none" }
            on:click=on_click
        >
            "▲"
        </button>
    }
}
