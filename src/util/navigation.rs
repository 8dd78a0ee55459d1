//! Fragment navigation.
//!
//! The console routes purely on `location.hash`; redirecting means writing
//! a new fragment and letting the `hashchange` listener dispatch it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Where redirects go.
pub trait Navigator: Send + Sync {
    /// Navigate to `fragment` (with or without the leading `#`).
    fn redirect(&self, fragment: &str);

    /// Current fragment including its leading `#`, or empty.
    fn current_fragment(&self) -> String;
}

/// `href` for a fragment, adding the `#` when missing.
#[must_use]
pub fn fragment_href(fragment: &str) -> String {
    if fragment.starts_with('#') {
        fragment.to_owned()
    } else {
        format!("#{fragment}")
    }
}

/// Navigator backed by `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn redirect(&self, fragment: &str) {
        let href = fragment_href(fragment);
        log::debug!("redirect to {href}");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&href);
            }
        }
    }

    fn current_fragment(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }
}
