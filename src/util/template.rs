//! Logic-less template rendering.
//!
//! Templates live in the loaded page (usually a
//! `<script type="text/x-template">` element) and are rendered with
//! Handlebars against a serializable data object. Values are HTML-escaped
//! unless the template uses triple braces.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::ConsoleError;

/// Render `source` with `data`.
///
/// # Errors
///
/// Returns `Template` when the source does not compile or a value cannot be
/// rendered.
pub fn render<T: Serialize>(source: &str, data: &T) -> Result<String, ConsoleError> {
    let registry = Handlebars::new();
    registry
        .render_template(source, data)
        .map_err(|e| ConsoleError::Template(e.to_string()))
}

/// Render the template held by `template_selector` and append the result to
/// `container_selector`.
///
/// # Errors
///
/// Returns `MissingElement` for an unmatched selector, `Template` on render
/// failure, or `Unavailable` outside the browser.
pub fn load_template<T: Serialize>(
    container_selector: &str,
    template_selector: &str,
    data: &T,
) -> Result<(), ConsoleError> {
    #[cfg(feature = "csr")]
    {
        let find = |selector: &str| {
            super::dom::query(selector)
                .ok_or_else(|| ConsoleError::MissingElement(selector.to_owned()))
        };
        let source = find(template_selector)?.inner_html();
        let html = render(&source, data)?;
        find(container_selector)?
            .insert_adjacent_html("beforeend", &html)
            .map_err(|_| ConsoleError::MissingElement(container_selector.to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container_selector, template_selector, data);
        Err(ConsoleError::Unavailable("document"))
    }
}
