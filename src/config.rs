//! Console options: URL prefixes, title format and banner timeout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page may embed a `<script id="console-options"
//! type="application/json">` block; any key it omits keeps its default.
//! Options are immutable after startup and shared behind an `Arc`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Banner lifetime used when the options block does not set one.
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;

/// Element id of the embedded options block.
pub const OPTIONS_ELEMENT_ID: &str = "console-options";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleOptions {
    #[serde(rename = "titleSuffix")]
    pub title_suffix: String,
    #[serde(rename = "titleSeparator")]
    pub title_separator: String,
    #[serde(rename = "adminAPIPrefix")]
    pub admin_api_prefix: String,
    #[serde(rename = "frontAPIPrefix")]
    pub front_api_prefix: String,
    #[serde(rename = "uploadURLPrefix")]
    pub upload_url_prefix: String,
    /// Banner lifetime in milliseconds.
    #[serde(rename = "messageTimeout")]
    pub message_timeout_ms: u32,
    #[serde(rename = "loginFragment")]
    pub login_fragment: String,
    #[serde(rename = "dashboardFragment")]
    pub dashboard_fragment: String,
    /// Shell fragment wrapping every authenticated page.
    #[serde(rename = "bodyPage")]
    pub body_page: String,
    #[serde(rename = "loginPage")]
    pub login_page: String,
    #[serde(rename = "pageSelector")]
    pub page_selector: String,
    #[serde(rename = "contentSelector")]
    pub content_selector: String,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            title_suffix: "Blog Admin".to_owned(),
            title_separator: "-".to_owned(),
            admin_api_prefix: "/admin/api".to_owned(),
            front_api_prefix: "/api".to_owned(),
            upload_url_prefix: "/uploads".to_owned(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            login_fragment: "login".to_owned(),
            dashboard_fragment: "dashboard".to_owned(),
            body_page: "./body.html".to_owned(),
            login_page: "login.html".to_owned(),
            page_selector: "#page".to_owned(),
            content_selector: "#content".to_owned(),
        }
    }
}

impl ConsoleOptions {
    /// Parse options from JSON, filling omitted keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the document is not an options object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn admin_api(&self, path: &str) -> String {
        format!("{}{path}", self.admin_api_prefix)
    }

    #[must_use]
    pub fn front_api(&self, path: &str) -> String {
        format!("{}{path}", self.front_api_prefix)
    }

    #[must_use]
    pub fn upload_url(&self, path: &str) -> String {
        format!("{}{path}", self.upload_url_prefix)
    }

    /// Full document title for a page; an empty or missing title yields the
    /// suffix alone.
    #[must_use]
    pub fn page_title(&self, title: Option<&str>) -> String {
        match title.map(str::trim) {
            Some(t) if !t.is_empty() => format!("{t}{}{}", self.title_separator, self.title_suffix),
            _ => self.title_suffix.clone(),
        }
    }
}

/// Read options from the embedded options block, falling back to defaults.
pub fn load_options() -> ConsoleOptions {
    let Some(raw) = embedded_options_json() else {
        return ConsoleOptions::default();
    };
    match ConsoleOptions::from_json(&raw) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("ignoring malformed #{OPTIONS_ELEMENT_ID} block: {e}");
            ConsoleOptions::default()
        }
    }
}

fn embedded_options_json() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window().and_then(|w| w.document())?;
        let el = doc.get_element_by_id(OPTIONS_ELEMENT_ID)?;
        el.text_content().filter(|raw| !raw.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
