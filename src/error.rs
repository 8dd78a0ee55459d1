//! Error type shared by the request helper, page loader and DOM adapters.
//!
//! ERROR HANDLING
//! ==============
//! Only `Unauthorized` drives distinct behavior (logout + redirect). Every
//! other variant collapses into the same red banner at the call site; the
//! variants exist so callers and tests can tell the failures apart.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The server answered 401; the session token has been cleared.
    #[error("unauthorized: session token rejected")]
    Unauthorized,

    /// The server answered with a non-success status other than 401.
    #[error("request to <{url}> failed with status {status}")]
    Status { url: String, status: u16 },

    /// The request never produced an HTTP response.
    #[error("network request to <{url}> failed: {reason}")]
    Network { url: String, reason: String },

    /// A body could not be encoded or a response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A template failed to compile or render.
    #[error("template render failed: {0}")]
    Template(String),

    /// A selector matched nothing in the current document.
    #[error("no element matches `{0}`")]
    MissingElement(String),

    /// A browser API is not available in this build or environment.
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
}

impl ConsoleError {
    /// HTTP status to report in the failure banner; `0` when no response
    /// was received.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Status { status, .. } => *status,
            _ => 0,
        }
    }
}
