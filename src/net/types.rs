//! Request and response values exchanged with the transport.
//!
//! DESIGN
//! ======
//! Requests are plain data so the headers a request will carry can be
//! asserted in tests before anything touches the network.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Multipart field name the media endpoint expects.
pub const MEDIA_FIELD: &str = "media";

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A single file selected for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(String),
    /// Sent as multipart form data under [`MEDIA_FIELD`].
    Media(UploadFile),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    /// Plain GET for a static HTML fragment; no token, no JSON headers.
    pub fn fragment(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url).with_header("Accept", "text/html")
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// First header value matching `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON; an empty body (204) decodes as `null`.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let body = self.body.trim();
        serde_json::from_str(if body.is_empty() { "null" } else { body })
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(feature = "csr")]
impl UploadFile {
    /// Read the first file selected in the `<input type="file">` matched by
    /// `selector`.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` when the input or a selected file is absent.
    pub async fn from_input(selector: &str) -> Result<Self, crate::ConsoleError> {
        use wasm_bindgen::JsCast;

        let missing = || crate::ConsoleError::MissingElement(selector.to_owned());
        let input = crate::util::dom::query(selector)
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .ok_or_else(missing)?;
        let file = input.files().and_then(|files| files.get(0)).ok_or_else(missing)?;
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| crate::ConsoleError::Unavailable("File.arrayBuffer"))?;
        Ok(Self {
            file_name: file.name(),
            mime: file.type_(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }
}
