//! HTTP transport.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Elsewhere: every request fails with `Unavailable` so host builds stay
//! inert; tests substitute their own `Transport`.
//!
//! A transport reports every HTTP status as `Ok`; only a request that never
//! got a response is an `Err`. Status interpretation belongs to the caller.

use futures::future::LocalBoxFuture;

use super::types::{ApiRequest, ApiResponse};
use crate::error::ConsoleError;

pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ConsoleError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ConsoleError>> {
        Box::pin(fetch(request))
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
    use super::types::{Method, RequestBody};
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};

    let url = request.url.clone();
    let network = |e: gloo_net::Error| ConsoleError::Network { url: url.clone(), reason: e.to_string() };

    let method = match request.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(text) => builder.body(text),
        RequestBody::Media(file) => {
            let form = media_form(&file).map_err(|_| ConsoleError::Unavailable("FormData"))?;
            builder.body(form)
        }
    }
    .map_err(network)?;

    let resp = built.send().await.map_err(network)?;
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn media_form(file: &super::types::UploadFile) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
    let form = web_sys::FormData::new()?;
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    form.append_with_blob_and_filename(super::types::MEDIA_FIELD, &blob, &file.file_name)?;
    Ok(form)
}

#[cfg(not(feature = "csr"))]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
    let _ = request;
    Err(ConsoleError::Unavailable("fetch"))
}
