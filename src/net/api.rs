//! Authenticated JSON request helper for the admin and front APIs.
//!
//! Every request carries `Content-Type: application/json`, expects JSON
//! back, and sends the stored session token verbatim in `Authorization`.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any request clears the token and redirects to the login
//! fragment without a banner. Every other failure (status, network, body
//! decode) shows one red banner naming the URL and status, then returns the
//! error to the caller. No retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ApiRequest, ApiResponse, JSON_CONTENT_TYPE, LoginRequest, LoginResponse, Method, RequestBody, UploadFile,
};
use crate::config::ConsoleOptions;
use crate::console::Env;
use crate::error::ConsoleError;
use crate::state::messages::BannerColor;
use crate::state::session::Session;

pub const UPLOAD_OK_MESSAGE: &str = "File uploaded";

fn failure_message(url: &str, status: u16) -> String {
    format!("Request to <{url}> failed with status {status}")
}

fn upload_failed_message(err: &ConsoleError) -> String {
    match err {
        ConsoleError::Status { status, .. } => format!("Upload failed: status {status}"),
        other => format!("Upload failed: {other}"),
    }
}

/// Request helper bound to one session. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    options: Arc<ConsoleOptions>,
    env: Env,
}

impl ApiClient {
    pub fn new(options: Arc<ConsoleOptions>, env: Env) -> Self {
        Self { options, env }
    }

    #[must_use]
    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.env.session
    }

    pub fn show_message(&self, color: BannerColor, text: &str) {
        self.env.chrome.show_message(color, text);
    }

    /// Set the document title; `None` leaves only the configured suffix.
    pub fn set_title(&self, title: Option<&str>) {
        self.env.chrome.set_title(&self.options.page_title(title));
    }

    pub fn redirect(&self, fragment: &str) {
        self.env.navigator.redirect(fragment);
    }

    /// Build the outgoing request with the JSON and token headers applied.
    #[must_use]
    pub fn prepare(&self, method: Method, url: &str, body: RequestBody) -> ApiRequest {
        let mut request = ApiRequest::new(method, url).with_header("Accept", "application/json");
        if !matches!(body, RequestBody::Media(_)) {
            request = request.with_header("Content-Type", JSON_CONTENT_TYPE);
        }
        if let Some(token) = self.env.session.token() {
            request = request.with_header("Authorization", &token);
        }
        request.with_body(body)
    }

    /// # Errors
    ///
    /// See the module docs; 401 yields `Unauthorized` after logging out.
    pub async fn get<R: DeserializeOwned>(&self, url: &str) -> Result<R, ConsoleError> {
        self.request(Method::Get, url, RequestBody::Empty).await
    }

    /// # Errors
    ///
    /// See the module docs; 401 yields `Unauthorized` after logging out.
    pub async fn delete<R: DeserializeOwned>(&self, url: &str) -> Result<R, ConsoleError> {
        self.request(Method::Delete, url, RequestBody::Empty).await
    }

    /// # Errors
    ///
    /// See the module docs; also fails if `body` cannot be encoded.
    pub async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, ConsoleError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Post, url, RequestBody::Json(serde_json::to_string(body)?))
            .await
    }

    /// # Errors
    ///
    /// See the module docs; also fails if `body` cannot be encoded.
    pub async fn put<B, R>(&self, url: &str, body: &B) -> Result<R, ConsoleError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Put, url, RequestBody::Json(serde_json::to_string(body)?))
            .await
    }

    /// # Errors
    ///
    /// See the module docs; also fails if `body` cannot be encoded.
    pub async fn patch<B, R>(&self, url: &str, body: &B) -> Result<R, ConsoleError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Patch, url, RequestBody::Json(serde_json::to_string(body)?))
            .await
    }

    /// Send a prepared JSON request and decode the response.
    ///
    /// # Errors
    ///
    /// See the module docs.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: RequestBody,
    ) -> Result<R, ConsoleError> {
        let response = self.execute(self.prepare(method, url, body)).await?;
        response.json::<R>().map_err(|e| {
            log::warn!("{} {url}: undecodable response: {e}", method.as_str());
            self.report_failure(url, response.status);
            ConsoleError::Json(e)
        })
    }

    /// Fetch a static HTML fragment as text.
    ///
    /// # Errors
    ///
    /// Same banner and 401 handling as JSON requests.
    pub async fn fetch_fragment(&self, url: &str) -> Result<String, ConsoleError> {
        self.execute(ApiRequest::fragment(url)).await.map(|resp| resp.body)
    }

    /// Upload one file to the media endpoint.
    ///
    /// # Errors
    ///
    /// 401 yields `Unauthorized` after logging out; other failures show an
    /// upload banner and return the error.
    pub async fn upload(&self, file: UploadFile) -> Result<(), ConsoleError> {
        let url = self.options.admin_api("/media");
        let request = self.prepare(Method::Post, &url, RequestBody::Media(file));
        match self.send_checked(request).await {
            Ok(_) => {
                self.show_message(BannerColor::Green, UPLOAD_OK_MESSAGE);
                Ok(())
            }
            Err(ConsoleError::Unauthorized) => Err(ConsoleError::Unauthorized),
            Err(e) => {
                self.show_message(BannerColor::Red, &upload_failed_message(&e));
                Err(e)
            }
        }
    }

    /// Exchange the admin password for a session token, then open the
    /// dashboard.
    ///
    /// # Errors
    ///
    /// A rejected password comes back as `Unauthorized`.
    pub async fn login(&self, password: &str) -> Result<(), ConsoleError> {
        let url = self.options.admin_api("/login");
        let body: LoginResponse = self.post(&url, &LoginRequest { password }).await?;
        self.env.session.sign_in(&body.token);
        log::info!("logged in");
        self.redirect(&self.options.dashboard_fragment);
        Ok(())
    }

    /// Revoke the token on the server, then forget it locally and return to
    /// the login fragment whatever the server said.
    pub async fn logout(&self) {
        if self.env.session.is_logged_in() {
            let url = self.options.admin_api("/login");
            if let Err(e) = self.delete::<serde_json::Value>(&url).await {
                log::warn!("logout request failed: {e}");
            }
        }
        self.expire_session();
    }

    /// Clear the token and go to the login fragment.
    pub fn expire_session(&self) {
        self.env.session.sign_out();
        self.redirect(&self.options.login_fragment);
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
        let url = request.url.clone();
        self.send_checked(request).await.inspect_err(|e| {
            if !matches!(e, ConsoleError::Unauthorized) {
                self.report_failure(&url, e.status());
            }
        })
    }

    async fn send_checked(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
        let url = request.url.clone();
        let method = request.method;
        let response = self.env.transport.send(request).await.inspect_err(|e| {
            log::warn!("{} {url}: {e}", method.as_str());
        })?;

        if response.status == 401 {
            log::info!("{} {url}: 401, session expired", method.as_str());
            self.expire_session();
            return Err(ConsoleError::Unauthorized);
        }
        if !response.ok() {
            log::warn!("{} {url}: status {}", method.as_str(), response.status);
            return Err(ConsoleError::Status { url, status: response.status });
        }
        Ok(response)
    }

    fn report_failure(&self, url: &str, status: u16) {
        self.show_message(BannerColor::Red, &failure_message(url, status));
    }
}
