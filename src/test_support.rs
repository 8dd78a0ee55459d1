//! In-memory stand-ins for the browser services, shared by unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;

use crate::console::Env;
use crate::error::ConsoleError;
use crate::net::transport::Transport;
use crate::net::types::{ApiRequest, ApiResponse};
use crate::pages::loader::PageHost;
use crate::state::messages::{BannerColor, Chrome};
use crate::state::session::{MemoryStore, Session};
use crate::util::navigation::{Navigator, fragment_href};

/// Status that makes `MockTransport` fail as if the network were down.
pub const NETWORK_DOWN: u16 = 0;

/// Canned responses by URL; unknown URLs answer 404.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, (u16, String)>>,
    pub requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_owned(), (status, body.to_owned()));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn sent_urls(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ConsoleError>> {
        let canned = self.responses.lock().unwrap().get(&request.url).cloned();
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        Box::pin(async move {
            match canned {
                Some((NETWORK_DOWN, _)) => Err(ConsoleError::Network { url, reason: "offline".to_owned() }),
                Some((status, body)) => Ok(ApiResponse::new(status, body)),
                None => Ok(ApiResponse::new(404, "")),
            }
        })
    }
}

/// Records every redirect as an `href`.
#[derive(Default)]
pub struct RecordingNavigator {
    pub hrefs: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<String> {
        self.hrefs.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.hrefs.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, fragment: &str) {
        self.hrefs.lock().unwrap().push(fragment_href(fragment));
    }

    fn current_fragment(&self) -> String {
        self.last().unwrap_or_default()
    }
}

/// Records banners and titles.
#[derive(Default)]
pub struct RecordingChrome {
    pub messages: Mutex<Vec<(BannerColor, String)>>,
    pub titles: Mutex<Vec<String>>,
}

impl RecordingChrome {
    pub fn messages(&self) -> Vec<(BannerColor, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last_title(&self) -> Option<String> {
        self.titles.lock().unwrap().last().cloned()
    }
}

impl Chrome for RecordingChrome {
    fn show_message(&self, color: BannerColor, text: &str) {
        self.messages.lock().unwrap().push((color, text.to_owned()));
    }

    fn set_title(&self, title: &str) {
        self.titles.lock().unwrap().push(title.to_owned());
    }
}

/// Records `(selector, html)` injections.
#[derive(Default)]
pub struct RecordingHost {
    pub injected: Mutex<Vec<(String, String)>>,
}

impl RecordingHost {
    pub fn injected(&self) -> Vec<(String, String)> {
        self.injected.lock().unwrap().clone()
    }
}

impl PageHost for RecordingHost {
    fn inject(&self, selector: &str, html: &str) -> Result<(), ConsoleError> {
        self.injected
            .lock()
            .unwrap()
            .push((selector.to_owned(), html.to_owned()));
        Ok(())
    }
}

/// An `Env` wired to recording fakes, with handles kept for assertions.
pub struct Fixture {
    pub env: Env,
    pub transport: Arc<MockTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub chrome: Arc<RecordingChrome>,
    pub host: Arc<RecordingHost>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_session(Session::in_memory())
    }

    pub fn logged_in(token: &str) -> Self {
        Self::with_session(Session::new(Arc::new(MemoryStore::with_token(token))))
    }

    fn with_session(session: Session) -> Self {
        let transport = Arc::new(MockTransport::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let chrome = Arc::new(RecordingChrome::default());
        let host = Arc::new(RecordingHost::default());
        let env = Env {
            session,
            navigator: navigator.clone(),
            chrome: chrome.clone(),
            transport: transport.clone(),
            host: host.clone(),
        };
        Self { env, transport, navigator, chrome, host }
    }
}
