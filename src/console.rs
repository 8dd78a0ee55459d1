//! Admin console session: options, browser services, and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Console` is built at startup and provided to the Leptos tree as
//! context. Fragment changes go through `dispatch`, which resolves the route
//! and hands it to the page loader.
//!
//! DESIGN
//! ======
//! Browser services sit behind traits collected in `Env`, so the whole
//! request/route/load path runs in unit tests against recording fakes.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use std::sync::Arc;

use crate::config::ConsoleOptions;
use crate::error::ConsoleError;
use crate::net::api::ApiClient;
use crate::net::transport::{FetchTransport, Transport};
use crate::pages::loader::{DocumentHost, PageHost, PageLoader, PageOutcome};
use crate::router::Router;
use crate::state::messages::{BannerColor, Chrome};
use crate::state::session::Session;
use crate::util::navigation::{LocationNavigator, Navigator};

/// Services the console talks to.
#[derive(Clone)]
pub struct Env {
    pub session: Session,
    pub navigator: Arc<dyn Navigator>,
    pub chrome: Arc<dyn Chrome>,
    pub transport: Arc<dyn Transport>,
    pub host: Arc<dyn PageHost>,
}

impl Env {
    /// Live browser services around the given chrome.
    pub fn browser(chrome: Arc<dyn Chrome>) -> Self {
        Self {
            session: Session::browser(),
            navigator: Arc::new(LocationNavigator),
            chrome,
            transport: Arc::new(FetchTransport),
            host: Arc::new(DocumentHost),
        }
    }
}

#[derive(Clone)]
pub struct Console {
    api: ApiClient,
    loader: PageLoader,
    router: Arc<Router>,
    navigator: Arc<dyn Navigator>,
}

impl Console {
    pub fn new(options: ConsoleOptions, env: Env, router: Router) -> Self {
        let navigator = env.navigator.clone();
        let host = env.host.clone();
        let api = ApiClient::new(Arc::new(options), env);
        let loader = PageLoader::new(api.clone(), host);
        log::debug!("console ready with {} routes", router.len());
        Self { api, loader, router: Arc::new(router), navigator }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn options(&self) -> &ConsoleOptions {
        self.api.options()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn set_title(&self, title: Option<&str>) {
        self.api.set_title(title);
    }

    pub fn show_message(&self, color: BannerColor, text: &str) {
        self.api.show_message(color, text);
    }

    pub fn redirect(&self, fragment: &str) {
        self.api.redirect(fragment);
    }

    /// Resolve `fragment` and open the matching page. `Ok(None)` means no
    /// route matched and nothing changed.
    ///
    /// # Errors
    ///
    /// Propagates the page loader's fetch or injection error.
    pub async fn dispatch(&self, fragment: &str) -> Result<Option<PageOutcome>, ConsoleError> {
        let Some((route, params)) = self.router.resolve(fragment) else {
            log::debug!("no route for {fragment:?}");
            return Ok(None);
        };
        self.loader.open(route, &params).await.map(Some)
    }

    /// Dispatch whatever fragment the location currently holds.
    ///
    /// # Errors
    ///
    /// See [`Console::dispatch`].
    pub async fn dispatch_current(&self) -> Result<Option<PageOutcome>, ConsoleError> {
        let fragment = self.navigator.current_fragment();
        self.dispatch(&fragment).await
    }
}
