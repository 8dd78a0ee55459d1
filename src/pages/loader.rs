//! Page loader: fetch a route's HTML fragment, inject it, run its
//! initializer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected targets check the session before any request is made, so a
//! logged-out user never sees (or fetches) protected markup. Only the
//! initializer registered with the matched route runs; a route without one
//! runs nothing, whatever the previous page registered.
//!
//! TRADE-OFFS
//! ==========
//! Requests cannot be aborted, so each navigation takes a generation number
//! and a fragment arriving after a newer navigation started is dropped
//! instead of injected.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ConsoleError;
use crate::net::api::ApiClient;
use crate::router::{PageTarget, Route, RouteParams};

/// Where fragments are written.
pub trait PageHost: Send + Sync {
    /// Replace the contents of the element matched by `selector`.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` when nothing matches.
    fn inject(&self, selector: &str, html: &str) -> Result<(), ConsoleError>;
}

/// Page host writing into the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHost;

impl PageHost for DocumentHost {
    fn inject(&self, selector: &str, html: &str) -> Result<(), ConsoleError> {
        #[cfg(feature = "csr")]
        {
            let el = crate::util::dom::query(selector)
                .ok_or_else(|| ConsoleError::MissingElement(selector.to_owned()))?;
            el.set_inner_html(html);
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (selector, html);
            Err(ConsoleError::Unavailable("document"))
        }
    }
}

/// What a page initializer receives.
pub struct PageContext<'a> {
    pub params: &'a RouteParams,
    pub api: &'a ApiClient,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// Fragment injected and initializer (if any) run.
    Loaded,
    /// Navigation replaced by a redirect to this fragment.
    Redirected(String),
    /// A newer navigation started before this one finished.
    Superseded,
}

#[derive(Clone)]
pub struct PageLoader {
    api: ApiClient,
    host: Arc<dyn PageHost>,
    generation: Arc<AtomicU64>,
}

impl PageLoader {
    pub fn new(api: ApiClient, host: Arc<dyn PageHost>) -> Self {
        Self { api, host, generation: Arc::new(AtomicU64::new(0)) }
    }

    /// Open `route` with the parameters captured from the fragment.
    ///
    /// # Errors
    ///
    /// Returns the fetch or injection error; fetch failures have already
    /// been reported in a banner by the request helper.
    pub async fn open(&self, route: &Route, params: &RouteParams) -> Result<PageOutcome, ConsoleError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let options = self.api.options();
        log::debug!("open route {:?} (generation {generation})", route.pattern.as_str());

        match &route.target {
            PageTarget::Login => {
                if self.api.session().is_logged_in() {
                    return Ok(self.redirect(&options.dashboard_fragment));
                }
                if !self.load_into(generation, &options.page_selector, &options.login_page).await? {
                    return Ok(PageOutcome::Superseded);
                }
            }
            PageTarget::Logout => {
                self.api.logout().await;
                return Ok(PageOutcome::Redirected(options.login_fragment.clone()));
            }
            PageTarget::Body(template) => {
                if !self.api.session().is_logged_in() {
                    return Ok(self.redirect(&options.login_fragment));
                }
                if !self.load_into(generation, &options.page_selector, &options.body_page).await?
                    || !self.load_into(generation, &options.content_selector, template).await?
                {
                    return Ok(PageOutcome::Superseded);
                }
            }
            PageTarget::Page(template) => {
                if !self.load_into(generation, &options.page_selector, template).await? {
                    return Ok(PageOutcome::Superseded);
                }
            }
        }

        if let Some(init) = &route.init {
            init(&PageContext { params, api: &self.api });
        }
        Ok(PageOutcome::Loaded)
    }

    fn redirect(&self, fragment: &str) -> PageOutcome {
        self.api.redirect(fragment);
        PageOutcome::Redirected(fragment.to_owned())
    }

    /// Fetch `url` and inject it into `selector`. Returns `false` when the
    /// navigation went stale while the fragment was in flight.
    async fn load_into(&self, generation: u64, selector: &str, url: &str) -> Result<bool, ConsoleError> {
        let html = self.api.fetch_fragment(url).await?;
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("dropping stale fragment {url}");
            return Ok(false);
        }
        self.host.inject(selector, &html).inspect_err(|e| log::warn!("inject {url}: {e}"))?;
        Ok(true)
    }
}
