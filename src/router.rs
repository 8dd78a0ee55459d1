//! Fragment router.
//!
//! Maps the URL fragment to a route: a page target plus the initializer
//! registered with it. Patterns are `/`-separated; a `:name` segment
//! captures one path segment. The first registered match wins and an
//! unmatched fragment resolves to nothing.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::Arc;

use crate::pages::loader::PageContext;

/// Setup run after a route's fragment has been injected.
pub type PageInit = Arc<dyn Fn(&PageContext<'_>) + Send + Sync>;

/// What a route loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageTarget {
    /// Login page; already-authenticated users go to the dashboard instead.
    Login,
    /// Revoke the session and return to the login page.
    Logout,
    /// Protected page: body shell plus this template in the content slot.
    Body(String),
    /// Unprotected page loaded straight into the page container.
    Page(String),
}

impl PageTarget {
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Body(_))
    }
}

/// Named parameters captured from the fragment, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    pairs: Vec<(String, String)>,
}

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let segments = split_fragment(pattern)
            .into_iter()
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Static(seg.to_owned()),
            })
            .collect();
        Self { raw: pattern.to_owned(), segments }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parameters captured when `path` matches segment for segment.
    #[must_use]
    pub fn matches(&self, path: &[&str]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.pairs.push((name.clone(), (*part).to_owned())),
            }
        }
        Some(params)
    }
}

/// Path segments of a fragment: `#`, leading/trailing `/` and any `?query`
/// are dropped.
#[must_use]
pub fn split_fragment(fragment: &str) -> Vec<&str> {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    let path = path.split('?').next().unwrap_or_default();
    path.split('/').filter(|seg| !seg.is_empty()).collect()
}

#[derive(Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub target: PageTarget,
    pub init: Option<PageInit>,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .field("target", &self.target)
            .field("init", &self.init.is_some())
            .finish()
    }
}

/// Ordered route table.
#[derive(Clone, Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route with no initializer.
    #[must_use]
    pub fn route(mut self, pattern: &str, target: PageTarget) -> Self {
        self.routes.push(Route { pattern: RoutePattern::parse(pattern), target, init: None });
        self
    }

    /// Register a route with its page initializer.
    #[must_use]
    pub fn route_with<F>(mut self, pattern: &str, target: PageTarget, init: F) -> Self
    where
        F: Fn(&PageContext<'_>) + Send + Sync + 'static,
    {
        self.routes.push(Route {
            pattern: RoutePattern::parse(pattern),
            target,
            init: Some(Arc::new(init)),
        });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route matching `fragment`, with its captured parameters.
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Option<(&Route, RouteParams)> {
        let path = split_fragment(fragment);
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(&path).map(|params| (route, params)))
    }
}
