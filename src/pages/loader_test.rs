use super::*;
use crate::config::ConsoleOptions;
use crate::net::transport::Transport;
use crate::net::types::{ApiRequest, ApiResponse, Method};
use crate::router::Router;
use crate::state::messages::BannerColor;
use crate::test_support::{Fixture, MockTransport};
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

fn loader(fx: &Fixture) -> PageLoader {
    let api = ApiClient::new(Arc::new(ConsoleOptions::default()), fx.env.clone());
    PageLoader::new(api, fx.env.host.clone())
}

fn serve_pages(fx: &Fixture) {
    fx.transport.respond("./body.html", 200, "<nav/><div id=\"content\"></div>");
    fx.transport.respond("posts.html", 200, "<table/>");
    fx.transport.respond("post.html", 200, "<form/>");
    fx.transport.respond("login.html", 200, "<form id=\"login-form\"/>");
    fx.transport.respond("about.html", 200, "<p>about</p>");
}

fn counting_init(counter: &Arc<AtomicUsize>) -> impl Fn(&PageContext<'_>) + Send + Sync + 'static {
    let counter = counter.clone();
    move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================
// Protected pages
// =============================================================

#[test]
fn protected_route_without_token_redirects_before_any_request() {
    let fx = Fixture::new();
    serve_pages(&fx);
    let ran = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route_with("posts", PageTarget::Body("posts.html".to_owned()), counting_init(&ran));
    let (route, params) = router.resolve("#posts").expect("route");

    let outcome = block_on(loader(&fx).open(route, &params)).expect("redirect");

    assert_eq!(outcome, PageOutcome::Redirected("login".to_owned()));
    assert_eq!(fx.navigator.last().as_deref(), Some("#login"));
    assert!(fx.transport.sent().is_empty());
    assert!(fx.host.injected().is_empty());
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

#[test]
fn protected_route_loads_shell_then_template_then_init() {
    let fx = Fixture::logged_in("t");
    serve_pages(&fx);
    let seen = Arc::new(Mutex::new(None::<String>));
    let seen_init = seen.clone();
    let router = Router::new().route_with("posts/:id", PageTarget::Body("post.html".to_owned()), move |ctx| {
        *seen_init.lock().unwrap() = ctx.params.get("id").map(str::to_owned);
    });
    let (route, params) = router.resolve("#/posts/12").expect("route");

    let outcome = block_on(loader(&fx).open(route, &params)).expect("loaded");

    assert_eq!(outcome, PageOutcome::Loaded);
    assert_eq!(fx.transport.sent_urls(), vec!["./body.html", "post.html"]);
    assert_eq!(
        fx.host.injected(),
        vec![
            ("#page".to_owned(), "<nav/><div id=\"content\"></div>".to_owned()),
            ("#content".to_owned(), "<form/>".to_owned()),
        ]
    );
    assert_eq!(seen.lock().unwrap().as_deref(), Some("12"));
}

#[test]
fn fragment_requests_do_not_carry_json_headers() {
    let fx = Fixture::logged_in("t");
    serve_pages(&fx);
    let router = Router::new().route("posts", PageTarget::Body("posts.html".to_owned()));
    let (route, params) = router.resolve("#posts").expect("route");
    block_on(loader(&fx).open(route, &params)).expect("loaded");
    let sent = fx.transport.sent();
    assert!(sent.iter().all(|r| r.method == Method::Get && r.header("Content-Type").is_none()));
}

// =============================================================
// Login, logout and plain pages
// =============================================================

#[test]
fn login_route_when_logged_in_goes_to_dashboard() {
    let fx = Fixture::logged_in("t");
    let router = Router::new().route("login", PageTarget::Login);
    let (route, params) = router.resolve("#login").expect("route");
    let outcome = block_on(loader(&fx).open(route, &params)).expect("redirect");
    assert_eq!(outcome, PageOutcome::Redirected("dashboard".to_owned()));
    assert_eq!(fx.navigator.last().as_deref(), Some("#dashboard"));
    assert!(fx.transport.sent().is_empty());
}

#[test]
fn login_route_when_logged_out_loads_login_page() {
    let fx = Fixture::new();
    serve_pages(&fx);
    let ran = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route_with("login", PageTarget::Login, counting_init(&ran));
    let (route, params) = router.resolve("#login").expect("route");
    let outcome = block_on(loader(&fx).open(route, &params)).expect("loaded");
    assert_eq!(outcome, PageOutcome::Loaded);
    assert_eq!(fx.host.injected()[0].0, "#page");
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

#[test]
fn logout_route_revokes_and_redirects() {
    let fx = Fixture::logged_in("t");
    fx.transport.respond("/admin/api/login", 204, "");
    let router = Router::new().route("logout", PageTarget::Logout);
    let (route, params) = router.resolve("#logout").expect("route");
    let outcome = block_on(loader(&fx).open(route, &params)).expect("logout");
    assert_eq!(outcome, PageOutcome::Redirected("login".to_owned()));
    assert!(!fx.env.session.is_logged_in());
    assert_eq!(fx.transport.sent()[0].method, Method::Delete);
}

#[test]
fn plain_page_loads_without_token() {
    let fx = Fixture::new();
    serve_pages(&fx);
    let router = Router::new().route("about", PageTarget::Page("about.html".to_owned()));
    let (route, params) = router.resolve("#about").expect("route");
    let outcome = block_on(loader(&fx).open(route, &params)).expect("loaded");
    assert_eq!(outcome, PageOutcome::Loaded);
    assert_eq!(fx.host.injected(), vec![("#page".to_owned(), "<p>about</p>".to_owned())]);
}

// =============================================================
// Initializers
// =============================================================

#[test]
fn previous_page_initializer_does_not_run_for_page_without_one() {
    let fx = Fixture::logged_in("t");
    serve_pages(&fx);
    let ran = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route_with("posts", PageTarget::Body("posts.html".to_owned()), counting_init(&ran))
        .route("about", PageTarget::Page("about.html".to_owned()));
    let loader = loader(&fx);

    let (posts, p1) = router.resolve("#posts").expect("posts");
    block_on(loader.open(posts, &p1)).expect("posts loaded");
    let (about, p2) = router.resolve("#about").expect("about");
    block_on(loader.open(about, &p2)).expect("about loaded");

    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn missing_fragment_reports_banner_and_skips_init() {
    let fx = Fixture::new();
    let ran = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route_with("gone", PageTarget::Page("gone.html".to_owned()), counting_init(&ran));
    let (route, params) = router.resolve("#gone").expect("route");

    let err = block_on(loader(&fx).open(route, &params)).expect_err("404");

    assert!(matches!(err, ConsoleError::Status { status: 404, .. }));
    assert_eq!(
        fx.chrome.messages(),
        vec![(BannerColor::Red, "Request to <gone.html> failed with status 404".to_owned())]
    );
    assert!(fx.host.injected().is_empty());
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

// =============================================================
// Superseded navigation
// =============================================================

struct GatedTransport {
    inner: MockTransport,
    gated_url: String,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl Transport for GatedTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ConsoleError>> {
        let gate = if request.url == self.gated_url { self.gate.lock().unwrap().take() } else { None };
        let inner = self.inner.send(request);
        Box::pin(async move {
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            inner.await
        })
    }
}

#[test]
fn slow_page_is_dropped_when_newer_navigation_finishes_first() {
    let fx = Fixture::new();
    let (tx, rx) = oneshot::channel();
    let gated = Arc::new(GatedTransport {
        inner: MockTransport::default(),
        gated_url: "slow.html".to_owned(),
        gate: Mutex::new(Some(rx)),
    });
    gated.inner.respond("slow.html", 200, "<p>slow</p>");
    gated.inner.respond("fast.html", 200, "<p>fast</p>");

    let mut env = fx.env.clone();
    env.transport = gated.clone();
    let api = ApiClient::new(Arc::new(ConsoleOptions::default()), env);
    let loader = PageLoader::new(api, fx.env.host.clone());

    let slow_ran = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route_with("slow", PageTarget::Page("slow.html".to_owned()), counting_init(&slow_ran))
        .route("fast", PageTarget::Page("fast.html".to_owned()));
    let (slow, p1) = router.resolve("#slow").expect("slow");
    let (fast, p2) = router.resolve("#fast").expect("fast");

    let (slow_outcome, fast_outcome, ()) = block_on(futures::future::join3(
        loader.open(slow, &p1),
        loader.open(fast, &p2),
        async move {
            let _ = tx.send(());
        },
    ));

    assert_eq!(slow_outcome.expect("slow"), PageOutcome::Superseded);
    assert_eq!(fast_outcome.expect("fast"), PageOutcome::Loaded);
    assert_eq!(fx.host.injected(), vec![("#page".to_owned(), "<p>fast</p>".to_owned())]);
    assert_eq!(slow_ran.load(Ordering::SeqCst), 0);
}
