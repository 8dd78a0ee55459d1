use super::*;

fn table() -> Router {
    Router::new()
        .route("login", PageTarget::Login)
        .route("posts", PageTarget::Body("posts.html".to_owned()))
        .route("posts/:id", PageTarget::Body("post.html".to_owned()))
        .route("/tags/:id/edit", PageTarget::Body("tag.html".to_owned()))
        .route("", PageTarget::Login)
}

// =============================================================
// split_fragment
// =============================================================

#[test]
fn split_fragment_ignores_hash_and_slashes() {
    assert_eq!(split_fragment("#/posts/5/"), vec!["posts", "5"]);
    assert_eq!(split_fragment("#posts/5"), vec!["posts", "5"]);
    assert_eq!(split_fragment("posts"), vec!["posts"]);
}

#[test]
fn split_fragment_drops_query() {
    assert_eq!(split_fragment("#/posts?page=2"), vec!["posts"]);
}

#[test]
fn split_fragment_of_empty_is_empty() {
    assert!(split_fragment("").is_empty());
    assert!(split_fragment("#").is_empty());
    assert!(split_fragment("#/").is_empty());
}

// =============================================================
// Matching
// =============================================================

#[test]
fn resolve_static_route() {
    let router = table();
    let (route, params) = router.resolve("#login").expect("login");
    assert_eq!(route.target, PageTarget::Login);
    assert!(params.is_empty());
}

#[test]
fn resolve_captures_params() {
    let router = table();
    let (route, params) = router.resolve("#/posts/42").expect("post");
    assert_eq!(route.target, PageTarget::Body("post.html".to_owned()));
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.values().collect::<Vec<_>>(), vec!["42"]);
}

#[test]
fn resolve_param_in_middle() {
    let router = table();
    let (_, params) = router.resolve("#tags/7/edit").expect("tag edit");
    assert_eq!(params.get("id"), Some("7"));
    assert!(router.resolve("#tags/7/delete").is_none());
}

#[test]
fn resolve_requires_same_length() {
    let router = table();
    assert!(router.resolve("#posts/1/2").is_none());
}

#[test]
fn resolve_unknown_fragment_is_none() {
    assert!(table().resolve("#nowhere").is_none());
}

#[test]
fn resolve_empty_fragment_hits_root_route() {
    let router = table();
    let (route, _) = router.resolve("").expect("root");
    assert_eq!(route.pattern.as_str(), "");
}

#[test]
fn first_registered_match_wins() {
    let router = Router::new()
        .route("posts/:id", PageTarget::Body("first.html".to_owned()))
        .route("posts/new", PageTarget::Body("second.html".to_owned()));
    let (route, _) = router.resolve("#posts/new").expect("match");
    assert_eq!(route.target, PageTarget::Body("first.html".to_owned()));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn route_with_keeps_initializer() {
    let router = Router::new()
        .route("a", PageTarget::Page("a.html".to_owned()))
        .route_with("b", PageTarget::Page("b.html".to_owned()), |_| {});
    assert_eq!(router.len(), 2);
    assert!(router.resolve("#a").expect("a").0.init.is_none());
    assert!(router.resolve("#b").expect("b").0.init.is_some());
}

#[test]
fn only_body_targets_require_login() {
    assert!(PageTarget::Body("x.html".to_owned()).requires_login());
    assert!(!PageTarget::Page("x.html".to_owned()).requires_login());
    assert!(!PageTarget::Login.requires_login());
    assert!(!PageTarget::Logout.requires_login());
}
