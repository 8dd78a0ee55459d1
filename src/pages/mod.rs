//! Admin pages and the console's route table.
//!
//! ARCHITECTURE
//! ============
//! Each page is an HTML fragment served next to the console plus an optional
//! initializer registered with its route. Pages with nothing to wire up only
//! set the document title.


pub mod loader;
pub mod login;
pub mod media;

use crate::router::{PageTarget, Router};
use loader::PageContext;

fn titled(title: &'static str) -> impl Fn(&PageContext<'_>) + Send + Sync + 'static {
    move |ctx| ctx.api.set_title(Some(title))
}

fn body(template: &str) -> PageTarget {
    PageTarget::Body(template.to_owned())
}

/// Routes of the admin console.
#[must_use]
pub fn admin_routes() -> Router {
    Router::new()
        .route_with("", PageTarget::Login, login::init)
        .route_with("login", PageTarget::Login, login::init)
        .route("logout", PageTarget::Logout)
        .route_with("dashboard", body("dashboard.html"), titled("Dashboard"))
        .route_with("posts", body("posts.html"), titled("Posts"))
        .route_with("posts/new", body("post.html"), titled("New post"))
        .route_with("posts/:id", body("post.html"), titled("Edit post"))
        .route_with("tags", body("tags.html"), titled("Tags"))
        .route_with("tags/:id", body("tag.html"), titled("Edit tag"))
        .route_with("comments", body("comments.html"), titled("Comments"))
        .route_with("media", body("media.html"), media::init)
        .route_with("options", body("options.html"), titled("Options"))
        .route_with("themes", body("themes.html"), titled("Themes"))
        .route_with("password", body("password.html"), titled("Password"))
}
