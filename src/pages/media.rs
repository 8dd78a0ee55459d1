//! Media page: lists uploaded files and uploads new ones.
//!
//! The listing comes from `GET <admin>/media` as `{"list": [{name, type}]}`
//! and is rendered through the page's `#media-tpl` template into
//! `#media-list`. A successful upload refreshes the listing.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use serde::{Deserialize, Serialize};

use super::loader::PageContext;
use crate::config::ConsoleOptions;
use crate::error::ConsoleError;
use crate::net::api::ApiClient;

pub const UPLOAD_FORM_SELECTOR: &str = "#upload-form";
pub const MEDIA_INPUT_SELECTOR: &str = "#media-file";
pub const LIST_SELECTOR: &str = "#media-list";
pub const TEMPLATE_SELECTOR: &str = "#media-tpl";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MediaEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MediaListing {
    #[serde(default)]
    pub list: Vec<MediaEntry>,
}

/// One row handed to the listing template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub name: String,
    pub url: String,
    pub image: bool,
    pub dir: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MediaView {
    pub items: Vec<MediaItem>,
}

impl MediaView {
    #[must_use]
    pub fn from_listing(options: &ConsoleOptions, listing: &MediaListing) -> Self {
        let items = listing
            .list
            .iter()
            .map(|entry| MediaItem {
                name: entry.name.clone(),
                url: options.upload_url(&format!("/{}", entry.name)),
                image: entry.kind == "image",
                dir: entry.kind == "dir",
            })
            .collect();
        Self { items }
    }
}

/// Fetch the current listing, shaped for the template.
///
/// # Errors
///
/// Propagates the request error (already reported in a banner).
pub async fn fetch_view(api: &ApiClient) -> Result<MediaView, ConsoleError> {
    let listing: MediaListing = api.get(&api.options().admin_api("/media")).await?;
    Ok(MediaView::from_listing(api.options(), &listing))
}

pub fn init(ctx: &PageContext<'_>) {
    ctx.api.set_title(Some("Media"));

    #[cfg(feature = "csr")]
    {
        refresh(ctx.api.clone());

        let api = ctx.api.clone();
        crate::util::dom::on_submit(UPLOAD_FORM_SELECTOR, move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let file = match crate::net::types::UploadFile::from_input(MEDIA_INPUT_SELECTOR).await {
                    Ok(file) => file,
                    Err(e) => {
                        log::warn!("upload: {e}");
                        return;
                    }
                };
                if api.upload(file).await.is_ok() {
                    refresh(api);
                }
            });
        });
    }
}

#[cfg(feature = "csr")]
fn refresh(api: ApiClient) {
    leptos::task::spawn_local(async move {
        let Ok(view) = fetch_view(&api).await else {
            return;
        };
        if let Some(list) = crate::util::dom::query(LIST_SELECTOR) {
            list.set_inner_html("");
        }
        if let Err(e) = crate::util::template::load_template(LIST_SELECTOR, TEMPLATE_SELECTOR, &view) {
            log::warn!("media listing: {e}");
        }
    });
}
