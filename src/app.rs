//! Root admin console component with context providers and fragment
//! dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders only the chrome: the document title, the message row and
//! an empty page container. Page content arrives as HTML fragments that the
//! page loader injects into that container on every `hashchange`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::message_row::MessageRow;
use crate::config::load_options;
use crate::console::{Console, Env};
use crate::pages::admin_routes;
use crate::state::messages::{BannerColor, Chrome, MessageQueue};

/// Chrome backed by Leptos signals.
#[derive(Clone, Copy)]
pub struct SignalChrome {
    pub messages: RwSignal<MessageQueue>,
    pub title: RwSignal<String>,
}

impl SignalChrome {
    /// Drop every banner whose timeout has elapsed at `now_ms`.
    pub fn expire(&self, now_ms: f64) -> usize {
        self.messages.try_update(|q| q.prune(now_ms)).unwrap_or(0)
    }
}

impl Chrome for SignalChrome {
    fn show_message(&self, color: BannerColor, text: &str) {
        let now = now_ms();
        let shown = self.messages.try_update(|q| q.show(color, text, now)).is_some();
        #[cfg(feature = "csr")]
        if shown {
            let chrome = *self;
            let timeout = self.messages.with_untracked(|q| q.timeout_ms);
            gloo_timers::callback::Timeout::new(timeout, move || {
                chrome.expire(now_ms());
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = shown;
        }
    }

    fn set_title(&self, title: &str) {
        self.title.set(title.to_owned());
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Root admin console component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let options = load_options();
    let page_id = options.page_selector.trim_start_matches('#').to_owned();
    let messages = RwSignal::new(MessageQueue::new(options.message_timeout_ms));
    let title = RwSignal::new(options.page_title(None));
    let chrome = SignalChrome { messages, title };

    let console = Console::new(options, Env::browser(Arc::new(chrome)), admin_routes());
    provide_context(messages);
    provide_context(console.clone());

    #[cfg(feature = "csr")]
    {
        let dispatch = |console: Console| {
            leptos::task::spawn_local(async move {
                if let Err(e) = console.dispatch_current().await {
                    log::debug!("dispatch failed: {e}");
                }
            });
        };
        dispatch(console.clone());
        let _ = window_event_listener(leptos::ev::hashchange, move |_| dispatch(console.clone()));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = console;
    }

    view! {
        <Title text=move || title.get()/>
        <div class="message-row">
            <MessageRow/>
        </div>
        <div id=page_id></div>
    }
}
