//! Login page: exchanges the admin password for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde_json::{Map, Value};

use super::loader::PageContext;

pub const LOGIN_FORM_SELECTOR: &str = "#login-form";
pub const PASSWORD_FIELD: &str = "password";

/// Password from a serialized login form; `None` when missing or empty.
#[must_use]
pub fn password_from(form: &Map<String, Value>) -> Option<String> {
    form.get(PASSWORD_FIELD)
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
}

pub fn init(ctx: &PageContext<'_>) {
    ctx.api.set_title(Some("Login"));

    #[cfg(feature = "csr")]
    {
        use crate::state::messages::BannerColor;

        let api = ctx.api.clone();
        crate::util::dom::on_submit(LOGIN_FORM_SELECTOR, move || {
            let form = match crate::util::form::form_object(LOGIN_FORM_SELECTOR) {
                Ok(form) => form,
                Err(e) => {
                    log::warn!("login form: {e}");
                    return;
                }
            };
            let Some(password) = password_from(&form) else {
                api.show_message(BannerColor::Yellow, "Enter the password first.");
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = api.login(&password).await {
                    log::info!("login rejected: {e}");
                }
            });
        });
    }
}
