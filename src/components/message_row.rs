//! Message row: the stack of transient banners, newest on top.

use leptos::prelude::*;

use crate::state::messages::MessageQueue;

#[component]
pub fn MessageRow() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageQueue>>();

    view! {
        {move || {
            messages
                .get()
                .banners
                .into_iter()
                .map(|banner| {
                    let id = banner.id;
                    let class = banner.class();
                    view! {
                        <div
                            class=class
                            on:click=move |_| {
                                messages.update(|q| {
                                    q.dismiss(id);
                                });
                            }
                        >
                            {banner.text}
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        }}
    }
}
