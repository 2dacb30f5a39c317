use std::time::Duration;

use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};
use cow_marketplace::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub tone: Tone,
    pub text: String,
}

impl ToastMessage {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            tone,
            text: text.into(),
        }
    }
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, tone: Tone, message: impl Into<String>) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_TOASTS {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(tone, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toasts",
            ul {
                for message in entries {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let toasts_for_timer = toasts;
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer;
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let dismiss_id = message.id.clone();
    let mut toasts = toasts;
    rsx! {
        li { class: "toast {theme::banner(message.tone)}",
            span { "{message.tone.icon()}" }
            span { "{message.text}" }
            button {
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
