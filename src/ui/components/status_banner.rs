use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

#[component]
pub fn StatusBanner(tone: Tone, text: String) -> Element {
    rsx! {
        div { class: "{theme::banner(tone)}", "{tone.icon()} {text}" }
    }
}

#[component]
pub fn Badge(tone: Tone, label: String) -> Element {
    rsx! {
        span { class: "{theme::badge(tone)}", "{label}" }
    }
}
