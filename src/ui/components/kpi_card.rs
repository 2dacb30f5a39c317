use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div { class: "panel kpi",
            div { class: "label", "{title}" }
            div { class: "value", "{value}" }
            if let Some(desc) = description {
                div { class: "desc", "{desc}" }
            }
        }
    }
}
