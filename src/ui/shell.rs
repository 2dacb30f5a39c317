use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme::{self, Tone};
use crate::ui::components::status_banner::StatusBanner;
use cow_marketplace::domain::Session;
use cow_marketplace::infra::status::NetworkStatus;
use cow_marketplace::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let session = use_context::<Signal<Session>>();
    let network = use_context::<Signal<Option<NetworkStatus>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let wallet = session.with(|s| s.wallet().map(|w| w.as_str().to_string()));
    let (tone, connection) = match network() {
        None => (Tone::Info, "Checking Sepolia connection…".to_string()),
        Some(status) if status.liveness.is_connected() => {
            (Tone::Success, format!("Connected via {}", status.endpoint_host))
        }
        Some(_) => (Tone::Error, "Failed to connect to Ethereum".to_string()),
    };

    rsx! {
        div { class: "app",
            header { class: "header",
                div {
                    h1 { "🐄 {APP_NAME}" }
                    div { class: "subtitle", "Buy, Sell, and Forecast" }
                }
                nav { class: "nav",
                    NavButton { active: matches!(current_route, Route::Marketplace {}), onclick: move |_| { nav.push(Route::Marketplace {}); }, label: "🛒 Buy & Sell" }
                    NavButton { active: matches!(current_route, Route::Farms {}), onclick: move |_| { nav.push(Route::Farms {}); }, label: "🏠 Farms" }
                    NavButton { active: matches!(current_route, Route::Forecast {}), onclick: move |_| { nav.push(Route::Forecast {}); }, label: "📊 Forecast" }
                    NavButton { active: matches!(current_route, Route::Network {}), onclick: move |_| { nav.push(Route::Network {}); }, label: "🔗 Network" }
                }
                div { class: "subtitle",
                    match wallet {
                        Some(address) => rsx! { span { class: "mono", "{address}" } },
                        None => rsx! { span { "No wallet" } },
                    }
                }
            }
            main { class: "main",
                StatusBanner { tone, text: connection }
                {children}
            }
            footer { class: "footer", "{version_label()} · simulation only, no transactions are submitted" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
