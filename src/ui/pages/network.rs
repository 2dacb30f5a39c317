use dioxus::prelude::*;

use crate::ui::{
    components::{
        kpi_card::KpiCard,
        status_banner::{Badge, StatusBanner},
    },
    theme::Tone,
};
use cow_marketplace::infra::status::{Liveness, NetworkStatus};
use cow_marketplace::util::config::AppConfig;

#[component]
pub fn NetworkPage() -> Element {
    let config = use_context::<AppConfig>();
    let network = use_context::<Signal<Option<NetworkStatus>>>();

    let Some(status) = network() else {
        return rsx! {
            section { class: "panel",
                h2 { "🔗 Sepolia Network" }
                StatusBanner { tone: Tone::Info, text: format!("Probing {}…", config.rpc_url) }
            }
        };
    };

    let (liveness_tone, liveness_label, liveness_detail) = match &status.liveness {
        Liveness::Connected { client_version } => {
            (Tone::Success, "Connected", client_version.clone())
        }
        Liveness::Unavailable { reason } => (Tone::Error, "Unavailable", reason.clone()),
    };

    rsx! {
        div { class: "kpis",
            KpiCard {
                title: "Endpoint".to_string(),
                value: status.endpoint_host.clone(),
                description: Some(format!("timeout {}s", config.rpc_timeout().as_secs())),
            }
            KpiCard {
                title: "Node".to_string(),
                value: liveness_label.to_string(),
                description: Some(liveness_detail),
            }
            KpiCard {
                title: "Checked at".to_string(),
                value: status.checked_at.clone(),
                description: None,
            }
        }

        section { class: "panel",
            h2 { "🔗 Sepolia Network" }
            div { class: "row",
                Badge { tone: liveness_tone, label: liveness_label.to_string() }
            }
        }

        section { class: "panel",
            h2 { "📜 CowFarm Contract" }
            match status.contract {
                Ok(binding) => {
                    let address = binding.address().to_string();
                    let function_count = binding.descriptor().functions().count();
                    let event_count = binding.descriptor().events().count();
                    rsx! {
                        div { class: "row",
                            span { "Address " }
                            span { class: "mono", "{address}" }
                        }
                        p { class: "hint",
                            "{function_count} functions, {event_count} events. Read-only view; nothing is invoked."
                        }
                        ul { class: "activity",
                            for signature in binding.function_signatures() {
                                li { class: "mono", "{signature}" }
                            }
                        }
                    }
                }
                Err(message) => rsx! {
                    StatusBanner { tone: Tone::Error, text: message }
                },
            }
        }
    }
}
