use dioxus::prelude::*;

use super::status_banner::Badge;
use crate::ui::theme::Tone;
use cow_marketplace::domain::{Cow, CowId};
use cow_marketplace::util::format::group_thousands;

#[component]
pub fn CowTable(cows: Vec<Cow>, selected_id: Option<CowId>, on_select: EventHandler<CowId>) -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Cow ID" }
                    th { "Breed" }
                    th { "Age (mo)" }
                    th { "Weight (kg)" }
                    th { "Health Score" }
                    th { "IoT Verified" }
                    th { "Animal Passport" }
                    th { "Current Price (PKR)" }
                }
            }
            tbody {
                for cow in cows {
                    CowRowView {
                        key: "{cow.id}",
                        selected: selected_id == Some(cow.id),
                        cow,
                        on_select,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CowRowViewProps {
    cow: Cow,
    selected: bool,
    on_select: EventHandler<CowId>,
}

#[component]
fn CowRowView(props: CowRowViewProps) -> Element {
    let cow = props.cow;
    let id = cow.id;
    let (passport_tone, passport_label) = if cow.passport_available {
        (Tone::Success, "Available")
    } else {
        (Tone::Error, "Missing")
    };
    let iot = if cow.iot_verified { "✅" } else { "No" };
    let row_class = if props.selected { "selected" } else { "" };

    rsx! {
        tr {
            class: row_class,
            onclick: move |_| props.on_select.call(id),
            td { class: "mono", "{cow.id}" }
            td { "{cow.breed}" }
            td { "{cow.age_months}" }
            td { {format!("{:.0}", cow.weight_kg)} }
            td { {format!("{:.1}", cow.health_score)} }
            td { "{iot}" }
            td { Badge { tone: passport_tone, label: passport_label.to_string() } }
            td { {group_thousands(cow.price_pkr as i64)} }
        }
    }
}
