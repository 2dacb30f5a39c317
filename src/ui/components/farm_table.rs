use dioxus::prelude::*;

use cow_marketplace::domain::Farm;
use cow_marketplace::util::format::group_thousands;

#[component]
pub fn FarmTable(farms: Vec<Farm>, selected: Option<String>, on_select: EventHandler<String>) -> Element {
    let rows = farms
        .into_iter()
        .map(|farm| {
            let is_selected = selected.as_deref() == Some(farm.name.as_str());
            (farm, is_selected)
        })
        .collect::<Vec<_>>();

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Farm Name" }
                    th { "Location" }
                    th { "Monthly Fee (PKR)" }
                    th { "Vacant Slots" }
                }
            }
            tbody {
                for (farm, is_selected) in rows {
                    FarmRowView { key: "{farm.name}", farm, selected: is_selected, on_select }
                }
            }
        }
    }
}

#[component]
fn FarmRowView(farm: Farm, selected: bool, on_select: EventHandler<String>) -> Element {
    let row_class = if selected { "selected" } else { "" };
    let name = farm.name.clone();
    rsx! {
        tr {
            class: row_class,
            onclick: move |_| on_select.call(name.clone()),
            td { "{farm.name}" }
            td { "{farm.location}" }
            td { {group_thousands(farm.monthly_fee_pkr as i64)} }
            td { "{farm.vacant_slots}" }
        }
    }
}
