use dioxus::prelude::*;

use crate::ui::{
    components::{
        farm_table::FarmTable,
        kpi_card::KpiCard,
        toast::{push_toast, ToastMessage},
    },
    theme::Tone,
};
use cow_marketplace::domain::{Activity, Catalog, Session};
use cow_marketplace::util::format::format_pkr;

#[component]
pub fn FarmsPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let catalog = Catalog::shared();
    let farms = catalog.list_farms().to_vec();
    let mut selected = use_signal(|| farms.first().map(|farm| farm.name.clone()));

    let on_store = move |_| {
        let Some(name) = selected() else {
            push_toast(toasts, Tone::Warning, "Choose a farm first.");
            return;
        };
        match session.with_mut(|s| s.store_at(catalog, &name)) {
            Ok(activity) => push_toast(toasts, Tone::Success, activity.message()),
            Err(err) => push_toast(toasts, Tone::Error, err.to_string()),
        }
    };

    let stored_fees: u64 = session.with(|s| {
        s.activity()
            .iter()
            .filter_map(|entry| match entry {
                Activity::Stored {
                    monthly_fee_pkr, ..
                } => Some(*monthly_fee_pkr),
                _ => None,
            })
            .sum()
    });
    let total_slots: u32 = farms.iter().map(|farm| farm.vacant_slots).sum();
    let selected_name = selected().unwrap_or_default();

    rsx! {
        div { class: "kpis",
            KpiCard {
                title: "Vacant slots".to_string(),
                value: total_slots.to_string(),
                description: Some(format!("across {} farms", farms.len())),
            }
            KpiCard {
                title: "Monthly fees this session".to_string(),
                value: format_pkr(stored_fees as i64),
                description: None,
            }
        }

        section { class: "panel",
            h2 { "🏠 Choose a Farm to Store Your Cow" }
            FarmTable {
                farms: farms.clone(),
                selected: selected(),
                on_select: move |name: String| selected.set(Some(name)),
            }
            div { class: "row",
                label { "Choose a Farm" }
                select {
                    class: "select",
                    value: "{selected_name}",
                    onchange: move |evt| selected.set(Some(evt.value())),
                    for farm in farms.iter() {
                        option { value: "{farm.name}", "{farm.name}" }
                    }
                }
                button { class: "btn-primary", onclick: on_store, "📦 Store Cow at Selected Farm" }
            }
        }
    }
}
