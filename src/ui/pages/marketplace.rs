use dioxus::prelude::*;

use crate::ui::{
    components::{
        cow_table::CowTable,
        status_banner::StatusBanner,
        toast::{push_toast, ToastMessage},
    },
    theme::Tone,
};
use cow_marketplace::domain::{Catalog, CowId, Session, SessionError};

#[component]
pub fn MarketplacePage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let catalog = Catalog::shared();
    let cows = catalog.list_cows().to_vec();
    let first_id = cows.first().map(|cow| cow.id);

    let mut wallet_input = use_signal(|| {
        session.with(|s| s.wallet().map(|w| w.as_str().to_string()).unwrap_or_default())
    });
    let mut selected = use_signal(|| first_id);

    let wallet_message = session.with(|s| {
        s.wallet()
            .map(|w| (Tone::Success, format!("Wallet Connected: {}", w.as_str())))
    });
    let (wallet_tone, wallet_text) = wallet_message.unwrap_or((
        Tone::Warning,
        "Please enter your MetaMask wallet address manually.".to_string(),
    ));

    let on_wallet_input = move |evt: FormEvent| {
        let value = evt.value();
        wallet_input.set(value.clone());
        match session.with_mut(|s| s.connect_wallet(&value).map(|_| ())) {
            Ok(()) => {}
            Err(SessionError::EmptyWallet) => log::debug!("wallet field cleared"),
            Err(err) => push_toast(toasts, Tone::Error, err.to_string()),
        }
    };

    let on_buy = move |_| {
        let Some(cow_id) = selected() else {
            push_toast(toasts, Tone::Warning, "Select a cow first.");
            return;
        };
        match session.with_mut(|s| s.buy_cow(catalog, cow_id)) {
            Ok(activity) => push_toast(toasts, Tone::Success, activity.message()),
            Err(err) => push_toast(toasts, Tone::Error, err.to_string()),
        }
    };

    let activity = session.with(|s| {
        s.activity()
            .iter()
            .map(|entry| (entry.message(), entry.detail()))
            .collect::<Vec<_>>()
    });
    let selected_label = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        section { class: "panel",
            h2 { "🔗 Enter Your MetaMask Wallet Address" }
            div { class: "row",
                input {
                    class: "input",
                    placeholder: "0x...",
                    value: wallet_input(),
                    oninput: on_wallet_input,
                }
            }
            div { class: "row",
                StatusBanner { tone: wallet_tone, text: wallet_text }
            }
        }

        section { class: "panel",
            h2 { "🛒 Buy & Sell Cows" }
            p { class: "hint", "Check cow details below, validated with Animal Passport and IoT Tag health metrics." }
            CowTable {
                cows: cows.clone(),
                selected_id: selected(),
                on_select: move |id: CowId| selected.set(Some(id)),
            }
            div { class: "row",
                label { "Select Cow ID to Buy" }
                select {
                    class: "select",
                    value: "{selected_label}",
                    onchange: move |evt| selected.set(evt.value().parse::<CowId>().ok()),
                    for cow in cows.iter() {
                        option { value: "{cow.id}", "{cow.id}" }
                    }
                }
                button { class: "btn-primary", onclick: on_buy, "🐄 Buy This Cow" }
            }
        }

        if !activity.is_empty() {
            section { class: "panel",
                h2 { "Session Activity" }
                ul { class: "activity",
                    for (message, detail) in activity {
                        li {
                            "{message}"
                            if let Some(detail) = detail {
                                span { class: "subtitle", " ({detail})" }
                            }
                        }
                    }
                }
            }
        }
    }
}
