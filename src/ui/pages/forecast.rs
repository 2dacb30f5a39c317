use dioxus::prelude::*;

use crate::app::SharedForecaster;
use crate::ui::{
    components::{kpi_card::KpiCard, status_banner::StatusBanner},
    theme::Tone,
};
use cow_marketplace::domain::{Catalog, CowId, Forecast, ForecastError};
use cow_marketplace::util::format::format_pkr;

#[derive(Clone, PartialEq)]
enum ForecastView {
    Idle,
    Ready { cow_id: CowId, forecast: Forecast },
    Failed(String),
}

#[component]
pub fn ForecastPage() -> Element {
    let forecaster = use_context::<SharedForecaster>();

    let catalog = Catalog::shared();
    let cow_ids: Vec<CowId> = catalog.cow_ids().collect();
    let mut selected = use_signal(|| cow_ids.first().copied());
    let mut view = use_signal(|| ForecastView::Idle);

    let on_forecast = move |_| {
        let outcome = match selected() {
            Some(cow_id) => run_forecast(&forecaster, catalog, cow_id),
            None => Err("Select a cow first.".to_string()),
        };
        match outcome {
            Ok((cow_id, forecast)) => {
                log::info!("forecast for cow #{cow_id}: {}", forecast.final_price);
                view.set(ForecastView::Ready { cow_id, forecast });
            }
            Err(message) => {
                log::warn!("{message}");
                view.set(ForecastView::Failed(message));
            }
        }
    };

    let selected_label = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        section { class: "panel",
            h2 { "📊 Monthly Cow Price Forecast" }
            p { class: "hint", "Placeholder model: trained on a single reference sale, then adjusted for the monthly change and government price control." }
            div { class: "row",
                label { "Select Your Cow ID" }
                select {
                    class: "select",
                    value: "{selected_label}",
                    onchange: move |evt| {
                        selected.set(evt.value().parse::<CowId>().ok());
                        view.set(ForecastView::Idle);
                    },
                    for id in cow_ids.iter() {
                        option { value: "{id}", "{id}" }
                    }
                }
                button { class: "btn-primary", onclick: on_forecast, "📈 Show Forecasted Prices" }
            }
            div { class: "row",
                match view() {
                    ForecastView::Idle => rsx! { Fragment {} },
                    ForecastView::Ready { cow_id, forecast } => rsx! {
                        StatusBanner {
                            tone: Tone::Success,
                            text: format!(
                                "Forecasted Monthly Price for #{cow_id}: {} (Gov Control Adjusted)",
                                format_pkr(forecast.final_price)
                            ),
                        }
                    },
                    ForecastView::Failed(message) => rsx! {
                        StatusBanner { tone: Tone::Error, text: message }
                    },
                }
            }
        }

        if let ForecastView::Ready { forecast, .. } = view() {
            div { class: "kpis",
                KpiCard {
                    title: "Model estimate".to_string(),
                    value: format_pkr(forecast.base_price.trunc() as i64),
                    description: Some("raw regressor output".to_string()),
                }
                KpiCard {
                    title: "Monthly change".to_string(),
                    value: format_pkr(forecast.seasonal_change as i64),
                    description: None,
                }
                KpiCard {
                    title: "Gov control".to_string(),
                    value: format_pkr(forecast.government_adjustment as i64),
                    description: None,
                }
            }
        }
    }
}

fn run_forecast(
    forecaster: &SharedForecaster,
    catalog: &Catalog,
    cow_id: CowId,
) -> Result<(CowId, Forecast), String> {
    let cow = catalog.cow_by_id(cow_id).map_err(|err| err.to_string())?;
    let model = match &*forecaster.0 {
        Ok(model) => model,
        Err(err) => return Err(forecast_error_message(err)),
    };
    model
        .forecast(cow)
        .map(|forecast| (cow.id, forecast))
        .map_err(|err| forecast_error_message(&err))
}

fn forecast_error_message(err: &ForecastError) -> String {
    format!("Forecasting error: {err}")
}
