use std::rc::Rc;

use dioxus::prelude::*;

use crate::ui::{
    assets,
    components::toast::{push_toast, Toast, ToastMessage},
    pages::{FarmsPage, ForecastPage, MarketplacePage, NetworkPage},
    shell::Shell,
    theme::Tone,
};
use cow_marketplace::{
    domain::{ForecastError, PriceForecaster, Session},
    infra::{
        forest::{trained_forecaster, RandomForestEstimator},
        status::{run_startup_checks, NetworkStatus},
    },
    util::config::{load_config, AppConfig},
};

/// Forecaster fitted once at startup, or the reason it could not be.
#[derive(Clone)]
pub struct SharedForecaster(pub Rc<Result<PriceForecaster<RandomForestEstimator>, ForecastError>>);

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Marketplace {},
    #[route("/farms")]
    Farms {},
    #[route("/forecast")]
    Forecast {},
    #[route("/network")]
    Network {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.clone());

    let session = use_signal(Session::new);
    use_context_provider(|| session);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let network = use_signal(|| None::<NetworkStatus>);
    use_context_provider(|| network);

    use_context_provider({
        let config = config.clone();
        move || {
            let forecaster = trained_forecaster(&config);
            if let Err(err) = &forecaster {
                log::error!("forecast model unavailable: {err}");
            }
            SharedForecaster(Rc::new(forecaster))
        }
    });

    let _startup = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { check_network(config, network, toasts).await }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn check_network(
    config: AppConfig,
    mut network: Signal<Option<NetworkStatus>>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    log::info!("running startup checks against {}", config.rpc_url);
    let status = run_startup_checks(&config).await;

    if status.liveness.is_connected() {
        push_toast(toasts, Tone::Success, "Connected to Sepolia Testnet");
    } else {
        push_toast(toasts, Tone::Error, "Failed to connect to Ethereum");
    }
    if let Err(message) = &status.contract {
        push_toast(toasts, Tone::Error, message.clone());
    }

    network.set(Some(status));
}

#[component]
pub fn Marketplace() -> Element {
    rsx! { Shell { MarketplacePage {} } }
}

#[component]
pub fn Farms() -> Element {
    rsx! { Shell { FarmsPage {} } }
}

#[component]
pub fn Forecast() -> Element {
    rsx! { Shell { ForecastPage {} } }
}

#[component]
pub fn Network() -> Element {
    rsx! { Shell { NetworkPage {} } }
}
