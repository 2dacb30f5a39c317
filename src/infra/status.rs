//! Startup checks shown on the network panel.

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::abi::{load_interface_descriptor, ContractBinding, ContractError, DescriptorLoadError};
use super::rpc;
use crate::util::config::AppConfig;

#[derive(Debug, Error)]
pub enum ContractSetupError {
    #[error("Error loading ABI: {0}")]
    Descriptor(#[from] DescriptorLoadError),
    #[error("Error creating contract instance: {0}")]
    Contract(#[from] ContractError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Liveness {
    Connected { client_version: String },
    Unavailable { reason: String },
}

impl Liveness {
    pub fn is_connected(&self) -> bool {
        matches!(self, Liveness::Connected { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkStatus {
    pub endpoint_host: String,
    pub liveness: Liveness,
    /// Descriptor and binding, or the message that halts the contract panel.
    pub contract: Result<ContractBinding, String>,
    pub checked_at: String,
}

pub fn bind_contract(config: &AppConfig) -> Result<ContractBinding, ContractSetupError> {
    let descriptor = load_interface_descriptor(&config.abi_path)?;
    Ok(ContractBinding::new(&config.contract_address, descriptor)?)
}

pub async fn run_startup_checks(config: &AppConfig) -> NetworkStatus {
    let liveness = match rpc::probe(&config.rpc_url, config.rpc_timeout()).await {
        Ok(client_version) => Liveness::Connected { client_version },
        Err(err) => Liveness::Unavailable {
            reason: err.to_string(),
        },
    };

    let contract = bind_contract(config).map_err(|err| {
        log::error!("{err}");
        err.to_string()
    });

    NetworkStatus {
        endpoint_host: endpoint_host(&config.rpc_url),
        liveness,
        contract,
        checked_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    }
}

fn endpoint_host(raw: &str) -> String {
    url::Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "invalid endpoint".to_string())
}
