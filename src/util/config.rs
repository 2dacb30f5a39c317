use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::infra::forest::DEFAULT_TREES;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CowMarketplace";
const APP_NAME: &str = "CowMarketplace";

pub const DEFAULT_RPC_URL: &str = "https://sepolia.infura.io/v3/40915988fef54b268deda92af3e2ba66";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x0C5996E38D7B3b00e15F916AafF7Ef987a1A90f1";
pub const DEFAULT_ABI_PATH: &str = "CowFarm.json";

/// Runtime settings. Every field falls back to its default when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rpc_url: String,
    pub rpc_timeout_secs: u64,
    pub abi_path: PathBuf,
    pub contract_address: String,
    /// Seed for the forecast forest, so repeated runs agree.
    pub forecast_seed: u64,
    pub forecast_trees: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            rpc_timeout_secs: 10,
            abi_path: PathBuf::from(DEFAULT_ABI_PATH),
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            forecast_seed: 0,
            forecast_trees: DEFAULT_TREES,
        }
    }
}

impl AppConfig {
    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs.max(1))
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Loads the user config, falling back to defaults when it is missing or broken.
pub fn load_config() -> AppConfig {
    let Some(path) = config_file() else {
        log::warn!("no config directory available; using defaults");
        return AppConfig::default();
    };
    match load_or_init_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring config at {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

/// Reads the config at `path`, writing the defaults there on first run so
/// they can be edited.
pub fn load_or_init_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if let Some(config) = load_config_from(path)? {
        log::info!("loaded config from {}", path.display());
        return Ok(config);
    }
    let config = AppConfig::default();
    save_config_to(path, &config)?;
    log::info!("wrote default config to {}", path.display());
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_from(&dir.path().join("config.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"forecast_seed": 42, "rpc_timeout_secs": 0}"#).unwrap();

        let config = load_config_from(&path).unwrap().unwrap();
        assert_eq!(config.forecast_seed, 42);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.rpc_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn saved_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            abi_path: PathBuf::from("/opt/cowfarm/CowFarm.json"),
            forecast_trees: 25,
            ..AppConfig::default()
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CowMarketplace").join("config.json");

        let config = load_or_init_config(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(load_config_from(&path).unwrap(), Some(AppConfig::default()));
    }

    #[test]
    fn existing_config_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"forecast_trees": 12}"#).unwrap();

        let config = load_or_init_config(&path).unwrap();
        assert_eq!(config.forecast_trees, 12);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"forecast_trees": 12}"#);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "rpc_url = 'toml?'").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Serde(_))));
    }
}
