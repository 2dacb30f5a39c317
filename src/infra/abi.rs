//! Contract-interface descriptor (ABI) loading.
//!
//! The descriptor is parsed for display only; no contract method is ever called.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("descriptor has no \"abi\" field")]
    MissingAbi,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("contract address must be 0x followed by 40 hex digits, got '{0}'")]
    InvalidAddress(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type", default = "default_entry_kind")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default)]
    pub state_mutability: Option<String>,
}

fn default_entry_kind() -> String {
    "function".to_string()
}

impl AbiEntry {
    pub fn is_function(&self) -> bool {
        self.kind == "function"
    }

    /// `name(type,type)` form used for display.
    pub fn signature(&self) -> String {
        let params = self
            .inputs
            .iter()
            .map(|param| param.kind.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({params})", self.name.as_deref().unwrap_or(""))
    }
}

#[derive(Deserialize)]
struct DescriptorFile {
    abi: Option<Vec<AbiEntry>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDescriptor {
    pub abi: Vec<AbiEntry>,
}

impl InterfaceDescriptor {
    pub fn from_json(raw: &str) -> Result<Self, DescriptorLoadError> {
        let file: DescriptorFile = serde_json::from_str(raw)?;
        let abi = file.abi.ok_or(DescriptorLoadError::MissingAbi)?;
        Ok(Self { abi })
    }

    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi.iter().filter(|entry| entry.is_function())
    }

    pub fn events(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi.iter().filter(|entry| entry.kind == "event")
    }
}

pub fn load_interface_descriptor(
    path: impl AsRef<Path>,
) -> Result<InterfaceDescriptor, DescriptorLoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DescriptorLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let descriptor = InterfaceDescriptor::from_json(&raw)?;
    log::info!(
        "loaded contract descriptor from {} ({} entries)",
        path.display(),
        descriptor.abi.len()
    );
    Ok(descriptor)
}

/// A contract address paired with its interface. Held for display; never invoked.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractBinding {
    address: String,
    descriptor: InterfaceDescriptor,
}

impl ContractBinding {
    pub fn new(address: &str, descriptor: InterfaceDescriptor) -> Result<Self, ContractError> {
        let hex = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .ok_or_else(|| ContractError::InvalidAddress(address.to_string()))?;
        if hex.len() != 40 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ContractError::InvalidAddress(address.to_string()));
        }
        Ok(Self {
            address: address.to_string(),
            descriptor,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn descriptor(&self) -> &InterfaceDescriptor {
        &self.descriptor
    }

    pub fn function_signatures(&self) -> Vec<String> {
        self.descriptor.functions().map(AbiEntry::signature).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = r#"{
        "contractName": "CowFarm",
        "abi": [
            {"type": "function", "name": "buyCow", "inputs": [{"name": "cowId", "type": "uint256"}], "outputs": [], "stateMutability": "payable"},
            {"type": "function", "name": "cowCount", "inputs": [], "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"},
            {"type": "event", "name": "CowSold", "inputs": [{"name": "cowId", "type": "uint256"}]},
            {"type": "constructor", "inputs": []}
        ]
    }"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_abi_entries() {
        let file = write_temp(SAMPLE);
        let descriptor = load_interface_descriptor(file.path()).unwrap();

        assert_eq!(descriptor.abi.len(), 4);
        let functions: Vec<_> = descriptor.functions().map(AbiEntry::signature).collect();
        assert_eq!(functions, vec!["buyCow(uint256)", "cowCount()"]);
        assert_eq!(descriptor.events().count(), 1);
        assert_eq!(
            descriptor.abi[0].state_mutability.as_deref(),
            Some("payable")
        );
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let file = write_temp("{ \"abi\": [ ");
        let err = load_interface_descriptor(file.path()).unwrap_err();
        assert!(matches!(err, DescriptorLoadError::Json(_)));
    }

    #[test]
    fn missing_abi_key_is_a_load_error() {
        let file = write_temp(r#"{"bytecode": "0x6080"}"#);
        let err = load_interface_descriptor(file.path()).unwrap_err();
        assert!(matches!(err, DescriptorLoadError::MissingAbi));
    }

    #[test]
    fn non_array_abi_is_a_load_error() {
        let err = InterfaceDescriptor::from_json(r#"{"abi": "oops"}"#).unwrap_err();
        assert!(matches!(err, DescriptorLoadError::Json(_)));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_interface_descriptor(dir.path().join("CowFarm.json")).unwrap_err();
        assert!(matches!(err, DescriptorLoadError::Io { .. }));
        assert!(err.to_string().contains("CowFarm.json"));
    }

    #[test]
    fn binding_validates_address() {
        let descriptor = InterfaceDescriptor::from_json(SAMPLE).unwrap();

        let binding =
            ContractBinding::new("0x0C5996E38D7B3b00e15F916AafF7Ef987a1A90f1", descriptor.clone())
                .unwrap();
        assert_eq!(binding.function_signatures().len(), 2);

        assert_eq!(
            ContractBinding::new("0x1234", descriptor.clone()),
            Err(ContractError::InvalidAddress("0x1234".to_string()))
        );
        assert!(ContractBinding::new(
            "0C5996E38D7B3b00e15F916AafF7Ef987a1A90f1aa",
            descriptor.clone()
        )
        .is_err());
        assert!(ContractBinding::new(
            "0xZZ5996E38D7B3b00e15F916AafF7Ef987a1A90f1",
            descriptor
        )
        .is_err());
    }
}
