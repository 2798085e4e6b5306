use std::fs;
use std::path::Path;

use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LotteryError;

/// Raw descriptor as written by the external compilation step.
///
/// Two on-disk shapes are accepted:
/// - truffle/solc-js style: `{ "interface": "<stringified ABI>", "bytecode": "60..." }`
/// - combined-json style:   `{ "abi": [...], "bytecode": "0x60..." }`
#[derive(Debug, Deserialize)]
struct RawArtifact {
    #[serde(alias = "abi")]
    interface: Value,
    bytecode: String,
}

/// Compiled contract descriptor: interface schema + creation bytecode.
/// Produced by an external compile step and treated as an opaque input.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: Abi,
    pub bytecode: Bytes,
    /// Canonical JSON rendering of the interface schema, kept around so
    /// the deployer can print it for operator visibility.
    pub interface: String,
}

impl ContractArtifact {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LotteryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            LotteryError::Artifact(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, LotteryError> {
        let raw: RawArtifact = serde_json::from_str(raw)
            .map_err(|e| LotteryError::Artifact(format!("malformed descriptor: {}", e)))?;

        let interface = match &raw.interface {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let abi: Abi = serde_json::from_str(&interface)
            .map_err(|e| LotteryError::Artifact(format!("invalid interface schema: {}", e)))?;

        let hex_body = raw.bytecode.trim().trim_start_matches("0x");
        let bytecode = hex::decode(hex_body)
            .map_err(|e| LotteryError::Artifact(format!("invalid bytecode hex: {}", e)))?;
        if bytecode.is_empty() {
            return Err(LotteryError::Artifact("empty bytecode".to_string()));
        }

        Ok(ContractArtifact {
            abi,
            bytecode: Bytes::from(bytecode),
            interface,
        })
    }
}
