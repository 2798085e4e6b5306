use std::env;

use crate::error::LotteryError;

pub const DEFAULT_ARTIFACT_PATH: &str = "contracts/Lottery.json";
pub const DEFAULT_DEPLOY_GAS_LIMIT: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-RPC endpoint of the target network.
    pub rpc_url: String,
    /// BIP-39 recovery phrase for the deploying wallet. Sourced from the
    /// environment only; never committed alongside the code.
    pub mnemonic: String,
    /// Path to the compiled contract descriptor (interface + bytecode).
    pub artifact_path: String,
    /// Gas budget for the deployment transaction.
    pub deploy_gas_limit: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, LotteryError> {
        // Load configuration files (secrets first, then public config)
        dotenv::from_filename("secrets.env").ok();
        dotenv::dotenv().ok();

        Ok(Config {
            rpc_url: env::var("LOTTERY_RPC_URL")
                .map_err(|_| LotteryError::Config("LOTTERY_RPC_URL must be set".to_string()))?,
            mnemonic: env::var("LOTTERY_MNEMONIC")
                .map_err(|_| LotteryError::Config("LOTTERY_MNEMONIC must be set".to_string()))?,
            artifact_path: env::var("LOTTERY_ARTIFACT")
                .unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string()),
            deploy_gas_limit: env::var("DEPLOY_GAS_LIMIT")
                .unwrap_or_else(|_| DEFAULT_DEPLOY_GAS_LIMIT.to_string())
                .parse()
                .map_err(|_| {
                    LotteryError::Config("DEPLOY_GAS_LIMIT must be an integer".to_string())
                })?,
        })
    }
}
