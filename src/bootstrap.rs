use std::sync::Arc;

use crate::artifact::ContractArtifact;
use crate::chain::providers::{self, WalletClient};
use crate::config::Config;
use crate::error::LotteryError;

/// Everything one deployer run needs: the compiled descriptor and a
/// wallet-backed client. Built once at run start and dropped at run end;
/// nothing here is global.
pub struct RunContext {
    pub client: Arc<WalletClient>,
    pub artifact: ContractArtifact,
    pub deploy_gas_limit: u64,
}

impl RunContext {
    pub async fn new(config: &Config) -> Result<Self, LotteryError> {
        let artifact = ContractArtifact::from_file(&config.artifact_path)?;
        let provider = providers::create_http_provider(&config.rpc_url)?;
        let client = providers::create_wallet_client(provider, &config.mnemonic).await?;

        Ok(RunContext {
            client,
            artifact,
            deploy_gas_limit: config.deploy_gas_limit,
        })
    }
}
