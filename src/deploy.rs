use ethers::contract::ContractFactory;
use ethers::prelude::*;
use std::sync::Arc;

use crate::artifact::ContractArtifact;
use crate::chain::lottery::Lottery;
use crate::error::LotteryError;

/// Submit one deployment transaction with a fixed gas budget and return a
/// handle bound to the resulting address. The network may reject the
/// transaction (insufficient gas or funds, malformed bytecode); that is
/// surfaced as `LotteryError::Deployment`.
pub async fn deploy_lottery<M: Middleware + 'static>(
    client: Arc<M>,
    artifact: &ContractArtifact,
    gas_limit: u64,
) -> Result<Lottery<M>, LotteryError> {
    let factory = ContractFactory::new(
        artifact.abi.clone(),
        artifact.bytecode.clone(),
        client.clone(),
    );

    let mut deployer = factory
        .deploy(())
        .map_err(|e| LotteryError::Deployment(e.to_string()))?;
    deployer.tx.set_gas(U256::from(gas_limit));

    let contract = deployer
        .send()
        .await
        .map_err(|e| LotteryError::Deployment(e.to_string()))?;

    log::info!("contract deployed at {:?}", contract.address());
    Ok(Lottery::new(contract.address(), client))
}
