use ethers::prelude::*;
use ethers::signers::coins_bip39::English;
use ethers::signers::MnemonicBuilder;
use std::sync::Arc;

use crate::error::LotteryError;

/// Wallet-backed client used for every state-changing call.
pub type WalletClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub fn create_http_provider(rpc_url: &str) -> Result<Arc<Provider<Http>>, LotteryError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| LotteryError::Network(format!("invalid RPC endpoint {}: {}", rpc_url, e)))?;
    // Could add middleware for retries, timeouts, etc.
    Ok(Arc::new(provider))
}

/// Derive the signing account from a recovery phrase and bind it to the
/// provider's chain. The returned client owns the connection for one run;
/// dropping it releases the wallet.
pub async fn create_wallet_client(
    provider: Arc<Provider<Http>>,
    mnemonic: &str,
) -> Result<Arc<WalletClient>, LotteryError> {
    let wallet = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .build()
        .map_err(|e| LotteryError::Config(format!("invalid mnemonic: {}", e)))?;

    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| LotteryError::Network(format!("cannot query chain id: {}", e)))?;
    let wallet = wallet.with_chain_id(chain_id.as_u64());

    Ok(Arc::new(SignerMiddleware::new(
        provider.as_ref().clone(),
        wallet,
    )))
}
