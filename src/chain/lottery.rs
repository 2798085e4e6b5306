use ethers::contract::ContractError;
use ethers::prelude::*;
use std::sync::Arc;

use crate::error::LotteryError;

abigen!(
    LotteryContract,
    r#"[
      {
        "type": "function",
        "name": "enter",
        "stateMutability": "payable",
        "inputs": [],
        "outputs": []
      },
      {
        "type": "function",
        "name": "getPlayers",
        "stateMutability": "view",
        "inputs": [],
        "outputs": [{"name": "", "type": "address[]"}]
      },
      {
        "type": "function",
        "name": "pickWinner",
        "stateMutability": "nonpayable",
        "inputs": [],
        "outputs": []
      },
      {
        "type": "function",
        "name": "manager",
        "stateMutability": "view",
        "inputs": [],
        "outputs": [{"name": "", "type": "address"}]
      }
    ]"#
);

/// Handle to a deployed Lottery instance: its address plus the bound
/// method set. The sending account is whatever signs for the middleware
/// the handle is connected to.
pub struct Lottery<M> {
    inner: LotteryContract<M>,
}

impl<M: Middleware + 'static> Lottery<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self {
            inner: LotteryContract::new(address, client),
        }
    }

    pub fn address(&self) -> Address {
        self.inner.address()
    }

    /// Rebind the handle to another client, e.g. to send from a different
    /// account. The on-chain instance is the same.
    pub fn connect<N: Middleware + 'static>(&self, client: Arc<N>) -> Lottery<N> {
        Lottery::new(self.address(), client)
    }

    /// Join the lottery with an attached stake. The contract enforces the
    /// minimum; a violation comes back as `LotteryError::Rejected`.
    pub async fn enter(&self, value: U256) -> Result<TransactionReceipt, LotteryError> {
        let call = self.inner.enter().value(value);
        send_and_confirm(call).await
    }

    /// Ordered list of entrants, oldest first.
    pub async fn players(&self) -> Result<Vec<Address>, LotteryError> {
        self.inner.get_players().call().await.map_err(classify)
    }

    /// Account that deployed the contract.
    pub async fn manager(&self) -> Result<Address, LotteryError> {
        self.inner.manager().call().await.map_err(classify)
    }

    /// Pay out the pot to a player and clear the entrant list. The
    /// contract restricts this to the manager account.
    pub async fn pick_winner(&self) -> Result<TransactionReceipt, LotteryError> {
        send_and_confirm(self.inner.pick_winner()).await
    }
}

async fn send_and_confirm<M: Middleware + 'static>(
    call: ContractCall<M, ()>,
) -> Result<TransactionReceipt, LotteryError> {
    let pending = call.send().await.map_err(classify)?;
    let receipt = pending
        .await
        .map_err(|e| LotteryError::Network(e.to_string()))?;
    receipt.ok_or_else(|| LotteryError::Network("transaction dropped without a receipt".to_string()))
}

/// Split SDK failures into "the contract said no" and "the chain is
/// unreachable". Reverts show up either as an explicit revert payload or,
/// when rejected at gas estimation, as a provider error mentioning the
/// revert.
fn classify<M: Middleware>(err: ContractError<M>) -> LotteryError {
    if err.as_revert().is_some() {
        return LotteryError::Rejected(err.to_string());
    }
    let message = err.to_string();
    if message.contains("revert") || message.contains("insufficient funds") {
        LotteryError::Rejected(message)
    } else {
        LotteryError::Network(message)
    }
}
