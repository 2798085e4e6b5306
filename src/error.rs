use thiserror::Error;

/// Failure taxonomy for the deployer and harness.
///
/// The chain itself enforces every contract invariant; this crate only
/// distinguishes where a failure came from so callers can assert on the
/// right variant instead of catching panics.
#[derive(Debug, Error)]
pub enum LotteryError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to load contract artifact: {0}")]
    Artifact(String),

    /// The chain could not be reached, or a submitted transaction was
    /// dropped before a receipt arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The node or the contract rejected the transaction (revert,
    /// insufficient funds, insufficient gas).
    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("deployment failed: {0}")]
    Deployment(String),
}

impl LotteryError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
