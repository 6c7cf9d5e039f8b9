use thiserror::Error;

/// Fatal configuration and input errors. Per-transaction failures are not
/// represented here: they are recorded in the outcome log and the run goes on.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("minimum amount must be at least 1 (got {0})")]
    AmountTooSmall(u64),

    #[error("maximum amount ({max}) must be greater than minimum ({min})")]
    InvalidRange { min: u64, max: u64 },

    #[error("gas multiplier must be positive (got {0})")]
    InvalidGasMultiplier(f64),

    #[error("fee rate must be positive (got {0})")]
    InvalidFeeRate(f64),

    #[error("no mnemonic found: set the {0} environment variable")]
    MissingMnemonic(&'static str),

    #[error("work list file not found: {0}")]
    WorkListMissing(String),

    #[error("work list {0} contains no usable entries")]
    WorkListEmpty(String),
}
