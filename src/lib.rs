// Library exports for empe_bot

pub mod chain;
pub mod config;
pub mod dispatch;
pub mod error;

// Re-export main types for convenience
pub use chain::{CosmosWallet, GrpcClient, TxKind};
pub use config::Config;
pub use dispatch::{AmountRange, DispatchConfig, DispatchLoop, WorkItem};
pub use error::BotError;
