pub mod client;
pub mod gas;
pub mod messages;
pub mod proto;
pub mod tx_builder;
pub mod wallet;

pub use client::{ClientConfig, GrpcClient, StakingQuery, TxClient};
pub use gas::{GasEstimate, GasSettings};
pub use messages::TxKind;
pub use tx_builder::TxBuilder;
pub use wallet::{CosmosWallet, TransactionSigner};
