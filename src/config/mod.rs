use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::chain::client::ClientConfig;
use crate::chain::gas::GasSettings;
use crate::dispatch::AmountRange;
use crate::error::BotError;

/// Environment variable the wallet mnemonic is read from. It is never
/// written to or read from the config file.
pub const MNEMONIC_ENV: &str = "BOT_MNEMONIC";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub grpc_endpoint: String,
    pub chain_id: String,
    pub address_prefix: String,
    pub denom: String,
    /// Fee per unit of gas, in base denom units.
    #[serde(default = "default_fee_rate")]
    pub fee_rate: f64,
    pub explorer_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    // Note: mnemonic is provided via the BOT_MNEMONIC environment variable.
    // Never store keys in config files!
    pub min_amount: u64,
    pub max_amount: u64,
    pub delay_ms: u64,
    pub gas_multiplier: f64,
    #[serde(default = "default_max_claim_per_tx")]
    pub max_claim_per_tx: usize,
    #[serde(default)]
    pub memo: String,
}

fn default_fee_rate() -> f64 {
    0.025
}

fn default_max_claim_per_tx() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chain: ChainConfig {
                grpc_endpoint: "https://grpc-testnet.empe.io:443".to_string(),
                chain_id: "empe-testnet-2".to_string(),
                address_prefix: "empe".to_string(),
                denom: "uempe".to_string(),
                fee_rate: default_fee_rate(),
                explorer_url: "https://explorer-testnet.empe.io".to_string(),
            },
            bot: BotConfig {
                min_amount: 2,
                max_amount: 129,
                delay_ms: 5000,
                gas_multiplier: 1.5,
                max_claim_per_tx: default_max_claim_per_tx(),
                memo: String::new(),
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), BotError> {
        self.amount_range()?;
        if self.bot.gas_multiplier <= 0.0 {
            return Err(BotError::InvalidGasMultiplier(self.bot.gas_multiplier));
        }
        if self.chain.fee_rate <= 0.0 {
            return Err(BotError::InvalidFeeRate(self.chain.fee_rate));
        }
        Ok(())
    }

    pub fn amount_range(&self) -> Result<AmountRange, BotError> {
        AmountRange::new(self.bot.min_amount, self.bot.max_amount)
    }

    pub fn gas_settings(&self) -> GasSettings {
        GasSettings {
            multiplier: self.bot.gas_multiplier,
            fee_rate: self.chain.fee_rate,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            grpc_endpoint: self.chain.grpc_endpoint.clone(),
            chain_id: self.chain.chain_id.clone(),
            ..ClientConfig::default()
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.bot.delay_ms)
    }

    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!(
            "{}/transactions/{}",
            self.chain.explorer_url.trim_end_matches('/'),
            tx_hash
        )
    }
}

/// Read the mnemonic from the environment.
pub fn mnemonic_from_env() -> Result<String, BotError> {
    match std::env::var(MNEMONIC_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(BotError::MissingMnemonic(MNEMONIC_ENV)),
    }
}
