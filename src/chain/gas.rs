/// Gas estimation with static fallback heuristics.
///
/// Estimation never fails: when live simulation is unavailable the estimate
/// falls back to a fixed table keyed by message type, and the caller only
/// sees a warning in the log.
use crate::chain::client::TxClient;
use crate::chain::messages::{
    MSG_DELEGATE_TYPE_URL, MSG_SEND_TYPE_URL, MSG_WITHDRAW_REWARD_TYPE_URL,
};
use crate::chain::proto::Any;

/// Fallback gas for a single token transfer.
const DEFAULT_GAS_SEND: u64 = 70_000;
/// Fallback gas for a single delegation.
const DEFAULT_GAS_DELEGATE: u64 = 140_000;
/// Fallback gas per reward-withdrawal message in a batch.
const DEFAULT_GAS_WITHDRAW_PER_MSG: u64 = 60_000;
/// Fallback for anything else, including an empty message set.
const DEFAULT_GAS_OTHER: u64 = 100_000;

/// Tunables applied on top of the raw gas figure.
#[derive(Debug, Clone, Copy)]
pub struct GasSettings {
    /// Safety multiplier applied to simulated or fallback gas.
    pub multiplier: f64,
    /// Fee per gas unit in base denom (fee = ceil(gas_limit * fee_rate)).
    pub fee_rate: f64,
}

impl Default for GasSettings {
    fn default() -> Self {
        Self {
            multiplier: 1.5,
            fee_rate: 0.025,
        }
    }
}

/// A usable gas limit and fee for one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas_used: u64,
    pub gas_limit: u64,
    pub fee_amount: u64,
}

impl GasEstimate {
    /// Apply the limit and fee formulas to a raw gas figure.
    fn from_gas_used(gas_used: u64, settings: &GasSettings) -> Self {
        let gas_limit = (gas_used as f64 * settings.multiplier).ceil() as u64;
        let fee_amount = (gas_limit as f64 * settings.fee_rate).ceil() as u64;
        Self {
            gas_used,
            gas_limit,
            fee_amount,
        }
    }
}

/// Static default keyed by the first message's type, matching observed gas
/// usage on the target chain.
fn fallback_gas(messages: &[Any]) -> u64 {
    match messages.first() {
        Some(first) if first.type_url == MSG_SEND_TYPE_URL => DEFAULT_GAS_SEND,
        Some(first) if first.type_url == MSG_DELEGATE_TYPE_URL => DEFAULT_GAS_DELEGATE,
        Some(first) if first.type_url == MSG_WITHDRAW_REWARD_TYPE_URL => {
            DEFAULT_GAS_WITHDRAW_PER_MSG * messages.len() as u64
        }
        _ => DEFAULT_GAS_OTHER,
    }
}

/// Estimate gas and fee for the pending messages.
///
/// Tries a live simulation first; on any failure (network error, node
/// rejection) the static table takes over. Always returns a usable estimate.
pub async fn estimate_fee<C: TxClient + ?Sized>(
    client: &C,
    sender: &str,
    messages: &[Any],
    settings: &GasSettings,
) -> GasEstimate {
    match client.simulate(sender, messages, "").await {
        Ok(gas_used) => GasEstimate::from_gas_used(gas_used, settings),
        Err(e) => {
            log::warn!("Gas simulation failed, using static defaults: {}", e);
            GasEstimate::from_gas_used(fallback_gas(messages), settings)
        }
    }
}
