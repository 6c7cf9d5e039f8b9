/// Batch reward claiming: gather pending staking rewards across every
/// delegation, drop the zero lines, and withdraw the rest in capped batches.
use anyhow::Result;

use crate::chain::client::{PendingRewards, RewardLine, StakingQuery, TxClient};
use crate::chain::gas::{estimate_fee, GasSettings};
use crate::chain::messages::withdraw_reward_messages;
use crate::chain::tx_builder::fee_from_amount;

/// What a claim run amounted to.
#[derive(Debug)]
pub enum ClaimOutcome {
    /// The delegator has no delegations at all.
    NoDelegations,
    /// Delegations exist but every reward line is zero.
    NothingClaimable,
    Claimed(ClaimReport),
}

#[derive(Debug)]
pub struct ClaimReport {
    /// One hash per accepted batch.
    pub tx_hashes: Vec<String>,
    /// Amount withdrawn per validator, from the withdraw_rewards events when
    /// the chain reported them, otherwise the queried pending amount.
    pub claimed: Vec<(String, u128)>,
    pub total: u128,
    /// Raw logs of batches the chain rejected, one entry per failed batch.
    pub failures: Vec<String>,
}

pub struct RewardAggregator<'a, C: TxClient + StakingQuery + ?Sized> {
    client: &'a C,
    denom: String,
    memo: String,
    gas: GasSettings,
    /// Upper bound on withdraw messages per transaction.
    max_claim_per_tx: usize,
}

impl<'a, C: TxClient + StakingQuery + ?Sized> RewardAggregator<'a, C> {
    pub fn new(
        client: &'a C,
        denom: impl Into<String>,
        memo: impl Into<String>,
        gas: GasSettings,
        max_claim_per_tx: usize,
    ) -> Self {
        Self {
            client,
            denom: denom.into(),
            memo: memo.into(),
            gas,
            max_claim_per_tx: max_claim_per_tx.max(1),
        }
    }

    /// Pending rewards as the chain currently reports them, for display
    /// before the user commits to a claim.
    pub async fn pending(&self, delegator: &str) -> Result<PendingRewards> {
        self.client
            .delegation_total_rewards(delegator, &self.denom)
            .await
    }

    /// Withdraw every non-zero reward line. Query failures abort; a rejected
    /// batch is recorded and the remaining batches still go out.
    pub async fn claim_all(&self, delegator: &str) -> Result<ClaimOutcome> {
        let delegations = self.client.delegator_delegations(delegator).await?;
        if delegations.is_empty() {
            return Ok(ClaimOutcome::NoDelegations);
        }

        let pending = self.pending(delegator).await?;
        let claimable: Vec<RewardLine> = pending
            .rewards
            .into_iter()
            .filter(|line| line.amount > 0)
            .collect();
        if claimable.is_empty() {
            return Ok(ClaimOutcome::NothingClaimable);
        }

        log::info!(
            "claiming rewards from {} validator(s) in batches of up to {}",
            claimable.len(),
            self.max_claim_per_tx
        );

        let mut report = ClaimReport {
            tx_hashes: Vec::new(),
            claimed: Vec::new(),
            total: 0,
            failures: Vec::new(),
        };

        for batch in claimable.chunks(self.max_claim_per_tx) {
            self.claim_batch(delegator, batch, &mut report).await;
        }

        Ok(ClaimOutcome::Claimed(report))
    }

    async fn claim_batch(&self, delegator: &str, batch: &[RewardLine], report: &mut ClaimReport) {
        let validators: Vec<String> = batch.iter().map(|l| l.validator_address.clone()).collect();
        let messages = withdraw_reward_messages(delegator, &validators);

        let estimate = estimate_fee(self.client, delegator, &messages, &self.gas).await;
        let fee = fee_from_amount(estimate.fee_amount, estimate.gas_limit, &self.denom);

        match self
            .client
            .sign_and_broadcast(delegator, messages, fee, &self.memo)
            .await
        {
            Ok(result) if result.code == 0 => {
                report.tx_hashes.push(result.tx_hash);
                let mut claimed = claimed_from_events(&result.events, &self.denom);
                if claimed.is_empty() {
                    // Inclusion poll can time out before events are
                    // available; fall back to the queried amounts.
                    claimed = batch
                        .iter()
                        .map(|l| (l.validator_address.clone(), l.amount))
                        .collect();
                }
                for (validator, amount) in claimed {
                    report.total += amount;
                    report.claimed.push((validator, amount));
                }
            }
            Ok(result) => {
                log::warn!(
                    "claim batch rejected with code {}: {}",
                    result.code,
                    result.raw_log
                );
                report.failures.push(result.raw_log);
            }
            Err(e) => {
                log::warn!("claim batch failed: {:#}", e);
                report.failures.push(format!("{:#}", e));
            }
        }
    }
}

/// Per-validator amounts from withdraw_rewards events. Each event carries an
/// "amount" attribute like "500000uempe" (possibly several coins joined by
/// commas) and a "validator" attribute.
fn claimed_from_events(
    events: &[crate::chain::client::TxEvent],
    denom: &str,
) -> Vec<(String, u128)> {
    let mut claimed = Vec::new();
    for event in events.iter().filter(|e| e.kind == "withdraw_rewards") {
        let mut amount = 0u128;
        let mut validator = None;
        for (key, value) in &event.attributes {
            match key.as_str() {
                "amount" => amount = parse_coin_list(value, denom),
                "validator" => validator = Some(value.clone()),
                _ => {}
            }
        }
        if let Some(validator) = validator {
            claimed.push((validator, amount));
        }
    }
    claimed
}

/// Sum the coins of `denom` in a comma-separated coin list like
/// "12uempe,34other".
fn parse_coin_list(value: &str, denom: &str) -> u128 {
    value
        .split(',')
        .filter_map(|coin| coin.trim().strip_suffix(denom))
        .filter_map(|digits| digits.parse::<u128>().ok())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::client::{BroadcastOutcome, DelegationEntry, TxEvent};
    use crate::chain::proto::{Any, Fee};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StakingStub {
        delegations: Vec<DelegationEntry>,
        rewards: Vec<RewardLine>,
        broadcast_events: bool,
        broadcasts: Mutex<Vec<usize>>,
    }

    impl StakingStub {
        fn new(rewards: Vec<RewardLine>) -> Self {
            let delegations = rewards
                .iter()
                .map(|l| DelegationEntry {
                    validator_address: l.validator_address.clone(),
                    amount: 1_000_000,
                })
                .collect();
            Self {
                delegations,
                rewards,
                broadcast_events: true,
                broadcasts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TxClient for StakingStub {
        async fn simulate(&self, _sender: &str, messages: &[Any], _memo: &str) -> Result<u64> {
            Ok(55_000 * messages.len() as u64)
        }

        async fn sign_and_broadcast(
            &self,
            _sender: &str,
            messages: Vec<Any>,
            _fee: Fee,
            _memo: &str,
        ) -> Result<BroadcastOutcome> {
            use prost::Message;
            self.broadcasts.lock().unwrap().push(messages.len());
            let events = if self.broadcast_events {
                messages
                    .iter()
                    .map(|m| {
                        let msg =
                            crate::chain::proto::MsgWithdrawDelegatorReward::decode(&m.value[..])
                                .unwrap();
                        let amount = self
                            .rewards
                            .iter()
                            .find(|l| l.validator_address == msg.validator_address)
                            .map(|l| l.amount)
                            .unwrap_or(0);
                        TxEvent {
                            kind: "withdraw_rewards".to_string(),
                            attributes: vec![
                                ("amount".to_string(), format!("{}uempe", amount)),
                                ("validator".to_string(), msg.validator_address),
                            ],
                        }
                    })
                    .collect()
            } else {
                Vec::new()
            };
            Ok(BroadcastOutcome {
                code: 0,
                tx_hash: format!("HASH{}", self.broadcasts.lock().unwrap().len()),
                raw_log: String::new(),
                gas_used: Some(50_000),
                gas_wanted: Some(90_000),
                events,
            })
        }
    }

    #[async_trait]
    impl StakingQuery for StakingStub {
        async fn delegator_delegations(&self, _delegator: &str) -> Result<Vec<DelegationEntry>> {
            Ok(self.delegations.clone())
        }

        async fn delegation_total_rewards(
            &self,
            _delegator: &str,
            _denom: &str,
        ) -> Result<PendingRewards> {
            Ok(PendingRewards {
                total: self.rewards.iter().map(|l| l.amount).sum(),
                rewards: self.rewards.clone(),
            })
        }

        async fn bank_balance(&self, _address: &str, _denom: &str) -> Result<u128> {
            Ok(0)
        }
    }

    fn line(validator: &str, amount: u128) -> RewardLine {
        RewardLine {
            validator_address: validator.to_string(),
            amount,
        }
    }

    fn aggregator(stub: &StakingStub, max_per_tx: usize) -> RewardAggregator<'_, StakingStub> {
        RewardAggregator::new(stub, "uempe", "", GasSettings::default(), max_per_tx)
    }

    #[tokio::test]
    async fn test_no_delegations() {
        let stub = StakingStub::new(vec![]);
        let outcome = aggregator(&stub, 100).claim_all("empe1del").await.unwrap();
        assert!(matches!(outcome, ClaimOutcome::NoDelegations));
        assert!(stub.broadcasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_rewards_zero() {
        let stub = StakingStub::new(vec![line("empevaloper1a", 0), line("empevaloper1b", 0)]);
        let outcome = aggregator(&stub, 100).claim_all("empe1del").await.unwrap();
        assert!(matches!(outcome, ClaimOutcome::NothingClaimable));
        assert!(stub.broadcasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_lines_are_filtered_out() {
        let stub = StakingStub::new(vec![line("empevaloper1a", 500_000), line("empevaloper1b", 0)]);
        let outcome = aggregator(&stub, 100).claim_all("empe1del").await.unwrap();

        let report = match outcome {
            ClaimOutcome::Claimed(r) => r,
            other => panic!("expected Claimed, got {:?}", other),
        };
        assert_eq!(report.total, 500_000);
        assert_eq!(report.claimed, vec![("empevaloper1a".to_string(), 500_000)]);
        assert_eq!(report.tx_hashes.len(), 1);
        assert!(report.failures.is_empty());
        // Only one withdraw message went out.
        assert_eq!(*stub.broadcasts.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_batches_are_capped() {
        let stub = StakingStub::new(
            (0..5).map(|i| line(&format!("empevaloper1v{}", i), 100 + i as u128)).collect(),
        );
        let outcome = aggregator(&stub, 2).claim_all("empe1del").await.unwrap();

        let report = match outcome {
            ClaimOutcome::Claimed(r) => r,
            other => panic!("expected Claimed, got {:?}", other),
        };
        assert_eq!(*stub.broadcasts.lock().unwrap(), vec![2, 2, 1]);
        assert_eq!(report.tx_hashes.len(), 3);
        assert_eq!(report.claimed.len(), 5);
        assert_eq!(report.total, 100 + 101 + 102 + 103 + 104);
    }

    #[tokio::test]
    async fn test_falls_back_to_queried_amounts_without_events() {
        let mut stub = StakingStub::new(vec![line("empevaloper1a", 42)]);
        stub.broadcast_events = false;
        let outcome = aggregator(&stub, 100).claim_all("empe1del").await.unwrap();

        let report = match outcome {
            ClaimOutcome::Claimed(r) => r,
            other => panic!("expected Claimed, got {:?}", other),
        };
        assert_eq!(report.claimed, vec![("empevaloper1a".to_string(), 42)]);
        assert_eq!(report.total, 42);
    }

    #[test]
    fn test_parse_coin_list() {
        assert_eq!(parse_coin_list("500000uempe", "uempe"), 500_000);
        assert_eq!(parse_coin_list("12uempe,34uother", "uempe"), 12);
        assert_eq!(parse_coin_list("34uother", "uempe"), 0);
        assert_eq!(parse_coin_list("", "uempe"), 0);
    }
}
