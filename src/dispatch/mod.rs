/// Dispatch loop: drives a list of work items through estimate, sign,
/// broadcast, records one outcome per item, and keeps going when an item
/// fails. The chain is only reached through the `TxClient` trait, so the
/// loop is tested against stubs.
pub mod outcome;
pub mod rewards;
pub mod worklist;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::chain::client::TxClient;
use crate::chain::gas::{estimate_fee, GasSettings};
use crate::chain::messages::{build_for_kind, TxKind};
use crate::chain::tx_builder::fee_from_amount;
use crate::error::BotError;
pub use outcome::{total_dispatched, Progress, RunSummary, TxOutcome};

/// One unit of work: a target address and what to do with it.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub target: String,
    pub kind: TxKind,
}

impl WorkItem {
    pub fn new(target: impl Into<String>, kind: TxKind) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }
}

/// Inclusive range the per-item amount is drawn from, in base denom units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    pub min: u64,
    pub max: u64,
}

impl AmountRange {
    pub fn new(min: u64, max: u64) -> Result<Self, BotError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), BotError> {
        if self.min < 1 {
            return Err(BotError::AmountTooSmall(self.min));
        }
        if self.max <= self.min {
            return Err(BotError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Uniform draw, both endpoints included.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Lifecycle of a single item. Every item ends in exactly one of the two
/// terminal phases; the loop never leaves an item mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPhase {
    Pending,
    Estimating,
    Submitted,
    Succeeded,
    Failed,
}

impl TxPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxPhase::Succeeded | TxPhase::Failed)
    }
}

/// Knobs for a dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub denom: String,
    pub memo: String,
    pub gas: GasSettings,
    /// Pause between consecutive items. Not applied after the last one.
    pub delay: Duration,
}

pub struct DispatchLoop<'a, C: TxClient + ?Sized> {
    client: &'a C,
    sender: String,
    config: DispatchConfig,
}

impl<'a, C: TxClient + ?Sized> DispatchLoop<'a, C> {
    pub fn new(client: &'a C, sender: impl Into<String>, config: DispatchConfig) -> Self {
        Self {
            client,
            sender: sender.into(),
            config,
        }
    }

    /// Run every item to a terminal phase and return the outcomes in input
    /// order. This never returns early: a failed item is recorded and the
    /// loop moves on.
    pub async fn run<R: Rng + ?Sized>(
        &self,
        items: &[WorkItem],
        range: AmountRange,
        rng: &mut R,
    ) -> (Vec<TxOutcome>, RunSummary) {
        self.run_with_observer(items, range, rng, |_, _| {}).await
    }

    /// Same as [`run`](Self::run), invoking `observe` after each item for
    /// progress display.
    pub async fn run_with_observer<R, F>(
        &self,
        items: &[WorkItem],
        range: AmountRange,
        rng: &mut R,
        mut observe: F,
    ) -> (Vec<TxOutcome>, RunSummary)
    where
        R: Rng + ?Sized,
        F: FnMut(Progress, &TxOutcome),
    {
        let started = Instant::now();
        let mut outcomes = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let amount = range.draw(rng);
            let outcome = self.dispatch_one(index, item, amount).await;

            let succeeded = outcomes.iter().filter(|o: &&TxOutcome| o.success).count()
                + outcome.success as usize;
            observe(
                Progress {
                    processed: index + 1,
                    total: items.len(),
                    succeeded,
                },
                &outcome,
            );
            outcomes.push(outcome);

            if index + 1 < items.len() && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        let summary = RunSummary::from_outcomes(&outcomes, started.elapsed());
        (outcomes, summary)
    }

    async fn dispatch_one(&self, index: usize, item: &WorkItem, amount: u64) -> TxOutcome {
        let mut phase = TxPhase::Pending;
        log::debug!(
            "item {} ({:?}): {} {} {} to {}",
            index,
            phase,
            item.kind.verb(),
            amount,
            self.config.denom,
            item.target
        );

        let messages = vec![build_for_kind(
            item.kind,
            &self.sender,
            &item.target,
            amount,
            &self.config.denom,
        )];

        phase = TxPhase::Estimating;
        log::trace!("item {}: phase {:?}", index, phase);
        let estimate = estimate_fee(self.client, &self.sender, &messages, &self.config.gas).await;
        let fee = fee_from_amount(estimate.fee_amount, estimate.gas_limit, &self.config.denom);

        phase = TxPhase::Submitted;
        log::trace!("item {}: phase {:?}", index, phase);
        let outcome = match self
            .client
            .sign_and_broadcast(&self.sender, messages, fee, &self.config.memo)
            .await
        {
            Ok(result) if result.code == 0 => {
                phase = TxPhase::Succeeded;
                TxOutcome::succeeded(
                    index,
                    &item.target,
                    amount,
                    result.tx_hash,
                    result.gas_used,
                    result.gas_wanted,
                )
            }
            Ok(result) => {
                phase = TxPhase::Failed;
                log::warn!(
                    "item {}: rejected with code {}: {}",
                    index,
                    result.code,
                    result.raw_log
                );
                TxOutcome::rejected(index, &item.target, amount, result.code, result.raw_log)
            }
            Err(e) => {
                phase = TxPhase::Failed;
                log::warn!("item {}: transport failure: {:#}", index, e);
                TxOutcome::errored(index, &item.target, amount, format!("{:#}", e))
            }
        };

        debug_assert!(phase.is_terminal());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::client::BroadcastOutcome;
    use crate::chain::proto::{Any, Fee};
    use anyhow::Result;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    /// Scripted client: answers each broadcast from a queue and records what
    /// it was asked to send.
    struct ScriptedClient {
        responses: Mutex<Vec<Result<BroadcastOutcome>>>,
        sent: Mutex<Vec<(String, u64)>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<BroadcastOutcome>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn accepted(hash: &str) -> Result<BroadcastOutcome> {
            Ok(BroadcastOutcome {
                code: 0,
                tx_hash: hash.to_string(),
                raw_log: String::new(),
                gas_used: Some(65_000),
                gas_wanted: Some(105_000),
                events: Vec::new(),
            })
        }

        fn rejected(code: u32, raw_log: &str) -> Result<BroadcastOutcome> {
            Ok(BroadcastOutcome {
                code,
                tx_hash: String::new(),
                raw_log: raw_log.to_string(),
                gas_used: None,
                gas_wanted: None,
                events: Vec::new(),
            })
        }
    }

    #[async_trait]
    impl TxClient for ScriptedClient {
        async fn simulate(&self, _sender: &str, _messages: &[Any], _memo: &str) -> Result<u64> {
            Ok(70_000)
        }

        async fn sign_and_broadcast(
            &self,
            _sender: &str,
            messages: Vec<Any>,
            fee: Fee,
            _memo: &str,
        ) -> Result<BroadcastOutcome> {
            assert_eq!(messages.len(), 1);
            assert!(fee.gas_limit > 0);
            let target = messages[0].type_url.clone();
            self.sent.lock().unwrap().push((target, fee.gas_limit));
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn config() -> DispatchConfig {
        DispatchConfig {
            denom: "uempe".to_string(),
            memo: String::new(),
            gas: GasSettings::default(),
            delay: Duration::ZERO,
        }
    }

    fn items(n: usize) -> Vec<WorkItem> {
        (0..n)
            .map(|i| WorkItem::new(format!("empe1target{}", i), TxKind::Send))
            .collect()
    }

    #[test]
    fn test_range_validation() {
        assert!(AmountRange::new(2, 129).is_ok());
        assert!(matches!(
            AmountRange::new(0, 10),
            Err(BotError::AmountTooSmall(0))
        ));
        assert!(matches!(
            AmountRange::new(10, 10),
            Err(BotError::InvalidRange { min: 10, max: 10 })
        ));
        assert!(matches!(
            AmountRange::new(10, 3),
            Err(BotError::InvalidRange { min: 10, max: 3 })
        ));
    }

    #[test]
    fn test_draw_stays_inside_range_and_hits_endpoints() {
        let range = AmountRange::new(2, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let v = range.draw(&mut rng);
            assert!((2..=5).contains(&v));
            seen.insert(v);
        }
        assert!(seen.contains(&2));
        assert!(seen.contains(&5));
    }

    #[tokio::test]
    async fn test_all_accepted() {
        let client = ScriptedClient::new(vec![
            ScriptedClient::accepted("AAA"),
            ScriptedClient::accepted("BBB"),
            ScriptedClient::accepted("CCC"),
        ]);
        let dispatch = DispatchLoop::new(&client, "empe1sender", config());
        let mut rng = StdRng::seed_from_u64(1);

        let (outcomes, summary) = dispatch
            .run(&items(3), AmountRange::new(2, 129).unwrap(), &mut rng)
            .await;

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.failed, 0);
        assert_eq!(outcomes[1].tx_hash.as_deref(), Some("BBB"));
        assert!(outcomes.iter().all(|o| o.success));
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_the_run() {
        let client = ScriptedClient::new(vec![
            ScriptedClient::accepted("AAA"),
            ScriptedClient::rejected(13, "insufficient fee"),
            Err(anyhow::anyhow!("connection reset by peer")),
            ScriptedClient::accepted("DDD"),
        ]);
        let dispatch = DispatchLoop::new(&client, "empe1sender", config());
        let mut rng = StdRng::seed_from_u64(2);

        let (outcomes, summary) = dispatch
            .run(&items(4), AmountRange::new(2, 129).unwrap(), &mut rng)
            .await;

        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 2);

        // Outcomes stay in input order.
        assert!(outcomes[0].success);
        assert_eq!(outcomes[1].code, Some(13));
        assert_eq!(outcomes[1].error.as_deref(), Some("insufficient fee"));
        assert!(outcomes[2].error.as_deref().unwrap().contains("connection reset"));
        assert_eq!(outcomes[3].tx_hash.as_deref(), Some("DDD"));
        assert_eq!(client.sent.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_one_outcome_per_item_in_order() {
        let client = ScriptedClient::new(
            (0..5).map(|i| ScriptedClient::accepted(&format!("H{}", i))).collect(),
        );
        let dispatch = DispatchLoop::new(&client, "empe1sender", config());
        let mut rng = StdRng::seed_from_u64(3);
        let work = items(5);

        let (outcomes, _) = dispatch
            .run(&work, AmountRange::new(2, 129).unwrap(), &mut rng)
            .await;

        assert_eq!(outcomes.len(), 5);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.index, i);
            assert_eq!(outcome.target, work[i].target);
            assert!((2..=129).contains(&outcome.amount));
        }
    }

    #[tokio::test]
    async fn test_observer_sees_progress() {
        let client = ScriptedClient::new(vec![
            ScriptedClient::accepted("AAA"),
            ScriptedClient::rejected(5, "out of gas"),
        ]);
        let dispatch = DispatchLoop::new(&client, "empe1sender", config());
        let mut rng = StdRng::seed_from_u64(4);

        let mut seen = Vec::new();
        dispatch
            .run_with_observer(
                &items(2),
                AmountRange::new(2, 129).unwrap(),
                &mut rng,
                |p, _| seen.push(p),
            )
            .await;

        assert_eq!(
            seen,
            vec![
                Progress { processed: 1, total: 2, succeeded: 1 },
                Progress { processed: 2, total: 2, succeeded: 1 },
            ]
        );
    }
}
