/// Outcome accounting: per-transaction records and the pure reductions that
/// feed the terminal output. Nothing here touches the chain.
use std::time::Duration;

use serde::Serialize;

/// Record of one dispatch attempt. Created once per item, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct TxOutcome {
    /// Zero-based position in the work list.
    pub index: usize,
    /// Recipient or validator the item targeted.
    pub target: String,
    /// Amount in base denom units (0 for claims).
    pub amount: u64,
    pub success: bool,
    pub tx_hash: Option<String>,
    /// Chain result code when the broadcast was rejected.
    pub code: Option<u32>,
    /// Raw log or transport error, for diagnosis.
    pub error: Option<String>,
    pub gas_used: Option<i64>,
    pub gas_wanted: Option<i64>,
}

impl TxOutcome {
    pub fn succeeded(
        index: usize,
        target: &str,
        amount: u64,
        tx_hash: String,
        gas_used: Option<i64>,
        gas_wanted: Option<i64>,
    ) -> Self {
        Self {
            index,
            target: target.to_string(),
            amount,
            success: true,
            tx_hash: Some(tx_hash),
            code: None,
            error: None,
            gas_used,
            gas_wanted,
        }
    }

    pub fn rejected(index: usize, target: &str, amount: u64, code: u32, raw_log: String) -> Self {
        Self {
            index,
            target: target.to_string(),
            amount,
            success: false,
            tx_hash: None,
            code: Some(code),
            error: Some(raw_log),
            gas_used: None,
            gas_wanted: None,
        }
    }

    pub fn errored(index: usize, target: &str, amount: u64, message: String) -> Self {
        Self {
            index,
            target: target.to_string(),
            amount,
            success: false,
            tx_hash: None,
            code: None,
            error: Some(message),
            gas_used: None,
            gas_wanted: None,
        }
    }
}

/// Progress at any point of the run. Derived purely from the three counters,
/// so it can be recomputed without replaying the outcome log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub succeeded: usize,
}

impl Progress {
    pub fn failed(&self) -> usize {
        self.processed - self.succeeded
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.processed as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Text progress bar for the terminal.
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.percent() / 100.0) * width as f64).round() as usize;
        format!(
            "[{}{}] {:.1}%",
            "█".repeat(filled),
            "░".repeat(width.saturating_sub(filled)),
            self.percent()
        )
    }

    /// Time remaining assuming one fixed delay per unprocessed item.
    pub fn eta(&self, delay: Duration) -> Duration {
        delay * (self.total.saturating_sub(self.processed)) as u32
    }
}

/// End-of-run totals, computed once from the outcome log.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed_ms: u128,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[TxOutcome], elapsed: Duration) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            elapsed_ms: elapsed.as_millis(),
        }
    }

    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0 / 60.0
    }
}

/// Total base units moved by successful transactions.
pub fn total_dispatched(outcomes: &[TxOutcome]) -> u128 {
    outcomes
        .iter()
        .filter(|o| o.success)
        .map(|o| o.amount as u128)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(index: usize, amount: u64) -> TxOutcome {
        TxOutcome::succeeded(index, "empe1x", amount, format!("HASH{}", index), None, None)
    }

    #[test]
    fn test_summary_counts() {
        let outcomes = vec![
            ok(0, 10),
            TxOutcome::rejected(1, "empe1y", 20, 5, "out of gas".to_string()),
            ok(2, 30),
            TxOutcome::errored(3, "empe1z", 40, "connection reset".to_string()),
        ];

        let summary = RunSummary::from_outcomes(&outcomes, Duration::from_millis(1234));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.elapsed_ms, 1234);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
    }

    #[test]
    fn test_total_dispatched_counts_only_successes() {
        let outcomes = vec![
            ok(0, 10),
            TxOutcome::rejected(1, "empe1y", 20, 5, "rejected".to_string()),
            ok(2, 30),
        ];
        assert_eq!(total_dispatched(&outcomes), 40);
    }

    #[test]
    fn test_progress_derivation() {
        let progress = Progress {
            processed: 3,
            total: 4,
            succeeded: 2,
        };
        assert_eq!(progress.failed(), 1);
        assert_eq!(progress.percent(), 75.0);
        assert_eq!(progress.eta(Duration::from_secs(5)), Duration::from_secs(5));
    }

    #[test]
    fn test_progress_empty_run() {
        let progress = Progress {
            processed: 0,
            total: 0,
            succeeded: 0,
        };
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.failed(), 0);
    }

    #[test]
    fn test_progress_bar_bounds() {
        let full = Progress {
            processed: 4,
            total: 4,
            succeeded: 4,
        };
        let bar = full.bar(10);
        assert!(bar.starts_with(&format!("[{}]", "█".repeat(10))));

        let empty = Progress {
            processed: 0,
            total: 4,
            succeeded: 0,
        };
        assert!(empty.bar(10).contains(&"░".repeat(10)));
    }
}
