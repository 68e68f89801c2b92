//! Statistics Recorder
//!
//! Read-only consumer of round reports: accumulates per-round history and
//! running totals across a run, and produces a serializable summary for
//! analysis and visualization collaborators. Never mutates simulation state.

use serde::Serialize;
use uuid::Uuid;

use deterrence_events::{CountryId, RoundReport};

/// One row of per-round history.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRow {
    pub round: u32,
    pub interactions: u32,
    pub bargains: u32,
    pub attacks: u32,
    pub eliminated: u32,
    pub total_value_end: f64,
}

/// Accumulates statistics over the rounds of a single run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    initial_total_value: f64,
    rounds: u32,
    total_interactions: u32,
    total_bargains: u32,
    total_attacks: u32,
    attacks_successful: u32,
    attacks_failed: u32,
    pairs_skipped: u32,
    numeric_clamps: u32,
    eliminated: Vec<CountryId>,
    history: Vec<RoundRow>,
}

impl RunStats {
    pub fn new(initial_total_value: f64) -> Self {
        Self {
            initial_total_value,
            ..Self::default()
        }
    }

    /// Folds one round report into the running totals.
    pub fn record_round(&mut self, report: &RoundReport) {
        let agg = &report.aggregates;
        self.rounds += 1;
        self.total_interactions += agg.interactions_executed;
        self.total_bargains += agg.bargains;
        self.total_attacks += agg.attacks;
        self.attacks_successful += agg.attacks_successful;
        self.attacks_failed += agg.attacks_failed;
        self.pairs_skipped += agg.pairs_skipped;
        self.numeric_clamps += agg.numeric_clamps;
        self.eliminated.extend(report.eliminated.iter().copied());

        self.history.push(RoundRow {
            round: report.round,
            interactions: agg.interactions_executed,
            bargains: agg.bargains,
            attacks: agg.attacks,
            eliminated: report.eliminated.len() as u32,
            total_value_end: agg.total_value_end,
        });
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn eliminated(&self) -> &[CountryId] {
        &self.eliminated
    }

    /// Produces the final serializable summary.
    pub fn summary(&self, run_id: Uuid, seed: u64, survivors: u32) -> RunSummary {
        let final_total_value = self
            .history
            .last()
            .map(|row| row.total_value_end)
            .unwrap_or(self.initial_total_value);

        RunSummary {
            run_id,
            seed,
            rounds: self.rounds,
            total_interactions: self.total_interactions,
            total_bargains: self.total_bargains,
            total_attacks: self.total_attacks,
            attacks_successful: self.attacks_successful,
            attacks_failed: self.attacks_failed,
            pairs_skipped: self.pairs_skipped,
            numeric_clamps: self.numeric_clamps,
            eliminated: self.eliminated.clone(),
            survivors,
            initial_total_value: self.initial_total_value,
            final_total_value,
            history: self.history.clone(),
        }
    }
}

/// Final statistics for a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub seed: u64,
    pub rounds: u32,
    pub total_interactions: u32,
    pub total_bargains: u32,
    pub total_attacks: u32,
    pub attacks_successful: u32,
    pub attacks_failed: u32,
    pub pairs_skipped: u32,
    pub numeric_clamps: u32,
    pub eliminated: Vec<CountryId>,
    pub survivors: u32,
    pub initial_total_value: f64,
    pub final_total_value: f64,
    pub history: Vec<RoundRow>,
}

impl RunSummary {
    /// Share of attempted attacks that succeeded, if any were attempted.
    pub fn attack_success_rate(&self) -> Option<f64> {
        if self.total_attacks == 0 {
            return None;
        }
        Some(self.attacks_successful as f64 / self.total_attacks as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deterrence_events::{Era, RoundAggregates};

    fn report(round: u32, bargains: u32, successes: u32, failures: u32) -> RoundReport {
        let eliminated: Vec<CountryId> = (0..successes).map(|i| CountryId(100 + i)).collect();
        RoundReport {
            round,
            era: Era::RoundRobin,
            records: vec![],
            aggregates: RoundAggregates {
                interactions_executed: bargains + successes + failures,
                bargains,
                attacks: successes + failures,
                attacks_successful: successes,
                attacks_failed: failures,
                total_value_start: 1000.0,
                total_value_end: 1050.0,
                countries_at_start: 10,
                countries_at_end: 10 - successes,
                ..RoundAggregates::default()
            },
            country_stats: vec![],
            eliminated,
        }
    }

    #[test]
    fn test_accumulates_across_rounds() {
        let mut stats = RunStats::new(1000.0);
        stats.record_round(&report(1, 3, 1, 1));
        stats.record_round(&report(2, 5, 0, 2));

        let summary = stats.summary(Uuid::nil(), 42, 9);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.total_interactions, 12);
        assert_eq!(summary.total_bargains, 8);
        assert_eq!(summary.total_attacks, 4);
        assert_eq!(summary.attacks_successful, 1);
        assert_eq!(summary.attacks_failed, 3);
        assert_eq!(summary.eliminated, vec![CountryId(100)]);
        assert_eq!(summary.history.len(), 2);
        assert_eq!(summary.final_total_value, 1050.0);
    }

    #[test]
    fn test_empty_run_summary() {
        let stats = RunStats::new(800.0);
        let summary = stats.summary(Uuid::nil(), 7, 10);
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.final_total_value, 800.0);
        assert_eq!(summary.attack_success_rate(), None);
    }

    #[test]
    fn test_attack_success_rate() {
        let mut stats = RunStats::new(1000.0);
        stats.record_round(&report(1, 0, 1, 3));
        let summary = stats.summary(Uuid::nil(), 42, 9);
        assert_eq!(summary.attack_success_rate(), Some(0.25));
    }

    #[test]
    fn test_summary_serializes() {
        let mut stats = RunStats::new(1000.0);
        stats.record_round(&report(1, 2, 0, 1));
        let summary = stats.summary(Uuid::nil(), 42, 10);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""seed":42"#));
        assert!(json.contains(r#""rounds":1"#));
    }
}
