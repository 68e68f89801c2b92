//! Round Reports
//!
//! The per-round handoff from the engine to downstream consumers: all
//! interaction records plus round-level aggregates and per-country tallies.

use serde::{Deserialize, Serialize};

use crate::record::{CountryId, InteractionRecord};

/// Scheduling era for a round.
///
/// The opening round pairs countries by fixed adjacent index groups; every
/// later round is a full round-robin over the surviving countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Opening,
    RoundRobin,
}

/// Per-country tallies for a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRoundStats {
    pub country: CountryId,
    pub attacks_attempted: u32,
    pub attacks_won: u32,
    pub attacks_lost: u32,
    pub defended: u32,
    /// Growth rate applied at round start
    pub growth_rate: f64,
    /// Value right after growth, the baseline for change computation
    pub value_at_round_start: f64,
    pub value_at_round_end: f64,
    pub change: f64,
    pub percent_change: f64,
    pub eliminated: bool,
}

/// Round-level aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundAggregates {
    /// Pairs that actually ran (both participants alive at execution time)
    pub interactions_executed: u32,
    /// Scheduled pairs skipped because a participant was eliminated earlier
    /// in the same round
    pub pairs_skipped: u32,
    pub bargains: u32,
    pub attacks: u32,
    pub attacks_successful: u32,
    pub attacks_failed: u32,
    /// Total active value right after growth
    pub total_value_start: f64,
    pub total_value_end: f64,
    pub countries_at_start: u32,
    pub countries_at_end: u32,
    /// Times a computed value would have gone negative and was clamped
    pub numeric_clamps: u32,
}

impl RoundAggregates {
    /// Net change in total active value over the round.
    pub fn total_change(&self) -> f64 {
        self.total_value_end - self.total_value_start
    }

    /// Percent change in total active value over the round.
    pub fn percent_change(&self) -> f64 {
        if self.total_value_start > 0.0 {
            self.total_change() / self.total_value_start * 100.0
        } else {
            0.0
        }
    }
}

/// Everything produced by one round of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub era: Era,
    pub records: Vec<InteractionRecord>,
    pub aggregates: RoundAggregates,
    pub country_stats: Vec<CountryRoundStats>,
    /// Countries eliminated during this round, in elimination order
    pub eliminated: Vec<CountryId>,
}

impl RoundReport {
    /// Checks whether a specific country was eliminated this round.
    pub fn was_eliminated(&self, country: CountryId) -> bool {
        self.eliminated.contains(&country)
    }

    /// Looks up the round stats for a specific country.
    pub fn stats_for(&self, country: CountryId) -> Option<&CountryRoundStats> {
        self.country_stats.iter().find(|s| s.country == country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates() -> RoundAggregates {
        RoundAggregates {
            interactions_executed: 5,
            pairs_skipped: 1,
            bargains: 3,
            attacks: 2,
            attacks_successful: 1,
            attacks_failed: 1,
            total_value_start: 1000.0,
            total_value_end: 1100.0,
            countries_at_start: 10,
            countries_at_end: 9,
            numeric_clamps: 0,
        }
    }

    #[test]
    fn test_era_serialization() {
        assert_eq!(serde_json::to_string(&Era::Opening).unwrap(), r#""opening""#);
        assert_eq!(
            serde_json::to_string(&Era::RoundRobin).unwrap(),
            r#""round_robin""#
        );
    }

    #[test]
    fn test_aggregates_change() {
        let agg = aggregates();
        assert!((agg.total_change() - 100.0).abs() < 1e-9);
        assert!((agg.percent_change() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregates_zero_start() {
        let agg = RoundAggregates {
            total_value_start: 0.0,
            total_value_end: 0.0,
            ..RoundAggregates::default()
        };
        assert_eq!(agg.percent_change(), 0.0);
    }

    #[test]
    fn test_report_lookups() {
        let report = RoundReport {
            round: 2,
            era: Era::RoundRobin,
            records: vec![],
            aggregates: aggregates(),
            country_stats: vec![CountryRoundStats {
                country: CountryId(4),
                attacks_attempted: 1,
                attacks_won: 1,
                attacks_lost: 0,
                defended: 0,
                growth_rate: 0.03,
                value_at_round_start: 500.0,
                value_at_round_end: 620.0,
                change: 120.0,
                percent_change: 24.0,
                eliminated: false,
            }],
            eliminated: vec![CountryId(7)],
        };

        assert!(report.was_eliminated(CountryId(7)));
        assert!(!report.was_eliminated(CountryId(4)));
        assert_eq!(report.stats_for(CountryId(4)).unwrap().attacks_won, 1);
        assert!(report.stats_for(CountryId(9)).is_none());
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let report = RoundReport {
            round: 1,
            era: Era::Opening,
            records: vec![],
            aggregates: aggregates(),
            country_stats: vec![],
            eliminated: vec![],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""era":"opening""#));
        let parsed: RoundReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
