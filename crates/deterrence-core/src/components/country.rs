//! Country State
//!
//! A country carries its ground-truth private value, its liveness flag, its
//! private perception table of every other country, and per-round tallies.

use std::collections::BTreeMap;

use deterrence_events::{CountryId, CountrySnapshot, PerceivedEntry};

/// Per-round tallies, reset at the start of every round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundStats {
    pub attacks_attempted: u32,
    pub attacks_won: u32,
    pub attacks_lost: u32,
    pub defended: u32,
    /// Growth rate applied at round start
    pub growth_rate: f64,
    /// Value right after growth, the baseline for change computation
    pub value_at_round_start: f64,
}

impl RoundStats {
    pub fn reset(&mut self) {
        *self = RoundStats::default();
    }
}

/// An autonomous agent with a true private value and noisy estimates of
/// everyone else's.
#[derive(Debug, Clone)]
pub struct Country {
    pub id: CountryId,
    /// Ground-truth strength measure; never negative
    pub private_value: f64,
    /// Cleared exactly once, on elimination
    pub active: bool,
    /// This country's estimates of the others, keyed by id. Ordered map so
    /// iteration order is stable across runs.
    perceived_values: BTreeMap<CountryId, f64>,
    pub stats: RoundStats,
}

impl Country {
    pub fn new(id: CountryId, private_value: f64) -> Self {
        Self {
            id,
            private_value,
            active: true,
            perceived_values: BTreeMap::new(),
            stats: RoundStats::default(),
        }
    }

    /// This country's current estimate of another country's value.
    ///
    /// Missing entries read as zero, matching the original model.
    pub fn perceived_value_of(&self, other: CountryId) -> f64 {
        self.perceived_values.get(&other).copied().unwrap_or(0.0)
    }

    /// Replaces the estimate of another country. Self-entries are never
    /// stored.
    pub fn set_perceived(&mut self, other: CountryId, value: f64) {
        debug_assert_ne!(self.id, other, "a country never rates itself");
        if other != self.id {
            self.perceived_values.insert(other, value);
        }
    }

    /// Permanently retires this country. Its value is forfeit and it never
    /// participates again.
    pub fn eliminate(&mut self) {
        self.private_value = 0.0;
        self.active = false;
    }

    /// Perception entries in ascending id order.
    pub fn perceived_entries(&self) -> impl Iterator<Item = (CountryId, f64)> + '_ {
        self.perceived_values.iter().map(|(&id, &v)| (id, v))
    }

    pub fn snapshot(&self) -> CountrySnapshot {
        CountrySnapshot {
            country: self.id,
            private_value: self.private_value,
            active: self.active,
            perceived: self
                .perceived_entries()
                .map(|(of, value)| PerceivedEntry { of, value })
                .collect(),
        }
    }
}
