//! Roster Snapshots
//!
//! Point-in-time captures of every country's value, liveness, and perception
//! table. Snapshots are the status surface read by reporting tools.

use serde::{Deserialize, Serialize};

use crate::record::CountryId;

/// One entry of a country's perception table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceivedEntry {
    /// The observed country
    pub of: CountryId,
    /// The observer's current estimate of its private value
    pub value: f64,
}

/// Snapshot of a single country's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySnapshot {
    pub country: CountryId,
    pub private_value: f64,
    pub active: bool,
    /// Perception entries in ascending id order, self excluded
    pub perceived: Vec<PerceivedEntry>,
}

/// Snapshot of the full roster after a given round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Unique identifier (e.g., "snap_0003")
    pub snapshot_id: String,
    /// Round after which this snapshot was taken (0 = initial state)
    pub round: u32,
    pub countries: Vec<CountrySnapshot>,
}

impl RosterSnapshot {
    /// Number of countries still active.
    pub fn active_count(&self) -> usize {
        self.countries.iter().filter(|c| c.active).count()
    }

    /// Sum of active countries' private values.
    pub fn total_value(&self) -> f64 {
        self.countries
            .iter()
            .filter(|c| c.active)
            .map(|c| c.private_value)
            .sum()
    }

    /// Looks up a single country's snapshot.
    pub fn get(&self, country: CountryId) -> Option<&CountrySnapshot> {
        self.countries.iter().find(|c| c.country == country)
    }
}

/// Generates a snapshot ID for the given round.
pub fn generate_snapshot_id(round: u32) -> String {
    format!("snap_{:04}", round)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RosterSnapshot {
        RosterSnapshot {
            snapshot_id: generate_snapshot_id(3),
            round: 3,
            countries: vec![
                CountrySnapshot {
                    country: CountryId(1),
                    private_value: 400.0,
                    active: true,
                    perceived: vec![PerceivedEntry {
                        of: CountryId(2),
                        value: 210.0,
                    }],
                },
                CountrySnapshot {
                    country: CountryId(2),
                    private_value: 200.0,
                    active: true,
                    perceived: vec![PerceivedEntry {
                        of: CountryId(1),
                        value: 390.0,
                    }],
                },
                CountrySnapshot {
                    country: CountryId(3),
                    private_value: 0.0,
                    active: false,
                    perceived: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_generate_snapshot_id() {
        assert_eq!(generate_snapshot_id(0), "snap_0000");
        assert_eq!(generate_snapshot_id(17), "snap_0017");
    }

    #[test]
    fn test_snapshot_counts() {
        let snap = snapshot();
        assert_eq!(snap.active_count(), 2);
        assert!((snap.total_value() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_lookup() {
        let snap = snapshot();
        assert_eq!(snap.get(CountryId(2)).unwrap().private_value, 200.0);
        assert!(snap.get(CountryId(9)).is_none());
    }

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let snap = snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("snap_0003"));

        let parsed: RosterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snap);
    }
}
