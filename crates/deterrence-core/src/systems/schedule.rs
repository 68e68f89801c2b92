//! Interaction Scheduling
//!
//! A pure function from the active roster and the current era to an ordered
//! pair sequence, kept free of resolution logic so it can be tested alone.

use deterrence_events::{CountryId, Era};

/// Builds the ordered interaction schedule for one round.
///
/// In the opening era countries meet their index neighbor: (1,2), (3,4), …;
/// an odd trailing country sits the round out. Every later era is a full
/// round-robin of `n * (n - 1) / 2` pairs in ascending `(i, j)` order.
pub fn build_pairings(active: &[CountryId], era: Era) -> Vec<(CountryId, CountryId)> {
    match era {
        Era::Opening => active.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect(),
        Era::RoundRobin => {
            let mut pairs = Vec::with_capacity(active.len() * active.len().saturating_sub(1) / 2);
            for (i, &first) in active.iter().enumerate() {
                for &second in &active[i + 1..] {
                    pairs.push((first, second));
                }
            }
            pairs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<CountryId> {
        raw.iter().copied().map(CountryId).collect()
    }

    #[test]
    fn test_opening_pairs_adjacent() {
        let pairs = build_pairings(&ids(&[1, 2, 3, 4, 5, 6]), Era::Opening);
        assert_eq!(
            pairs,
            vec![
                (CountryId(1), CountryId(2)),
                (CountryId(3), CountryId(4)),
                (CountryId(5), CountryId(6)),
            ]
        );
    }

    #[test]
    fn test_opening_odd_country_sits_out() {
        let pairs = build_pairings(&ids(&[1, 2, 3, 4, 5]), Era::Opening);
        assert_eq!(pairs.len(), 2);
        assert!(!pairs.iter().any(|&(a, b)| a == CountryId(5) || b == CountryId(5)));
    }

    #[test]
    fn test_opening_respects_surviving_ids() {
        // After eliminations the neighbor pairing follows the surviving order
        let pairs = build_pairings(&ids(&[2, 3, 7, 9]), Era::Opening);
        assert_eq!(
            pairs,
            vec![(CountryId(2), CountryId(3)), (CountryId(7), CountryId(9))]
        );
    }

    #[test]
    fn test_round_robin_counts() {
        let pairs = build_pairings(&ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), Era::RoundRobin);
        assert_eq!(pairs.len(), 45);

        // Unique unordered pairs, ascending order within and across
        for window in pairs.windows(2) {
            assert!(window[0] < window[1]);
        }
        for &(a, b) in &pairs {
            assert!(a < b);
        }
    }

    #[test]
    fn test_round_robin_two_countries() {
        let pairs = build_pairings(&ids(&[4, 9]), Era::RoundRobin);
        assert_eq!(pairs, vec![(CountryId(4), CountryId(9))]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(build_pairings(&[], Era::Opening).is_empty());
        assert!(build_pairings(&ids(&[1]), Era::RoundRobin).is_empty());
    }
}
