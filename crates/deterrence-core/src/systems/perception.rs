//! Perception System
//!
//! The sole information-update mechanism: after every interaction touching a
//! country, all other active countries re-rate it within the accuracy band
//! of its then-current true value. Perceptions never decay otherwise.

use rand::Rng;

use deterrence_events::CountryId;

use crate::components::Roster;

use super::value::sample_perceived;

/// Initializes every country's perception table with a noisy estimate of
/// every other country. Observers are visited in ascending id order, and
/// each observer rates the others in ascending id order.
pub fn initialize_ledgers<R: Rng>(roster: &mut Roster, accuracy: f64, rng: &mut R) {
    let truths: Vec<(CountryId, f64)> = roster
        .countries()
        .iter()
        .map(|c| (c.id, c.private_value))
        .collect();

    for observer in roster.iter_mut() {
        for &(observed, true_value) in &truths {
            if observed != observer.id {
                let estimate = sample_perceived(rng, true_value, accuracy);
                observer.set_perceived(observed, estimate);
            }
        }
    }
}

/// Refreshes every active observer's estimate of the given countries,
/// simulating fresh intelligence gathered from watching an interaction.
///
/// Observers are visited in ascending id order for the first observed
/// country, then for the second. Eliminated countries observe nothing, but
/// are still observed (at their new true value of zero).
pub fn refresh_perceptions<R: Rng>(
    roster: &mut Roster,
    observed: [CountryId; 2],
    accuracy: f64,
    rng: &mut R,
) {
    for x in observed {
        let true_value = match roster.get(x) {
            Some(country) => country.private_value,
            None => continue,
        };
        for observer in roster.iter_mut() {
            if observer.active && observer.id != x {
                let estimate = sample_perceived(rng, true_value, accuracy);
                observer.set_perceived(x, estimate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Country;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn roster() -> Roster {
        Roster::new(vec![
            Country::new(CountryId(1), 100.0),
            Country::new(CountryId(2), 200.0),
            Country::new(CountryId(3), 400.0),
        ])
    }

    #[test]
    fn test_initialize_ledgers_covers_all_pairs() {
        let mut roster = roster();
        let mut rng = SmallRng::seed_from_u64(42);

        initialize_ledgers(&mut roster, 0.15, &mut rng);

        for country in roster.countries() {
            let entries: Vec<_> = country.perceived_entries().collect();
            assert_eq!(entries.len(), 2);
            assert!(entries.iter().all(|&(id, _)| id != country.id));
        }
    }

    #[test]
    fn test_initialize_ledgers_within_band() {
        let mut roster = roster();
        let mut rng = SmallRng::seed_from_u64(42);

        initialize_ledgers(&mut roster, 0.15, &mut rng);

        for country in roster.countries() {
            for (observed, estimate) in country.perceived_entries() {
                let true_value = roster.get(observed).unwrap().private_value;
                assert!(estimate >= true_value * 0.85);
                assert!(estimate <= true_value * 1.15);
            }
        }
    }

    #[test]
    fn test_refresh_updates_observers_of_both() {
        let mut roster = roster();
        let mut rng = SmallRng::seed_from_u64(42);
        initialize_ledgers(&mut roster, 0.0, &mut rng);

        // Values change; estimates are stale until the refresh
        roster.get_mut(CountryId(1)).unwrap().private_value = 1000.0;
        roster.get_mut(CountryId(2)).unwrap().private_value = 50.0;

        refresh_perceptions(&mut roster, [CountryId(1), CountryId(2)], 0.0, &mut rng);

        let third = roster.get(CountryId(3)).unwrap();
        assert_eq!(third.perceived_value_of(CountryId(1)), 1000.0);
        assert_eq!(third.perceived_value_of(CountryId(2)), 50.0);
        // The opponent refreshes too
        let second = roster.get(CountryId(2)).unwrap();
        assert_eq!(second.perceived_value_of(CountryId(1)), 1000.0);
        // The untouched estimate stays put
        let first = roster.get(CountryId(1)).unwrap();
        assert_eq!(first.perceived_value_of(CountryId(3)), 400.0);
    }

    #[test]
    fn test_eliminated_observer_is_skipped() {
        let mut roster = roster();
        let mut rng = SmallRng::seed_from_u64(42);
        initialize_ledgers(&mut roster, 0.0, &mut rng);

        roster.get_mut(CountryId(3)).unwrap().eliminate();
        roster.get_mut(CountryId(1)).unwrap().private_value = 777.0;

        refresh_perceptions(&mut roster, [CountryId(1), CountryId(2)], 0.0, &mut rng);

        // The eliminated country's table is frozen
        let third = roster.get(CountryId(3)).unwrap();
        assert_eq!(third.perceived_value_of(CountryId(1)), 100.0);
        // Active observers see the eliminated country at zero
        refresh_perceptions(&mut roster, [CountryId(3), CountryId(2)], 0.0, &mut rng);
        let first = roster.get(CountryId(1)).unwrap();
        assert_eq!(first.perceived_value_of(CountryId(3)), 0.0);
    }
}
