//! Roster Setup
//!
//! Creates the starting roster: sampled private values first, then every
//! country's perception table, in the same draw order as the original model.

use rand::Rng;

use deterrence_events::CountryId;

use crate::components::{Country, Roster};
use crate::config::SimConfig;
use crate::systems::perception::initialize_ledgers;
use crate::systems::value::sample_initial_value;

/// Builds a fresh roster of `config.num_countries` countries with ids
/// starting at 1.
pub fn create_roster<R: Rng>(config: &SimConfig, rng: &mut R) -> Roster {
    let countries = (1..=config.num_countries)
        .map(|id| Country::new(CountryId(id), sample_initial_value(rng, config)))
        .collect();

    let mut roster = Roster::new(countries);
    initialize_ledgers(&mut roster, config.perceived_value_accuracy, rng);
    roster
}
