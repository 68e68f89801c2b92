//! Round Orchestrator
//!
//! Drives one full round: growth, scheduling, the strictly ordered
//! interaction loop, and finalization into a [`RoundReport`]. Interactions
//! run sequentially because later ones depend on perception and elimination
//! state mutated by earlier ones in the same round.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

use deterrence_events::{
    generate_record_id, CountryId, CountryRoundStats, Era, InteractionOutcome, InteractionRecord,
    RosterSnapshot, RoundAggregates, RoundReport,
};

use crate::components::Roster;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::setup::create_roster;

use super::decision::evaluate;
use super::interaction::{reconcile, resolve};
use super::schedule::build_pairings;
use super::value::sample_growth_rate;

/// A complete simulation: the roster, its configuration, and the seeded
/// generator every sample is drawn from.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    roster: Roster,
    rng: SmallRng,
    run_id: Uuid,
    seed: u64,
    round: u32,
    era: Era,
    next_record: u64,
}

impl Simulation {
    /// Validates the configuration and builds the initial roster with
    /// sampled values and fully initialized perception tables.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let roster = create_roster(&config, &mut rng);

        let sim = Self {
            config,
            roster,
            rng,
            run_id: Uuid::new_v4(),
            seed,
            round: 0,
            era: Era::Opening,
            next_record: 1,
        };
        info!(run_id = %sim.run_id, seed, countries = sim.roster.len(), "simulation created");
        Ok(sim)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Rounds completed so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether another round can still pair anyone.
    pub fn has_viable_pairing(&self) -> bool {
        self.roster.active_count() >= 2
    }

    /// Captures the current roster state.
    pub fn snapshot(&self) -> RosterSnapshot {
        self.roster.snapshot(self.round)
    }

    /// Runs one full round and returns its report.
    pub fn run_round(&mut self) -> Result<RoundReport, SimError> {
        self.round += 1;
        let era = self.era;
        debug!(round = self.round, ?era, "round start");

        // Growth phase: every active country, ascending id order
        for country in self.roster.iter_mut() {
            if !country.active {
                continue;
            }
            country.stats.reset();
            let rate = sample_growth_rate(&mut self.rng, &self.config);
            country.private_value *= 1.0 + rate;
            country.stats.growth_rate = rate;
            country.stats.value_at_round_start = country.private_value;
        }

        let starters = self.roster.active_ids();
        let total_value_start = self.roster.total_active_value();
        let pairings = build_pairings(&starters, era);
        debug!(round = self.round, pairs = pairings.len(), "schedule built");

        let mut records = Vec::new();
        let mut eliminated = Vec::new();
        let mut aggregates = RoundAggregates {
            countries_at_start: starters.len() as u32,
            total_value_start,
            ..RoundAggregates::default()
        };

        for (first, second) in pairings {
            // A country eliminated earlier this round skips its remaining
            // scheduled pairings
            if !self.roster.is_active(first) || !self.roster.is_active(second) {
                aggregates.pairs_skipped += 1;
                continue;
            }

            let (a, b) = self
                .roster
                .pair(first, second)
                .ok_or(SimError::UnknownCountry(first))?;
            let first_proposal = evaluate(a, b, &self.config, &mut self.rng);
            let second_proposal = evaluate(b, a, &self.config, &mut self.rng);
            let action = reconcile(&first_proposal, &second_proposal);

            let resolution = resolve(
                &mut self.roster,
                first,
                second,
                action,
                &self.config,
                &mut self.rng,
            )?;

            aggregates.interactions_executed += 1;
            aggregates.numeric_clamps += resolution.numeric_clamps;
            match &resolution.outcome {
                InteractionOutcome::BargainStruck { .. } => aggregates.bargains += 1,
                InteractionOutcome::AttackSucceeded { defender, .. } => {
                    aggregates.attacks += 1;
                    aggregates.attacks_successful += 1;
                    eliminated.push(*defender);
                }
                InteractionOutcome::AttackRepelled { .. } => {
                    aggregates.attacks += 1;
                    aggregates.attacks_failed += 1;
                }
            }

            records.push(InteractionRecord {
                record_id: generate_record_id(self.next_record),
                round: self.round,
                first,
                second,
                first_proposal,
                second_proposal,
                action,
                outcome: resolution.outcome,
            });
            self.next_record += 1;
        }

        // Finalize: per-country deltas and round aggregates
        aggregates.countries_at_end = self.roster.active_count() as u32;
        aggregates.total_value_end = self.roster.total_active_value();

        let country_stats = starters
            .iter()
            .map(|&id| self.country_round_stats(id, &eliminated))
            .collect::<Result<Vec<_>, _>>()?;

        if era == Era::Opening {
            self.era = Era::RoundRobin;
        }

        info!(
            round = self.round,
            interactions = aggregates.interactions_executed,
            bargains = aggregates.bargains,
            attacks = aggregates.attacks,
            eliminated = eliminated.len(),
            "round finished"
        );

        Ok(RoundReport {
            round: self.round,
            era,
            records,
            aggregates,
            country_stats,
            eliminated,
        })
    }

    fn country_round_stats(
        &self,
        id: CountryId,
        eliminated: &[CountryId],
    ) -> Result<CountryRoundStats, SimError> {
        let country = self.roster.get(id).ok_or(SimError::UnknownCountry(id))?;
        let start = country.stats.value_at_round_start;
        let end = country.private_value;
        let change = end - start;
        let percent_change = if start > 0.0 { change / start * 100.0 } else { 0.0 };

        Ok(CountryRoundStats {
            country: id,
            attacks_attempted: country.stats.attacks_attempted,
            attacks_won: country.stats.attacks_won,
            attacks_lost: country.stats.attacks_lost,
            defended: country.stats.defended,
            growth_rate: country.stats.growth_rate,
            value_at_round_start: start,
            value_at_round_end: end,
            change,
            percent_change,
            eliminated: eliminated.contains(&id),
        })
    }
}
