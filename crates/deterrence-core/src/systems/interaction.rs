//! Interaction Resolver
//!
//! Reconciles the two independent proposals of a pairing into one action,
//! then resolves it: stochastic attack outcome with value transfer,
//! elimination and cost deduction, or a randomized bargain surplus split.
//! Every resolution ends with a perception refresh for both participants.

use rand::Rng;
use tracing::{debug, warn};

use deterrence_events::{ActionChoice, CountryId, InteractionOutcome, PairAction, Proposal};

use crate::components::Roster;
use crate::config::SimConfig;
use crate::error::SimError;

use super::decision::{capped_gain, failure_cost, success_cost, true_win_probability};
use super::perception::refresh_perceptions;

/// Result of resolving one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub outcome: InteractionOutcome,
    /// Times a value had to be clamped at zero during this resolution
    pub numeric_clamps: u32,
}

/// Reconciles two independent proposals into one action for the pair.
///
/// If either side prefers attack, an attack occurs; when both do, the
/// participant listed first in the schedule strikes first and resolves as
/// the sole attacker.
pub fn reconcile(first: &Proposal, second: &Proposal) -> PairAction {
    match (first.choice, second.choice) {
        (ActionChoice::Bargain, ActionChoice::Bargain) => PairAction::BothBargain,
        (ActionChoice::Attack, ActionChoice::Attack) => PairAction::BothAttack,
        (ActionChoice::Attack, ActionChoice::Bargain) => PairAction::OneAttacks(first.country),
        (ActionChoice::Bargain, ActionChoice::Attack) => PairAction::OneAttacks(second.country),
    }
}

/// Resolves a reconciled action between two still-active countries.
///
/// Draws exactly one sample from `rng` for the resolution itself (the win
/// roll or the bargain split) before the perception refresh draws.
pub fn resolve<R: Rng>(
    roster: &mut Roster,
    first: CountryId,
    second: CountryId,
    action: PairAction,
    config: &SimConfig,
    rng: &mut R,
) -> Result<Resolution, SimError> {
    for id in [first, second] {
        let country = roster.get(id).ok_or(SimError::UnknownCountry(id))?;
        if !country.active {
            return Err(SimError::InactiveParticipant(id));
        }
    }

    let resolution = match action {
        PairAction::BothBargain => resolve_bargain(roster, first, second, config, rng)?,
        PairAction::OneAttacks(attacker) => {
            let defender = if attacker == first { second } else { first };
            resolve_attack(roster, attacker, defender, config, rng)?
        }
        // Both want war: the first-listed participant strikes first
        PairAction::BothAttack => resolve_attack(roster, first, second, config, rng)?,
    };

    refresh_perceptions(roster, [first, second], config.perceived_value_accuracy, rng);

    if resolution.numeric_clamps > 0 {
        warn!(
            first = %first,
            second = %second,
            clamps = resolution.numeric_clamps,
            "value clamped at zero during resolution"
        );
    }
    Ok(resolution)
}

fn resolve_attack<R: Rng>(
    roster: &mut Roster,
    attacker_id: CountryId,
    defender_id: CountryId,
    config: &SimConfig,
    rng: &mut R,
) -> Result<Resolution, SimError> {
    let (attacker, defender) = roster
        .pair_mut(attacker_id, defender_id)
        .ok_or(SimError::UnknownCountry(defender_id))?;

    let attacker_pre = attacker.private_value;
    let defender_pre = defender.private_value;
    let win_probability = true_win_probability(attacker_pre, defender_pre);

    let roll: f64 = rng.gen();
    let mut clamps = 0;

    attacker.stats.attacks_attempted += 1;

    let outcome = if roll < win_probability {
        let transfer = capped_gain(attacker_pre, defender_pre, config);
        let cost = success_cost(attacker_pre, defender_pre, config);
        attacker.private_value =
            clamp_non_negative(attacker_pre + transfer - cost, &mut clamps);
        attacker.stats.attacks_won += 1;
        defender.eliminate();

        debug!(
            attacker = %attacker_id,
            defender = %defender_id,
            transfer,
            cost,
            "attack succeeded, defender eliminated"
        );

        InteractionOutcome::AttackSucceeded {
            attacker: attacker_id,
            defender: defender_id,
            transfer,
            cost,
            attacker_value: attacker.private_value,
        }
    } else {
        let attacker_cost = failure_cost(attacker_pre, defender_pre, config);
        let defender_loss = defender_pre * config.defense_loss_percentage;
        attacker.private_value = clamp_non_negative(attacker_pre - attacker_cost, &mut clamps);
        defender.private_value = clamp_non_negative(defender_pre - defender_loss, &mut clamps);
        attacker.stats.attacks_lost += 1;
        defender.stats.defended += 1;

        debug!(
            attacker = %attacker_id,
            defender = %defender_id,
            attacker_cost,
            defender_loss,
            "attack repelled"
        );

        InteractionOutcome::AttackRepelled {
            attacker: attacker_id,
            defender: defender_id,
            attacker_cost,
            defender_loss,
            attacker_value: attacker.private_value,
            defender_value: defender.private_value,
        }
    };

    Ok(Resolution {
        outcome,
        numeric_clamps: clamps,
    })
}

fn resolve_bargain<R: Rng>(
    roster: &mut Roster,
    first_id: CountryId,
    second_id: CountryId,
    config: &SimConfig,
    rng: &mut R,
) -> Result<Resolution, SimError> {
    let (first, second) = roster
        .pair_mut(first_id, second_id)
        .ok_or(SimError::UnknownCountry(second_id))?;

    let fraction = rng.gen_range(0.0..=config.bargain_surplus_percentage);
    let first_gain = fraction * first.private_value;
    let second_gain = (config.bargain_surplus_percentage - fraction) * second.private_value;

    first.private_value += first_gain;
    second.private_value += second_gain;

    debug!(
        first = %first_id,
        second = %second_id,
        first_gain,
        second_gain,
        "bargain struck"
    );

    Ok(Resolution {
        outcome: InteractionOutcome::BargainStruck {
            first_gain,
            second_gain,
            first_value: first.private_value,
            second_value: second.private_value,
        },
        numeric_clamps: 0,
    })
}

fn clamp_non_negative(value: f64, clamps: &mut u32) -> f64 {
    if value < 0.0 {
        *clamps += 1;
        0.0
    } else {
        value
    }
}
