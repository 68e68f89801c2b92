//! Decision Engine
//!
//! Expected-value comparison between attacking and bargaining, evaluated
//! over a read-only snapshot of current state. Every proposal carries two
//! breakdowns: the perceived one (perceived defender value, perturbed win
//! probability) that drives the choice, and the actual one (true values,
//! true probability) kept for bookkeeping only.
//!
//! Win probability uses the simple-strength model `a / (a + d)`; the costs
//! scale with relative size in the attacker's favor when it dwarfs the
//! defender, and against it when the defender is comparable or larger.

use rand::Rng;

use deterrence_events::{ActionChoice, EvBreakdown, Proposal};

use crate::components::Country;
use crate::config::SimConfig;

use super::value::sample_perceived;

/// Scale bounds for the failure cost.
pub mod costs {
    /// Failure-cost scale against a negligibly small defender
    pub const FAILURE_SCALE_FLOOR: f64 = 0.25;
    /// Failure-cost scale against a comparable or larger defender
    pub const FAILURE_SCALE_CEIL: f64 = 0.75;
}

/// Probability that an attacker of strength `attacker_value` beats a
/// defender of strength `defender_value`. Even odds when both are zero.
pub fn true_win_probability(attacker_value: f64, defender_value: f64) -> f64 {
    let total = attacker_value + defender_value;
    if total <= 0.0 {
        return 0.5;
    }
    attacker_value / total
}

/// Cost of a successful attack: a base share of the post-acquisition value
/// pool, discounted smoothly as the attacker's share of that pool grows.
pub fn success_cost(attacker_value: f64, defender_value: f64, config: &SimConfig) -> f64 {
    let total = attacker_value + defender_value;
    if total <= 0.0 {
        return 0.0;
    }
    let share = attacker_value / total;
    let discount = config.attack_success_discount_cap * share;
    config.attack_cost_percentage * total * (1.0 - discount)
}

/// Cost of a failed attack: a base share of the attacker's own value,
/// scaled by the defender's relative size.
pub fn failure_cost(attacker_value: f64, defender_value: f64, config: &SimConfig) -> f64 {
    let ratio = if attacker_value > 0.0 {
        (defender_value / attacker_value).min(1.0)
    } else {
        1.0
    };
    let scale =
        costs::FAILURE_SCALE_FLOOR + (costs::FAILURE_SCALE_CEIL - costs::FAILURE_SCALE_FLOOR) * ratio;
    config.failed_attack_cost_percentage * attacker_value * scale
}

/// Value transferred on success, capped at a multiple of the attacker's own
/// pre-attack value.
pub fn capped_gain(attacker_value: f64, defender_value: f64, config: &SimConfig) -> f64 {
    defender_value.min(config.max_gain_multiplier * attacker_value)
}

/// Probability-weighted payoff of attacking.
pub fn attack_ev(win_probability: f64, gain: f64, success_cost: f64, failure_cost: f64) -> f64 {
    win_probability * (gain - success_cost) + (1.0 - win_probability) * (-failure_cost)
}

/// Deterministic expected payoff of bargaining.
pub fn bargain_ev(own_value: f64, config: &SimConfig) -> f64 {
    config.bargain_ev_percentage * own_value
}

fn breakdown(
    attacker_value: f64,
    defender_value: f64,
    win_probability: f64,
    config: &SimConfig,
) -> EvBreakdown {
    let gain = capped_gain(attacker_value, defender_value, config);
    let success = success_cost(attacker_value, defender_value, config);
    let failure = failure_cost(attacker_value, defender_value, config);
    EvBreakdown {
        win_probability,
        capped_gain: gain,
        success_cost: success,
        failure_cost: failure,
        attack_ev: attack_ev(win_probability, gain, success, failure),
        bargain_ev: bargain_ev(attacker_value, config),
    }
}

/// Evaluates one side of a pairing and produces its proposal.
///
/// Draws exactly one sample (the perceived-odds perturbation) from `rng`.
pub fn evaluate<R: Rng>(
    attacker: &Country,
    defender: &Country,
    config: &SimConfig,
    rng: &mut R,
) -> Proposal {
    let own = attacker.private_value;
    let defender_true = defender.private_value;
    let defender_perceived = attacker.perceived_value_of(defender.id);

    let p_true = true_win_probability(own, defender_true);
    let p_perceived = sample_perceived(rng, p_true, config.perceived_cost_accuracy).min(1.0);

    let perceived = breakdown(own, defender_perceived, p_perceived, config);
    let actual = breakdown(own, defender_true, p_true, config);

    let choice = if perceived.attack_ev > perceived.bargain_ev {
        ActionChoice::Attack
    } else {
        ActionChoice::Bargain
    };

    Proposal {
        country: attacker.id,
        choice,
        perceived,
        actual,
    }
}
