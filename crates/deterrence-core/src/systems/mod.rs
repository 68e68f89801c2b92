//! Simulation systems: sampling, decisions, interaction resolution,
//! perception updates, scheduling, and the round orchestrator.

pub mod decision;
pub mod interaction;
pub mod perception;
pub mod round;
pub mod schedule;
pub mod value;

// Re-export commonly used entry points
pub use decision::{
    attack_ev, bargain_ev, capped_gain, evaluate, failure_cost, success_cost,
    true_win_probability,
};
pub use interaction::{reconcile, resolve, Resolution};
pub use perception::{initialize_ledgers, refresh_perceptions};
pub use round::Simulation;
pub use schedule::build_pairings;
pub use value::{sample_growth_rate, sample_initial_value, sample_perceived};
