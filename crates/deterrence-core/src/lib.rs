//! Deterrence Bargaining Simulation Engine
//!
//! Countries with private strength values repeatedly choose between costly
//! attack and negotiated bargain under imperfect information about each
//! other, with stochastic attack resolution, permanent elimination, and a
//! perception-update process after every interaction.
//!
//! Public API for the engine: construct a [`Simulation`] from a validated
//! [`SimConfig`] and a seed, then call [`Simulation::run_round`] to obtain
//! one [`deterrence_events::RoundReport`] per round.

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Country, Roster, RoundStats};
pub use config::{ConfigError, SimConfig};
pub use error::SimError;
pub use output::{RecordLogger, RunStats, RunSummary};
pub use systems::Simulation;

// Schema types flow through unchanged for downstream consumers
pub use deterrence_events as events;
