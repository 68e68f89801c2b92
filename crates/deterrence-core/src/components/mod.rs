//! Core data components: countries and the roster that owns them.

pub mod country;
pub mod roster;

pub use country::{Country, RoundStats};
pub use roster::Roster;
