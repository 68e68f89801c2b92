//! Shared record types and serialization for the deterrence simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the engine crate and for any downstream
//! analysis or visualization tool that consumes interaction records.

pub mod record;
pub mod report;
pub mod snapshot;

// Re-export record types
pub use record::{
    generate_record_id, ActionChoice, CountryId, EvBreakdown, InteractionOutcome,
    InteractionRecord, PairAction, Proposal,
};

// Re-export report types
pub use report::{CountryRoundStats, Era, RoundAggregates, RoundReport};

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, CountrySnapshot, PerceivedEntry, RosterSnapshot};
