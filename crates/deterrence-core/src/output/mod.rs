//! Output layer: run-level statistics accumulation and JSONL record logging.

pub mod logger;
pub mod stats;

pub use logger::RecordLogger;
pub use stats::{RoundRow, RunStats, RunSummary};
