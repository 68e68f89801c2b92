//! Engine error taxonomy.

use deterrence_events::CountryId;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the simulation engine.
///
/// Configuration errors fail fast before any round state is touched.
/// `InactiveParticipant` and `UnknownCountry` indicate a scheduling bug and
/// halt the round rather than being skipped. Numeric guards are not errors:
/// values are clamped at zero, logged, and counted in the round aggregates.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An interaction reached the resolver against an eliminated country.
    #[error("interaction scheduled against inactive {0}")]
    InactiveParticipant(CountryId),

    /// An interaction referenced an id that is not in the roster.
    #[error("unknown {0}")]
    UnknownCountry(CountryId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::InactiveParticipant(CountryId(3));
        assert_eq!(
            err.to_string(),
            "interaction scheduled against inactive country_3"
        );

        let err = SimError::UnknownCountry(CountryId(9));
        assert_eq!(err.to_string(), "unknown country_9");
    }
}
