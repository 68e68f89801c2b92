//! Configuration System
//!
//! All model tunables live in an explicit, immutable [`SimConfig`] passed
//! into every entry point. There is no process-wide state; a config can be
//! loaded from a TOML file with unspecified fields falling back to the
//! defaults of the original model.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of countries created at simulation start
    pub num_countries: u32,
    /// Lower bound of the uniform initial private value
    pub initial_value_min: f64,
    /// Upper bound of the uniform initial private value
    pub initial_value_max: f64,
    /// Half-width of the relative band for perceived-value sampling
    pub perceived_value_accuracy: f64,
    /// Lower bound of the per-round multiplicative growth rate
    pub growth_rate_min: f64,
    /// Upper bound of the per-round multiplicative growth rate
    pub growth_rate_max: f64,
    /// Base success cost as a share of the post-acquisition value pool
    pub attack_cost_percentage: f64,
    /// Base failure cost as a share of the attacker's own value
    pub failed_attack_cost_percentage: f64,
    /// Maximum success-cost discount reached as the attacker's value share
    /// approaches 1
    pub attack_success_discount_cap: f64,
    /// Share of its value a defender loses when repelling an attack
    pub defense_loss_percentage: f64,
    /// Cap on a successful attacker's gain, as a multiple of its own
    /// pre-attack value
    pub max_gain_multiplier: f64,
    /// Half-width of the relative band perturbing the perceived win
    /// probability
    pub perceived_cost_accuracy: f64,
    /// Upper bound of the uniform bargain surplus split
    pub bargain_surplus_percentage: f64,
    /// Deterministic bargain expectation as a share of own value
    pub bargain_ev_percentage: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_countries: 10,
            initial_value_min: 100.0,
            initial_value_max: 1000.0,
            perceived_value_accuracy: 0.15,
            growth_rate_min: 0.0,
            growth_rate_max: 0.05,
            attack_cost_percentage: 0.10,
            failed_attack_cost_percentage: 0.10,
            attack_success_discount_cap: 0.5,
            defense_loss_percentage: 0.10,
            max_gain_multiplier: 2.0,
            perceived_cost_accuracy: 0.15,
            bargain_surplus_percentage: 0.10,
            bargain_ev_percentage: 0.05,
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter domain, failing fast before a round starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_countries < 2 {
            return Err(ConfigError::TooFewCountries(self.num_countries));
        }
        if self.initial_value_min < 0.0 {
            return Err(ConfigError::out_of_range(
                "initial_value_min",
                self.initial_value_min,
                "must be non-negative",
            ));
        }
        if self.initial_value_max < self.initial_value_min {
            return Err(ConfigError::EmptyRange {
                name: "initial_value",
                min: self.initial_value_min,
                max: self.initial_value_max,
            });
        }
        if self.growth_rate_min <= -1.0 {
            return Err(ConfigError::out_of_range(
                "growth_rate_min",
                self.growth_rate_min,
                "must be greater than -1",
            ));
        }
        if self.growth_rate_max < self.growth_rate_min {
            return Err(ConfigError::EmptyRange {
                name: "growth_rate",
                min: self.growth_rate_min,
                max: self.growth_rate_max,
            });
        }

        // An accuracy of 1 or more would allow negative or degenerate samples
        Self::check_accuracy("perceived_value_accuracy", self.perceived_value_accuracy)?;
        Self::check_accuracy("perceived_cost_accuracy", self.perceived_cost_accuracy)?;

        Self::check_fraction("attack_cost_percentage", self.attack_cost_percentage)?;
        Self::check_fraction(
            "failed_attack_cost_percentage",
            self.failed_attack_cost_percentage,
        )?;
        Self::check_fraction(
            "attack_success_discount_cap",
            self.attack_success_discount_cap,
        )?;
        Self::check_fraction("defense_loss_percentage", self.defense_loss_percentage)?;
        Self::check_fraction("bargain_surplus_percentage", self.bargain_surplus_percentage)?;
        Self::check_fraction("bargain_ev_percentage", self.bargain_ev_percentage)?;

        if self.max_gain_multiplier <= 0.0 {
            return Err(ConfigError::out_of_range(
                "max_gain_multiplier",
                self.max_gain_multiplier,
                "must be positive",
            ));
        }

        Ok(())
    }

    fn check_fraction(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::out_of_range(name, value, "must be within 0..=1"));
        }
        Ok(())
    }

    fn check_accuracy(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&value) {
            return Err(ConfigError::out_of_range(
                name,
                value,
                "must be within 0..1 (exclusive of 1)",
            ));
        }
        Ok(())
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("need at least 2 countries, got {0}")]
    TooFewCountries(u32),

    #[error("{name} range is empty: min {min} > max {max}")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} = {value}: {constraint}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl ConfigError {
    fn out_of_range(name: &'static str, value: f64, constraint: &'static str) -> Self {
        ConfigError::OutOfRange {
            name,
            value,
            constraint,
        }
    }
}
