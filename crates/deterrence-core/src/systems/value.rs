//! Value Model
//!
//! Bounded uniform sampling for initial values, perceived values, and
//! growth rates. Pure sampling with no side effects; callers assign.

use rand::Rng;

use crate::config::SimConfig;

/// Samples a fresh initial private value.
pub fn sample_initial_value<R: Rng>(rng: &mut R, config: &SimConfig) -> f64 {
    rng.gen_range(config.initial_value_min..=config.initial_value_max)
}

/// Samples a noisy estimate of `true_value` within the relative `accuracy`
/// band. Never negative.
pub fn sample_perceived<R: Rng>(rng: &mut R, true_value: f64, accuracy: f64) -> f64 {
    let lo = true_value * (1.0 - accuracy);
    let hi = true_value * (1.0 + accuracy);
    rng.gen_range(lo..=hi).max(0.0)
}

/// Samples a per-round growth rate, applied multiplicatively as `1 + rate`.
pub fn sample_growth_rate<R: Rng>(rng: &mut R, config: &SimConfig) -> f64 {
    rng.gen_range(config.growth_rate_min..=config.growth_rate_max)
}
