//! Sampling for "insufficient data" placeholder scores.
//!
//! Sparse accounts get a plausible mid-range score instead of a flat floor value. The
//! sampler is injected into the engine so callers that need reproducible output can
//! seed it or pin it outright.

use std::sync::Mutex;

pub trait PlaceholderSampler: Send + Sync {
    /// Returns a value in `[low, high]`.
    fn sample(&self, low: f64, high: f64) -> f64;
}

/// Draws from the thread-local `fastrand` generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl PlaceholderSampler for RandomSampler {
    fn sample(&self, low: f64, high: f64) -> f64 {
        interpolate(low, high, fastrand::f64())
    }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct SeededSampler {
    rng: Mutex<fastrand::Rng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl PlaceholderSampler for SeededSampler {
    fn sample(&self, low: f64, high: f64) -> f64 {
        let fraction = match self.rng.lock() {
            Ok(mut rng) => rng.f64(),
            // A panic elsewhere poisoned the lock; the generator state is still usable.
            Err(poisoned) => poisoned.into_inner().f64(),
        };
        interpolate(low, high, fraction)
    }
}

/// Always returns the same relative position inside the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler {
    fraction: f64,
}

impl FixedSampler {
    /// Non-finite fractions fall back to the midpoint.
    pub fn new(fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Self { fraction }
    }

    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl PlaceholderSampler for FixedSampler {
    fn sample(&self, low: f64, high: f64) -> f64 {
        interpolate(low, high, self.fraction)
    }
}

fn interpolate(low: f64, high: f64, fraction: f64) -> f64 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    (low + (high - low) * fraction).clamp(low, high)
}
