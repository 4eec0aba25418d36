//! Rotation jitter for new items.
//!
//! New decorations land slightly askew, like a sticker tossed onto paper.
//! The source of that randomness is injected so tests can pin it.

#[cfg(test)]
#[path = "jitter_test.rs"]
mod jitter_test;

use rand::Rng;

use crate::consts::MAX_JITTER_DEGREES;

/// Source of creation-time rotation, in degrees.
pub trait Jitter {
    fn rotation(&mut self) -> f64;
}

/// Uniform jitter in `[-max_degrees, max_degrees]` drawn from any `rand` RNG.
#[derive(Debug)]
pub struct RngJitter<R> {
    rng: R,
    max_degrees: f64,
}

impl<R: Rng> RngJitter<R> {
    /// Negative `max_degrees` is treated as its magnitude, values above 180
    /// are capped at 180, and NaN disables jitter.
    pub fn new(rng: R, max_degrees: f64) -> Self {
        let max_degrees = if max_degrees.is_nan() { 0.0 } else { max_degrees.abs().min(MAX_JITTER_DEGREES) };
        Self { rng, max_degrees }
    }
}

impl<R: Rng> Jitter for RngJitter<R> {
    fn rotation(&mut self) -> f64 {
        self.rng.random_range(-self.max_degrees..=self.max_degrees)
    }
}

/// Always returns the same rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn rotation(&mut self) -> f64 {
        self.0
    }
}
