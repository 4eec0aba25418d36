#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn fixed_jitter_repeats_value() {
    let mut j = FixedJitter(4.5);
    assert_eq!(j.rotation(), 4.5);
    assert_eq!(j.rotation(), 4.5);
}

#[test]
fn fixed_jitter_default_is_zero() {
    assert_eq!(FixedJitter::default().rotation(), 0.0);
}

#[test]
fn rng_jitter_stays_within_bounds() {
    let mut j = RngJitter::new(StdRng::seed_from_u64(7), 10.0);
    for _ in 0..1000 {
        let r = j.rotation();
        assert!((-10.0..=10.0).contains(&r), "rotation {r} out of range");
    }
}

#[test]
fn rng_jitter_is_deterministic_for_a_seed() {
    let mut a = RngJitter::new(StdRng::seed_from_u64(42), 10.0);
    let mut b = RngJitter::new(StdRng::seed_from_u64(42), 10.0);
    for _ in 0..16 {
        assert_eq!(a.rotation(), b.rotation());
    }
}

#[test]
fn rng_jitter_zero_range_is_zero() {
    let mut j = RngJitter::new(StdRng::seed_from_u64(1), 0.0);
    assert_eq!(j.rotation(), 0.0);
}

#[test]
fn rng_jitter_negative_max_uses_magnitude() {
    let mut j = RngJitter::new(StdRng::seed_from_u64(3), -5.0);
    for _ in 0..200 {
        assert!(j.rotation().abs() <= 5.0);
    }
}

#[test]
fn rng_jitter_caps_huge_range_at_half_turn() {
    for max in [1e308, f64::INFINITY, f64::NEG_INFINITY, 720.0] {
        let mut j = RngJitter::new(StdRng::seed_from_u64(5), max);
        for _ in 0..100 {
            let r = j.rotation();
            assert!((-180.0..=180.0).contains(&r), "max {max} gave {r}");
        }
    }
}

#[test]
fn rng_jitter_nan_range_is_zero() {
    let mut j = RngJitter::new(StdRng::seed_from_u64(5), f64::NAN);
    assert_eq!(j.rotation(), 0.0);
}
