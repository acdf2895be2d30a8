//! Random number placeholders.

use rand::Rng;

use super::keys;
use super::value::PlaceholderSetBuilder;

/// Range used when the configured bounds are unusable
pub const FALLBACK_RANGE: (i64, i64) = (0, 100);

/// Uniform integer in `[min, max]`, or in [`FALLBACK_RANGE`] when `max <= min`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max > min {
        rng.random_range(min..=max)
    } else {
        rng.random_range(FALLBACK_RANGE.0..=FALLBACK_RANGE.1)
    }
}

pub(crate) fn set_rand_placeholders<R: Rng + ?Sized>(
    out: &mut PlaceholderSetBuilder,
    rng: &mut R,
    min: i64,
    max: i64,
) {
    out.set(keys::RAND_FLOAT, rng.random::<f64>());
    out.set(keys::RAND_INT, random_int(rng, min, max));
}
