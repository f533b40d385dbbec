//! Small RNG helpers shared by the random strategy.

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Generate a log-uniform random `f64` between `low` and `high`.
/// Requires `low > 0`.
#[inline]
pub(crate) fn log_f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    f64_range(rng, low.ln(), high.ln()).exp()
}
