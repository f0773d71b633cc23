//! Tools to draw bounded normally distributed values from an explicitly passed
//! random number generator.

use rand::Rng;
use rand_distr::{Distribution, Normal};


fn normal_sampler(mean: f64, std: f64) -> Option<Normal<f64>> {
    Normal::new(mean, std.abs()).ok()
}

/// Draws from the normal distribution at the given mean and standard deviation and
/// clamps the output value between the given minimum and maximum, if standard
/// deviation is `0.` the mean is always returned
pub fn limited_distr<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64, minimum: f64, maximum: f64) -> f64 {
    if std == 0.0 {
        return mean;
    }

    let output = match normal_sampler(mean, std) {
        Some(normal) => normal.sample(rng),
        None => mean,
    };

    output.max(minimum).min(maximum)
}

/// Draws from the normal distribution at the given mean and standard deviation
/// until the value lands in `[minimum, maximum]`
///
/// If `max_attempts` is given and exhausted, the bound on the side of the last
/// draw is returned instead. When the bounds are equal the bound is returned
/// without sampling, and a standard deviation of `0.` returns the mean clamped
/// into the bounds.
pub fn regenerate_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std: f64,
    minimum: f64,
    maximum: f64,
    max_attempts: Option<usize>,
) -> f64 {
    if minimum == maximum {
        return minimum;
    }

    let normal = match normal_sampler(mean, std) {
        Some(normal) if std != 0. => normal,
        _ => return mean.max(minimum).min(maximum),
    };

    let mut attempts = 0;
    loop {
        let value = normal.sample(rng);
        if (minimum..=maximum).contains(&value) {
            return value;
        }

        attempts += 1;
        if max_attempts.is_some_and(|limit| attempts >= limit) {
            return if value > maximum { maximum } else { minimum };
        }
    }
}
