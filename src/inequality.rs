//! Inequality of a non-negative distribution.
//!
//! # Algorithm
//!
//! The Gini coefficient is estimated from the ascending-sorted sample via
//! the cumulative-share (Lorenz curve) form:
//!
//! ```text
//! C_i = x₍₁₎ + … + x₍ᵢ₎
//! G   = (n + 1 − 2 · Σᵢ C_i / C_n) / n
//! ```
//!
//! `Σᵢ C_i / C_n` is `n` times the area under the empirical Lorenz curve
//! (right-endpoint rule), so `G = 0` for a perfectly even sample and
//! `G → (n − 1)/n` when one value holds everything.
//!
//! Reference: Gini (1912), *Variabilità e mutabilità*; Dorfman (1979),
//! "A Formula for the Gini Coefficient", *Review of Economics and
//! Statistics* 61(1), pp. 146–149.

use tracing::{debug, trace};

use crate::error::MetricsError;
use crate::stats::{sequential_sum, sorted_ascending};

/// Computes the Gini coefficient of `values`.
///
/// # Errors
/// Returns [`MetricsError::InvalidInput`] if any value is negative or NaN.
/// The whole computation is aborted; no partial result is produced.
///
/// # Edge cases
/// - Empty input or an all-zero sample returns `Ok(0.0)`: there is nothing
///   to distribute, hence no inequality.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_concentration::inequality::gini;
/// // Perfect equality
/// assert!(gini(&[5.0, 5.0, 5.0, 5.0]).unwrap().abs() < 1e-15);
/// // One holder of everything among four
/// assert!((gini(&[0.0, 0.0, 0.0, 8.0]).unwrap() - 0.75).abs() < 1e-15);
/// // Negative values are rejected
/// assert!(gini(&[1.0, -2.0, 3.0]).is_err());
/// ```
pub fn gini(values: &[f64]) -> Result<f64, MetricsError> {
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| **v < 0.0 || v.is_nan())
    {
        debug!(index, value, "gini rejected input");
        return Err(if value.is_nan() {
            MetricsError::invalid_input("values must not be NaN")
        } else {
            MetricsError::invalid_input("values cannot be negative")
        });
    }

    if sequential_sum(values) == 0.0 {
        trace!(n = values.len(), "gini: zero total, returning 0");
        return Ok(0.0);
    }

    let sorted = sorted_ascending(values);
    let n = sorted.len() as f64;

    let mut cum_sum = 0.0;
    let mut cum_total = 0.0;
    for &x in &sorted {
        cum_sum += x;
        cum_total += cum_sum;
    }

    Ok((n + 1.0 - 2.0 * (cum_total / cum_sum)) / n)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gini_uniform_is_zero() {
        let g = gini(&[3.0; 10]).unwrap();
        assert!(g.abs() < 1e-15, "got {g}");
    }

    #[test]
    fn test_gini_known_value() {
        // sorted [1, 2, 3, 4]: C = 1, 3, 6, 10; ΣC = 20
        // G = (5 − 2·20/10) / 4 = 0.25
        let g = gini(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((g - 0.25).abs() < 1e-15, "got {g}");
    }

    #[test]
    fn test_gini_single_holder() {
        let g = gini(&[0.0, 0.0, 0.0, 0.0, 10.0]).unwrap();
        assert!((g - 0.8).abs() < 1e-15, "got {g}");
    }

    #[test]
    fn test_gini_single_value() {
        assert_eq!(gini(&[7.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_negative_rejected() {
        let err = gini(&[1.0, -2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            MetricsError::InvalidInput("values cannot be negative".into())
        );
    }

    #[test]
    fn test_gini_negative_zero_is_allowed() {
        assert_eq!(gini(&[-0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_nan_rejected() {
        let err = gini(&[1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, MetricsError::InvalidInput("values must not be NaN".into()));
    }

    #[test]
    fn test_gini_all_zero() {
        assert_eq!(gini(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_empty() {
        assert_eq!(gini(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_does_not_mutate_input() {
        let data = vec![9.0, 1.0, 5.0, 3.0];
        let first = gini(&data).unwrap();
        let second = gini(&data).unwrap();
        assert_eq!(data, vec![9.0, 1.0, 5.0, 3.0]);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
