//! Relative dispersion.

use crate::stats::mean;

/// Computes the coefficient of variation `s / x̄`.
///
/// `s` is the **sample** standard deviation (Bessel's correction, `n − 1`
/// denominator), computed two-pass: the mean first, then the sum of
/// squared deviations.
///
/// # Edge cases
/// - Empty input returns `0.0`.
/// - A zero mean returns `0.0`.
/// - A single non-zero value yields `0 / 0` in the variance and therefore
///   returns NaN. This is not guarded: one observation carries no
///   information about spread.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_concentration::dispersion::coefficient_of_variation;
/// assert_eq!(coefficient_of_variation(&[5.0, 5.0, 5.0, 5.0]), 0.0);
/// let cv = coefficient_of_variation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((cv - 0.427617987059879).abs() < 1e-12);
/// ```
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let Some(m) = mean(values) else {
        return 0.0;
    };
    if m == 0.0 {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum_sq: f64 = values.iter().map(|&v| (v - m) * (v - m)).sum();
    let variance = sum_sq / (n - 1.0);
    variance.sqrt() / m
}
