//! Concentration of activity among participants.
//!
//! - [`hhi`] — Herfindahl–Hirschman Index, the sum of squared shares.
//! - [`liveness_coefficient`] — how many of the largest participants are
//!   needed to cover one third of the total.
//!
//! Inputs are raw amounts (stake, volume, blocks produced, ...); shares are
//! derived from the total internally.

use tracing::trace;

use crate::stats::{sequential_sum, sorted_descending};

/// Fraction of the total used by [`liveness_coefficient`].
pub const LIVENESS_SHARE: f64 = 1.0 / 3.0;

/// Computes the Herfindahl–Hirschman Index of `values`.
///
/// # Formula
/// ```text
/// sᵢ  = xᵢ / Σx
/// HHI = Σ sᵢ²
/// ```
///
/// For non-negative input with a positive total the result lies in
/// `[1/n, 1]`: `1/n` for a perfectly even split and `1` for a single
/// participant.
///
/// Negative values are **not** rejected; they enter the formula as-is.
/// Use [`crate::inequality::gini`] when the input must be validated.
///
/// # Edge cases
/// - A zero total (including empty input) returns `0.0`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_concentration::concentration::hhi;
/// assert_eq!(hhi(&[10.0]), 1.0);
/// assert_eq!(hhi(&[1.0, 1.0, 1.0, 1.0]), 0.25);
/// assert_eq!(hhi(&[0.0, 0.0]), 0.0);
/// ```
pub fn hhi(values: &[f64]) -> f64 {
    let total = sequential_sum(values);
    if total == 0.0 {
        trace!(n = values.len(), "hhi: zero total, returning 0");
        return 0.0;
    }
    values
        .iter()
        .map(|&v| v / total)
        .fold(0.0, |acc, share| acc + share * share)
}

/// HHI on the 0–10 000 scale used in antitrust guidelines.
///
/// Equivalent to `hhi(values) * 10_000`. Markets above 1 800 points are
/// conventionally considered highly concentrated.
///
/// # Examples
/// ```
/// use u_concentration::concentration::hhi_points;
/// assert!((hhi_points(&[50.0, 30.0, 20.0]) - 3800.0).abs() < 1e-9);
/// ```
pub fn hhi_points(values: &[f64]) -> f64 {
    hhi(values) * 10_000.0
}

/// Computes the liveness coefficient: the smallest number of top
/// contributors whose combined amount reaches one third of the total.
///
/// Equivalent to [`liveness_coefficient_at`] with [`LIVENESS_SHARE`]; the
/// threshold is `total / 3`.
///
/// # Edge cases
/// - Empty input returns `0`.
/// - An all-zero sample returns `1`: the threshold is `0` and the first
///   element already meets it.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_concentration::concentration::liveness_coefficient;
/// assert_eq!(liveness_coefficient(&[10.0, 5.0, 3.0, 2.0]), 1);
/// assert_eq!(liveness_coefficient(&[1.0; 6]), 2);
/// assert_eq!(liveness_coefficient(&[]), 0);
/// ```
pub fn liveness_coefficient(values: &[f64]) -> usize {
    liveness_coefficient_at(values, LIVENESS_SHARE)
}

/// Smallest `k` such that the `k` largest values sum to at least
/// `share × total`.
///
/// Values are visited in descending order and a running sum is compared
/// against the threshold with `>=`. The total is summed in the same
/// descending order as the running sum, and the threshold is formed as
/// `total / (1 / share)`, which is exactly `total / 3` for
/// [`LIVENESS_SHARE`]. If no prefix reaches the threshold
/// (only possible when the total is not positive, or through rounding at
/// `share = 1`), the full length is returned.
///
/// `share` is used as given; callers that accept it from outside should
/// validate it first (see [`crate::summary::SummaryConfig::validate`]).
///
/// # Examples
/// ```
/// use u_concentration::concentration::liveness_coefficient_at;
/// // Majority: 3 of the top values are needed to pass half of 20.
/// assert_eq!(liveness_coefficient_at(&[4.0, 4.0, 4.0, 4.0, 4.0], 0.5), 3);
/// ```
pub fn liveness_coefficient_at(values: &[f64], share: f64) -> usize {
    let sorted = sorted_descending(values);
    let threshold = sequential_sum(&sorted) / share.recip();
    prefix_reaching(&sorted, threshold)
}

fn prefix_reaching(sorted: &[f64], threshold: f64) -> usize {
    let mut partial = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        partial += x;
        if partial >= threshold {
            return i + 1;
        }
    }
    sorted.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Plain walk: descending sort, left-to-right total, threshold `total / 3`.
#[cfg(test)]
pub(crate) fn reference_liveness(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    let total = sorted.iter().fold(0.0, |a, &b| a + b);
    let mut partial = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        partial += x;
        if partial >= total / 3.0 {
            return i + 1;
        }
    }
    sorted.len()
}
