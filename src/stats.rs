//! Summation and ordering primitives shared by the metric modules.
//!
//! Totals that are compared against a running partial sum (thresholds,
//! zero checks, shares) use [`sequential_sum`], so both sides round the same
//! way. The mean behind the coefficient of variation uses Neumaier
//! compensated summation. Sorting always operates on a private copy; the
//! caller's slice is never reordered.

use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Summation
// ---------------------------------------------------------------------------

/// Left-to-right sum with no compensation.
///
/// Rounds exactly like a running `partial += x` over the same slice, so a
/// threshold derived from it ties with the partial sum where the plain
/// arithmetic does. Overflow yields `±∞`, never NaN from finite input.
///
/// # Examples
/// ```
/// use u_concentration::stats::sequential_sum;
/// assert_eq!(sequential_sum(&[0.1, 0.2]), 0.1 + 0.2);
/// assert_eq!(sequential_sum(&[1e308, 1e308]), f64::INFINITY);
/// ```
pub fn sequential_sum(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// If the compensated result is not finite (the running sum overflowed, or
/// an addend is infinite), the plain running sum is returned instead, since
/// the correction term degenerates to `∞ − ∞`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_concentration::stats::compensated_sum;
/// assert_eq!(compensated_sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(compensated_sum(&[]), 0.0);
/// ```
pub fn compensated_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    let total = sum + c;
    if total.is_finite() {
        total
    } else {
        sum
    }
}

/// Arithmetic mean via [`compensated_sum`], or `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        None
    } else {
        Some(compensated_sum(data) / data.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// Sorted copies
// ---------------------------------------------------------------------------

/// Returns an ascending copy of `data`.
///
/// Uses [`f64::total_cmp`], so the sort never panics. A positive NaN is
/// placed after `+∞`, a negative NaN before `−∞`.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
pub fn sorted_ascending(data: &[f64]) -> Vec<f64> {
    sorted_by(data, f64::total_cmp)
}

/// Returns a descending copy of `data`.
///
/// Mirror image of [`sorted_ascending`].
pub fn sorted_descending(data: &[f64]) -> Vec<f64> {
    sorted_by(data, |a, b| b.total_cmp(a))
}

fn sorted_by<F>(data: &[f64], cmp: F) -> Vec<f64>
where
    F: FnMut(&f64, &f64) -> Ordering,
{
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(cmp);
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn ascending_is_reverse_of_descending(
            data in proptest::collection::vec(-1e9_f64..1e9, 0..=100)
        ) {
            let mut asc = sorted_ascending(&data);
            asc.reverse();
            prop_assert_eq!(asc, sorted_descending(&data));
        }

        #[test]
        fn compensated_sum_close_to_naive(
            data in proptest::collection::vec(-1e6_f64..1e6, 0..=100)
        ) {
            let naive: f64 = data.iter().sum();
            let comp = compensated_sum(&data);
            let scale: f64 = data.iter().map(|x| x.abs()).sum::<f64>().max(1.0);
            prop_assert!((naive - comp).abs() < 1e-12 * scale, "naive={} comp={}", naive, comp);
        }
    }
}
