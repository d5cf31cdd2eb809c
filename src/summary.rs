//! All four metrics computed over one sample.
//!
//! [`summarize`] is the convenience entry point for callers that want a
//! single serializable record rather than calling each metric separately.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::concentration::{hhi, liveness_coefficient_at, LIVENESS_SHARE};
use crate::dispersion::coefficient_of_variation;
use crate::error::MetricsError;
use crate::inequality::gini;
use crate::stats::sequential_sum;

/// Parameters for [`summarize`].
///
/// Deserializable from any serde format; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Share of the total the liveness coefficient must reach.
    /// Must be finite and in `(0, 1]`. Defaults to one third.
    pub liveness_share: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            liveness_share: LIVENESS_SHARE,
        }
    }
}

impl SummaryConfig {
    /// Checks that the configuration is usable.
    ///
    /// # Errors
    /// Returns [`MetricsError::InvalidInput`] if `liveness_share` is not
    /// finite or lies outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), MetricsError> {
        let s = self.liveness_share;
        if !s.is_finite() || s <= 0.0 || s > 1.0 {
            return Err(MetricsError::InvalidInput(format!(
                "liveness_share must be in (0, 1], got {s}"
            )));
        }
        Ok(())
    }
}

/// Gini, HHI, liveness coefficient and CV of one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Sum of all values.
    pub total: f64,
    /// Gini coefficient, see [`gini`].
    pub gini: f64,
    /// Herfindahl–Hirschman Index on the 0–1 scale, see [`hhi`].
    pub hhi: f64,
    /// Number of top holders reaching `liveness_share` of the total.
    /// Equals [`crate::concentration::liveness_coefficient`] under the
    /// default config.
    pub liveness: usize,
    /// Coefficient of variation. NaN for a single non-zero value.
    pub cv: f64,
}

/// Computes every metric over `values`.
///
/// # Errors
/// - [`MetricsError::InvalidInput`] if `config` fails
///   [`SummaryConfig::validate`].
/// - [`MetricsError::InvalidInput`] if any value is negative or NaN
///   (propagated from [`gini`]).
///
/// # Examples
/// ```
/// use u_concentration::summary::{summarize, SummaryConfig};
/// let s = summarize(&[1.0, 1.0, 1.0, 1.0], &SummaryConfig::default()).unwrap();
/// assert_eq!(s.count, 4);
/// assert_eq!(s.hhi, 0.25);
/// assert_eq!(s.liveness, 2);
/// ```
pub fn summarize(values: &[f64], config: &SummaryConfig) -> Result<Summary, MetricsError> {
    config.validate()?;

    let summary = Summary {
        count: values.len(),
        total: sequential_sum(values),
        gini: gini(values)?,
        hhi: hhi(values),
        liveness: liveness_coefficient_at(values, config.liveness_share),
        cv: coefficient_of_variation(values),
    };
    debug!(
        count = summary.count,
        gini = summary.gini,
        hhi = summary.hhi,
        liveness = summary.liveness,
        cv = summary.cv,
        "summary computed"
    );
    Ok(summary)
}
