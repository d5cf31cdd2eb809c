//! Conversion of raw textual samples into `f64` values.
//!
//! The metric functions take `&[f64]`; anything arriving as text (CSV
//! cells, CLI arguments, JSON strings) is converted here so that a
//! malformed item fails loudly instead of turning into NaN mid-formula.

use crate::error::MetricsError;

/// Parses every item of `raw` as an `f64`.
///
/// Surrounding whitespace is ignored. Anything [`str::parse::<f64>`]
/// accepts is accepted, including `inf` and `NaN`; whether those are
/// meaningful is decided by the metric that consumes them.
///
/// # Errors
/// Returns [`MetricsError::InvalidInput`] naming the index of the first
/// item that is empty or not a number.
///
/// # Examples
/// ```
/// use u_concentration::input::parse_values;
/// assert_eq!(parse_values(&["1", " 2.5 ", "3e2"]).unwrap(), vec![1.0, 2.5, 300.0]);
/// assert!(parse_values(&["1", "two"]).is_err());
/// ```
pub fn parse_values<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, MetricsError> {
    raw.iter()
        .enumerate()
        .map(|(i, item)| {
            let item = item.as_ref();
            item.trim().parse::<f64>().map_err(|_| {
                MetricsError::InvalidInput(format!(
                    "value at index {i} is not a number: {item:?}"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let v = parse_values(&["10", "5", "3", "2"]).unwrap();
        assert_eq!(v, vec![10.0, 5.0, 3.0, 2.0]);
    }

    #[test]
    fn test_parse_owned_strings() {
        let raw = vec![String::from("-1.5"), String::from("0")];
        assert_eq!(parse_values(&raw).unwrap(), vec![-1.5, 0.0]);
    }

    #[test]
    fn test_parse_empty_slice() {
        let raw: [&str; 0] = [];
        assert_eq!(parse_values(&raw).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_parse_reports_first_bad_index() {
        let err = parse_values(&["1", "2", "x", "y"]).unwrap_err();
        assert_eq!(
            err,
            MetricsError::InvalidInput("value at index 2 is not a number: \"x\"".into())
        );
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(parse_values(&["1", "   "]).is_err());
    }
}
