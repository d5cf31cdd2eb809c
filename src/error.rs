//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Error returned when input values violate a metric's preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// Input values (or a configuration parameter) are outside the domain
    /// the computation accepts. No partial result is produced.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MetricsError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        MetricsError::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MetricsError::invalid_input("values cannot be negative");
        assert_eq!(err.to_string(), "invalid input: values cannot be negative");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<MetricsError>();
    }
}
