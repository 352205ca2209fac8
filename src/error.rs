//! Error type shared by all optimization entry points.

use thiserror::Error;

/// Errors reported by the optimization kernels.
///
/// Infeasible assignment inputs are not errors: the assignment solver
/// degrades to a greedy plan and reports the dropped tasks instead.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The input violates a precondition (empty point set, zero capacity,
    /// non-positive weight, out-of-range index, non-finite coordinate).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The input is valid but exceeds a configured tractability bound.
    #[error("{what} of {size} exceeds the supported limit of {limit}")]
    TooLargeInput {
        /// What was measured ("point count", "capacity").
        what: &'static str,
        /// Observed size.
        size: usize,
        /// Configured upper bound.
        limit: usize,
    },

    /// A JSON request could not be parsed or a response could not be encoded.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl OptimizeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid() {
        let e = OptimizeError::invalid("empty point set");
        assert_eq!(e.to_string(), "invalid input: empty point set");
    }

    #[test]
    fn test_display_too_large() {
        let e = OptimizeError::TooLargeInput {
            what: "point count",
            size: 30,
            limit: 16,
        };
        assert_eq!(
            e.to_string(),
            "point count of 30 exceeds the supported limit of 16"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let e: OptimizeError = err.into();
        assert!(matches!(e, OptimizeError::Malformed(_)));
    }
}
