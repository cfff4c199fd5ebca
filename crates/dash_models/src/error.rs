//! Error types for closed-form model evaluation.

use thiserror::Error;

/// Model input errors.
///
/// Every variant carries the offending value so callers can surface a
/// precise, user-facing message instead of a propagated NaN.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Non-positive spot price (log of a non-positive argument).
    #[error("Invalid spot price: S = {spot}, must be positive")]
    InvalidSpot {
        /// The rejected spot value.
        spot: f64,
    },

    /// Non-positive strike price (log of a non-positive argument).
    #[error("Invalid strike price: K = {strike}, must be positive")]
    InvalidStrike {
        /// The rejected strike value.
        strike: f64,
    },

    /// Non-positive time to expiry (division by σ√t).
    #[error("Invalid time to expiry: t = {expiry}, must be positive")]
    InvalidExpiry {
        /// The rejected expiry value, in years.
        expiry: f64,
    },

    /// Non-positive volatility (division by σ√t).
    #[error("Invalid volatility: σ = {volatility}, must be positive")]
    InvalidVolatility {
        /// The rejected volatility value.
        volatility: f64,
    },

    /// Degenerate price range for a payoff curve.
    #[error("Invalid price range [{lo}, {hi}]: lower bound must be below upper")]
    InvalidRange {
        /// Lower bound of the rejected range.
        lo: f64,
        /// Upper bound of the rejected range.
        hi: f64,
    },

    /// Too few sample points to form a curve.
    #[error("Invalid point count {0}: a curve needs at least 2 points")]
    InvalidPointCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = ModelError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(
            format!("{}", err),
            "Invalid volatility: σ = -0.2, must be positive"
        );
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = ModelError::InvalidExpiry { expiry: 0.0 };
        assert!(err.to_string().contains("t = 0"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = ModelError::InvalidRange { lo: 120.0, hi: 80.0 };
        assert!(err.to_string().contains("[120, 80]"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ModelError::InvalidSpot { spot: -1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ModelError::InvalidPointCount(1);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
