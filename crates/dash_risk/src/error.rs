//! Error types for risk-check inputs.

use thiserror::Error;

/// Risk input errors.
///
/// Raised when a user-set value falls outside its widget range; bounds are
/// enforced inclusively.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RiskError {
    /// Leverage limit outside [100, 500] percent.
    #[error("Leverage limit {0}% outside allowed range [100, 500]")]
    LimitOutOfRange(u32),

    /// Contract count outside [1, 100].
    #[error("Contract count {0} outside allowed range [1, 100]")]
    ContractsOutOfRange(u32),

    /// Days to expiry outside [1, 30].
    #[error("Days to expiry {0} outside allowed range [1, 30]")]
    ExpiryOutOfRange(u32),

    /// Rollover window outside [1, 10] days.
    #[error("Rollover window {0} outside allowed range [1, 10]")]
    WindowOutOfRange(u32),
}
