//! Futures rollover timing check.
//!
//! Decides whether a futures position should be rolled now: the rollover is
//! due once the days remaining to expiry have fallen to the user-set window,
//! boundary inclusive. No history of past rollovers is tracked.

use serde::Serialize;

use crate::error::RiskError;

/// Lowest accepted contract count.
pub const MIN_CONTRACTS: u32 = 1;

/// Highest accepted contract count.
pub const MAX_CONTRACTS: u32 = 100;

/// Highest accepted days-to-expiry.
pub const MAX_DAYS_TO_EXPIRY: u32 = 30;

/// Highest accepted rollover window, days before expiry.
pub const MAX_ROLLOVER_DAYS: u32 = 10;

/// Outcome of a rollover timing check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloverStatus {
    /// The expiry is inside the rollover window; roll now.
    RolloverDue,
    /// There is still time before the rollover window opens.
    TimeRemaining,
}

impl RolloverStatus {
    /// True when the position should be rolled now.
    #[inline]
    pub fn is_due(&self) -> bool {
        matches!(self, RolloverStatus::RolloverDue)
    }
}

/// A futures position described by contract count and days to expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuturesPosition {
    contracts: u32,
    days_to_expiry: u32,
}

impl FuturesPosition {
    /// Creates a validated position.
    ///
    /// # Errors
    /// - `RiskError::ContractsOutOfRange` when contracts outside [1, 100]
    /// - `RiskError::ExpiryOutOfRange` when days to expiry outside [1, 30]
    pub fn new(contracts: u32, days_to_expiry: u32) -> Result<Self, RiskError> {
        if !(MIN_CONTRACTS..=MAX_CONTRACTS).contains(&contracts) {
            return Err(RiskError::ContractsOutOfRange(contracts));
        }
        if !(1..=MAX_DAYS_TO_EXPIRY).contains(&days_to_expiry) {
            return Err(RiskError::ExpiryOutOfRange(days_to_expiry));
        }
        Ok(Self {
            contracts,
            days_to_expiry,
        })
    }

    /// Number of contracts in the position.
    #[inline]
    pub fn contracts(&self) -> u32 {
        self.contracts
    }

    /// Calendar days until the current contract expires.
    #[inline]
    pub fn days_to_expiry(&self) -> u32 {
        self.days_to_expiry
    }
}

/// A user-set rollover window: roll when expiry is this many days away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolloverPolicy {
    days_before_expiry: u32,
}

impl RolloverPolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    /// `RiskError::WindowOutOfRange` when outside [1, 10].
    pub fn new(days_before_expiry: u32) -> Result<Self, RiskError> {
        if !(1..=MAX_ROLLOVER_DAYS).contains(&days_before_expiry) {
            return Err(RiskError::WindowOutOfRange(days_before_expiry));
        }
        Ok(Self { days_before_expiry })
    }

    /// Days before expiry at which the rollover becomes due.
    #[inline]
    pub fn days_before_expiry(&self) -> u32 {
        self.days_before_expiry
    }

    /// Checks whether the position should be rolled now.
    ///
    /// Boundary inclusive: a position exactly at the window is due.
    ///
    /// # Examples
    /// ```
    /// use dash_risk::rollover::{FuturesPosition, RolloverPolicy, RolloverStatus};
    ///
    /// let policy = RolloverPolicy::new(5).unwrap();
    /// let position = FuturesPosition::new(10, 5).unwrap();
    /// assert_eq!(policy.check(&position), RolloverStatus::RolloverDue);
    /// ```
    #[inline]
    pub fn check(&self, position: &FuturesPosition) -> RolloverStatus {
        if position.days_to_expiry() <= self.days_before_expiry {
            RolloverStatus::RolloverDue
        } else {
            RolloverStatus::TimeRemaining
        }
    }
}
