//! Leverage limit check.
//!
//! The dashboard compares a randomly observed "current" leverage against a
//! user-set limit and raises an alert when the limit is breached. There is no
//! data feed behind the observation; it is a fresh uniform draw per
//! invocation, which this module keeps (seedable for tests).

use serde::Serialize;

use dash_sim::rng::SimRng;

use crate::error::RiskError;

/// Lowest accepted leverage limit, percent (slider lower bound).
pub const MIN_LIMIT_PCT: u32 = 100;

/// Highest accepted leverage limit, percent (slider upper bound).
pub const MAX_LIMIT_PCT: u32 = 500;

/// Lower bound of the simulated current-leverage draw, percent.
pub const SNAPSHOT_LO_PCT: u32 = 50;

/// Upper bound (exclusive) of the simulated current-leverage draw, percent.
pub const SNAPSHOT_HI_PCT: u32 = 400;

/// Outcome of a leverage check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageStatus {
    /// Current leverage is strictly above the limit.
    ExceedsLimit,
    /// Current leverage is at or below the limit.
    WithinLimit,
}

impl LeverageStatus {
    /// True when the status should be surfaced as an alert.
    #[inline]
    pub fn is_alert(&self) -> bool {
        matches!(self, LeverageStatus::ExceedsLimit)
    }
}

/// A user-set leverage limit in percent, bounds [100, 500] inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeverageLimit {
    pct: u32,
}

impl LeverageLimit {
    /// Creates a validated limit.
    ///
    /// # Errors
    /// `RiskError::LimitOutOfRange` when outside [100, 500].
    pub fn new(pct: u32) -> Result<Self, RiskError> {
        if !(MIN_LIMIT_PCT..=MAX_LIMIT_PCT).contains(&pct) {
            return Err(RiskError::LimitOutOfRange(pct));
        }
        Ok(Self { pct })
    }

    /// The limit in percent.
    #[inline]
    pub fn pct(&self) -> u32 {
        self.pct
    }

    /// Compares an observed snapshot against this limit.
    ///
    /// The comparison is strict: a snapshot exactly at the limit is within
    /// it.
    ///
    /// # Examples
    /// ```
    /// use dash_risk::leverage::{LeverageLimit, LeverageSnapshot, LeverageStatus};
    ///
    /// let limit = LeverageLimit::new(200).unwrap();
    /// assert_eq!(limit.check(&LeverageSnapshot::new(250)), LeverageStatus::ExceedsLimit);
    /// assert_eq!(limit.check(&LeverageSnapshot::new(150)), LeverageStatus::WithinLimit);
    /// ```
    #[inline]
    pub fn check(&self, snapshot: &LeverageSnapshot) -> LeverageStatus {
        if snapshot.current_pct() > self.pct {
            LeverageStatus::ExceedsLimit
        } else {
            LeverageStatus::WithinLimit
        }
    }
}

/// An observed current leverage, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeverageSnapshot {
    current_pct: u32,
}

impl LeverageSnapshot {
    /// Wraps an already-observed leverage value.
    #[inline]
    pub fn new(current_pct: u32) -> Self {
        Self { current_pct }
    }

    /// Draws a fresh simulated observation, uniform in [50, 400).
    ///
    /// Stateless: successive calls are independent draws.
    #[inline]
    pub fn sample(rng: &mut SimRng) -> Self {
        Self {
            current_pct: rng.next_u32_in(SNAPSHOT_LO_PCT, SNAPSHOT_HI_PCT),
        }
    }

    /// The observed leverage in percent.
    #[inline]
    pub fn current_pct(&self) -> u32 {
        self.current_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds_inclusive() {
        assert!(LeverageLimit::new(MIN_LIMIT_PCT).is_ok());
        assert!(LeverageLimit::new(MAX_LIMIT_PCT).is_ok());
        assert_eq!(LeverageLimit::new(200).unwrap().pct(), 200);
    }

    #[test]
    fn test_limit_out_of_range() {
        assert_eq!(
            LeverageLimit::new(99),
            Err(RiskError::LimitOutOfRange(99))
        );
        assert!(LeverageLimit::new(501).is_err());
    }

    #[test]
    fn test_check_exceeds_limit() {
        let limit = LeverageLimit::new(200).unwrap();
        let status = limit.check(&LeverageSnapshot::new(250));
        assert_eq!(status, LeverageStatus::ExceedsLimit);
        assert!(status.is_alert());
    }

    #[test]
    fn test_check_within_limit() {
        let limit = LeverageLimit::new(200).unwrap();
        let status = limit.check(&LeverageSnapshot::new(150));
        assert_eq!(status, LeverageStatus::WithinLimit);
        assert!(!status.is_alert());
    }

    #[test]
    fn test_check_at_limit_is_within() {
        // Strict comparison: current > limit triggers the alert
        let limit = LeverageLimit::new(200).unwrap();
        assert_eq!(
            limit.check(&LeverageSnapshot::new(200)),
            LeverageStatus::WithinLimit
        );
    }

    #[test]
    fn test_sample_stays_in_draw_range() {
        let mut rng = SimRng::from_seed(42);
        for _ in 0..10_000 {
            let snapshot = LeverageSnapshot::sample(&mut rng);
            assert!((SNAPSHOT_LO_PCT..SNAPSHOT_HI_PCT).contains(&snapshot.current_pct()));
        }
    }

    #[test]
    fn test_sample_seeded_reproducible() {
        let mut a = SimRng::from_seed(9);
        let mut b = SimRng::from_seed(9);
        assert_eq!(LeverageSnapshot::sample(&mut a), LeverageSnapshot::sample(&mut b));
    }

    #[test]
    fn test_status_serialises_snake_case() {
        let json = serde_json::to_string(&LeverageStatus::ExceedsLimit).unwrap();
        assert_eq!(json, "\"exceeds_limit\"");
    }
}
