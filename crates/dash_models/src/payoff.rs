//! Call payoff curve generation for visualisation.
//!
//! The dashboard's first section plots the value of a call option at expiry
//! against the underlying price. The curve is a pure display artifact: an
//! endpoint-inclusive grid of (spot, payoff) pairs over a user-chosen range.

use crate::error::ModelError;

/// A single sample on a payoff curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffPoint {
    /// Underlying price at which the payoff is evaluated.
    pub spot: f64,
    /// Call payoff max(S - K, 0) at that price.
    pub payoff: f64,
}

/// Call payoff at expiry, ignoring premium paid.
///
/// # Examples
/// ```
/// use dash_models::payoff::call_payoff;
///
/// assert_eq!(call_payoff(120.0, 100.0), 20.0);
/// assert_eq!(call_payoff(100.0, 100.0), 0.0);
/// assert_eq!(call_payoff(80.0, 100.0), 0.0);
/// ```
#[inline]
pub fn call_payoff(spot: f64, strike: f64) -> f64 {
    (spot - strike).max(0.0)
}

/// Samples the call payoff over `[lo, hi]` on an endpoint-inclusive grid.
///
/// The grid point `i` sits at `lo + (hi - lo) * i / (n_points - 1)`, so the
/// first point is exactly `lo` and the last exactly `hi`.
///
/// # Errors
/// - `ModelError::InvalidRange` if `lo >= hi` or either bound is not finite
/// - `ModelError::InvalidPointCount` if `n_points < 2`
/// - `ModelError::InvalidStrike` if `strike <= 0` or not finite
///
/// # Examples
/// ```
/// use dash_models::payoff::payoff_curve;
///
/// let curve = payoff_curve(80.0, 120.0, 100.0, 100).unwrap();
/// assert_eq!(curve.len(), 100);
/// assert_eq!(curve[0].spot, 80.0);
/// assert_eq!(curve[99].spot, 120.0);
/// assert_eq!(curve[99].payoff, 20.0);
/// ```
pub fn payoff_curve(
    lo: f64,
    hi: f64,
    strike: f64,
    n_points: usize,
) -> Result<Vec<PayoffPoint>, ModelError> {
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(ModelError::InvalidRange { lo, hi });
    }
    if n_points < 2 {
        return Err(ModelError::InvalidPointCount(n_points));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(ModelError::InvalidStrike { strike });
    }

    let span = hi - lo;
    let denom = (n_points - 1) as f64;

    let curve = (0..n_points)
        .map(|i| {
            let spot = lo + span * (i as f64 / denom);
            PayoffPoint {
                spot,
                payoff: call_payoff(spot, strike),
            }
        })
        .collect();

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_call_payoff_kink() {
        assert_eq!(call_payoff(100.0, 100.0), 0.0);
        assert_eq!(call_payoff(120.0, 100.0), 20.0);
        assert_eq!(call_payoff(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_curve_default_dashboard_range() {
        // Dashboard defaults: [80, 120], strike 100, 100 points
        let curve = payoff_curve(80.0, 120.0, 100.0, 100).unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve.first().unwrap().spot, 80.0);
        assert_eq!(curve.last().unwrap().spot, 120.0);
        assert_eq!(curve.last().unwrap().payoff, 20.0);

        // Below the strike the payoff is flat zero
        for point in curve.iter().filter(|p| p.spot <= 100.0) {
            assert_eq!(point.payoff, 0.0);
        }
        // Above the strike it is S - K
        for point in curve.iter().filter(|p| p.spot > 100.0) {
            assert_relative_eq!(point.payoff, point.spot - 100.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_curve_grid_is_evenly_spaced() {
        let curve = payoff_curve(0.0, 10.0, 5.0, 11).unwrap();
        for (i, point) in curve.iter().enumerate() {
            assert_relative_eq!(point.spot, i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_curve_invalid_range() {
        assert!(matches!(
            payoff_curve(120.0, 80.0, 100.0, 100),
            Err(ModelError::InvalidRange { .. })
        ));
        assert!(payoff_curve(100.0, 100.0, 100.0, 100).is_err());
        assert!(payoff_curve(f64::NAN, 120.0, 100.0, 100).is_err());
    }

    #[test]
    fn test_curve_invalid_point_count() {
        assert!(matches!(
            payoff_curve(80.0, 120.0, 100.0, 1),
            Err(ModelError::InvalidPointCount(1))
        ));
        assert!(payoff_curve(80.0, 120.0, 100.0, 0).is_err());
    }

    #[test]
    fn test_curve_invalid_strike() {
        assert!(matches!(
            payoff_curve(80.0, 120.0, -100.0, 100),
            Err(ModelError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_curve_two_points_are_endpoints() {
        let curve = payoff_curve(80.0, 120.0, 100.0, 2).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].spot, 80.0);
        assert_eq!(curve[1].spot, 120.0);
    }
}
