//! Synthetic daily price series generation.
//!
//! The dashboard's "backtesting" section displays a single random-walk price
//! series over one trading year. No strategy logic is applied; this is a
//! synthetic path generator, not a backtest engine, and the public names say
//! so.

use crate::config::{MAX_STEPS, TRADING_DAYS};
use crate::error::SimError;
use crate::rng::SimRng;

/// Configuration for a synthetic daily series.
///
/// Defaults match the dashboard: 252 days, base price 100, daily return
/// volatility 0.02, unseeded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyntheticSeriesConfig {
    /// Number of daily observations.
    pub n_days: usize,
    /// Price the series starts from.
    pub base_price: f64,
    /// Standard deviation of the daily log-return draw.
    pub daily_vol: f64,
    /// Optional seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SyntheticSeriesConfig {
    fn default() -> Self {
        Self {
            n_days: TRADING_DAYS,
            base_price: 100.0,
            daily_vol: 0.02,
            seed: None,
        }
    }
}

impl SyntheticSeriesConfig {
    fn validate(&self) -> Result<(), SimError> {
        if self.n_days == 0 || self.n_days > MAX_STEPS {
            return Err(SimError::InvalidDayCount(self.n_days));
        }
        if self.base_price <= 0.0 || !self.base_price.is_finite() {
            return Err(SimError::InvalidSpot(self.base_price));
        }
        if self.daily_vol < 0.0 || !self.daily_vol.is_finite() {
            return Err(SimError::InvalidVolatility(self.daily_vol));
        }
        Ok(())
    }
}

/// A generated daily price series.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSeries {
    prices: Vec<f64>,
}

impl SyntheticSeries {
    /// The prices, one per day, in order.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Number of days in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when the series is empty (never the case for a generated one).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Generates a synthetic random-walk price series.
///
/// Daily returns are drawn i.i.d. from N(0, daily_vol); the price on day `t`
/// is `base_price × exp(cumsum(returns)[t])`.
///
/// # Examples
///
/// ```rust
/// use dash_sim::synthetic::{generate_series, SyntheticSeriesConfig};
///
/// let config = SyntheticSeriesConfig { seed: Some(42), ..Default::default() };
/// let series = generate_series(&config).unwrap();
///
/// assert_eq!(series.len(), 252);
/// assert!(series.prices().iter().all(|&p| p > 0.0));
/// ```
pub fn generate_series(config: &SyntheticSeriesConfig) -> Result<SyntheticSeries, SimError> {
    config.validate()?;

    let mut rng = SimRng::from_optional_seed(config.seed);
    let mut cumulative = 0.0;

    let prices = (0..config.n_days)
        .map(|_| {
            cumulative += config.daily_vol * rng.next_normal();
            config.base_price * cumulative.exp()
        })
        .collect();

    Ok(SyntheticSeries { prices })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SyntheticSeriesConfig {
        SyntheticSeriesConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_series_length_and_positivity() {
        let series = generate_series(&seeded(42)).unwrap();
        assert_eq!(series.len(), 252);
        assert!(!series.is_empty());
        for &price in series.prices() {
            assert!(price > 0.0);
            assert!(price.is_finite());
        }
    }

    #[test]
    fn test_reproducibility() {
        let a = generate_series(&seeded(7)).unwrap();
        let b = generate_series(&seeded(7)).unwrap();
        assert_eq!(a, b);

        let c = generate_series(&seeded(8)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let config = SyntheticSeriesConfig {
            daily_vol: 0.0,
            seed: Some(1),
            ..Default::default()
        };
        let series = generate_series(&config).unwrap();
        for &price in series.prices() {
            assert_eq!(price, 100.0);
        }
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let zero_days = SyntheticSeriesConfig {
            n_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_series(&zero_days),
            Err(SimError::InvalidDayCount(0))
        ));

        let bad_price = SyntheticSeriesConfig {
            base_price: -1.0,
            ..Default::default()
        };
        assert!(generate_series(&bad_price).is_err());

        let bad_vol = SyntheticSeriesConfig {
            daily_vol: -0.02,
            ..Default::default()
        };
        assert!(generate_series(&bad_vol).is_err());
    }

    #[test]
    fn test_custom_base_price_scales_series() {
        let a = generate_series(&SyntheticSeriesConfig {
            base_price: 100.0,
            seed: Some(5),
            ..Default::default()
        })
        .unwrap();
        let b = generate_series(&SyntheticSeriesConfig {
            base_price: 200.0,
            seed: Some(5),
            ..Default::default()
        })
        .unwrap();

        for (pa, pb) in a.prices().iter().zip(b.prices()) {
            assert!((pb / pa - 2.0).abs() < 1e-12);
        }
    }
}
