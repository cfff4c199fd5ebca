//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rt)·Φ(d₂)
//! **Put Price**: P = K·e^(-rt)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)t) / (σ√t)
//! - d₂ = d₁ - σ√t
//!
//! All formulas take an explicit [`OptionParams`] built fresh per request;
//! validation at construction guarantees the formulas are defined (t > 0,
//! σ > 0, positive S and K), so the pricing functions themselves are total.

use crate::error::ModelError;
use crate::math::{norm_cdf, norm_pdf};

/// Payoff direction of a vanilla European option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

/// Validated Black-Scholes input parameters.
///
/// Construct via [`OptionParams::new`]; a successfully built value is
/// guaranteed to be inside the domain of the formula.
///
/// # Examples
/// ```
/// use dash_models::black_scholes::{call_price, OptionParams};
///
/// let params = OptionParams::new(100.0, 100.0, 0.05, 1.0, 0.2).unwrap();
/// let price = call_price(&params);
/// assert!(price > 0.0);
///
/// // Zero expiry makes the formula undefined
/// assert!(OptionParams::new(100.0, 100.0, 0.05, 0.0, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionParams {
    /// Underlying spot price (S).
    spot: f64,
    /// Strike price (K).
    strike: f64,
    /// Risk-free rate (r), annualised.
    rate: f64,
    /// Time to expiry (t), in years.
    expiry: f64,
    /// Volatility (σ), annualised.
    volatility: f64,
}

impl OptionParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if `spot <= 0` or not finite
    /// - `ModelError::InvalidStrike` if `strike <= 0` or not finite
    /// - `ModelError::InvalidExpiry` if `expiry <= 0` or not finite
    /// - `ModelError::InvalidVolatility` if `volatility <= 0` or not finite
    ///
    /// Negative rates are allowed.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        volatility: f64,
    ) -> Result<Self, ModelError> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(ModelError::InvalidSpot { spot });
        }
        if strike <= 0.0 || !strike.is_finite() {
            return Err(ModelError::InvalidStrike { strike });
        }
        if expiry <= 0.0 || !expiry.is_finite() {
            return Err(ModelError::InvalidExpiry { expiry });
        }
        if volatility <= 0.0 || !volatility.is_finite() {
            return Err(ModelError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d₁ term.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)t) / (σ√t)
    #[inline]
    pub fn d1(&self) -> f64 {
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * self.expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d₂ term.
    ///
    /// d₂ = d₁ - σ√t
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.expiry.sqrt()
    }

    /// Discount factor e^(-rt).
    #[inline]
    fn discount(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}

/// Computes the European call option price.
///
/// C = S·Φ(d₁) - K·e^(-rt)·Φ(d₂), always non-negative.
///
/// # Examples
/// ```
/// use dash_models::black_scholes::{call_price, OptionParams};
///
/// // Known reference: S=100, K=100, r=5%, t=1y, σ=20% → C ≈ 10.45
/// let params = OptionParams::new(100.0, 100.0, 0.05, 1.0, 0.2).unwrap();
/// assert!((call_price(&params) - 10.4506).abs() < 0.001);
/// ```
#[inline]
pub fn call_price(params: &OptionParams) -> f64 {
    let d1 = params.d1();
    let d2 = params.d2();

    params.spot() * norm_cdf(d1) - params.strike() * params.discount() * norm_cdf(d2)
}

/// Computes the European put option price.
///
/// P = K·e^(-rt)·Φ(-d₂) - S·Φ(-d₁), always non-negative.
#[inline]
pub fn put_price(params: &OptionParams) -> f64 {
    let d1 = params.d1();
    let d2 = params.d2();

    params.strike() * params.discount() * norm_cdf(-d2) - params.spot() * norm_cdf(-d1)
}

/// Prices either leg by kind.
#[inline]
pub fn price(params: &OptionParams, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => call_price(params),
        OptionKind::Put => put_price(params),
    }
}

/// Computes Delta (∂V/∂S).
///
/// Call Delta = Φ(d₁); Put Delta = Φ(d₁) - 1.
#[inline]
pub fn delta(params: &OptionParams, kind: OptionKind) -> f64 {
    let n_d1 = norm_cdf(params.d1());
    match kind {
        OptionKind::Call => n_d1,
        OptionKind::Put => n_d1 - 1.0,
    }
}

/// Computes Gamma (∂²V/∂S²), identical for calls and puts.
///
/// Gamma = φ(d₁) / (S·σ·√t), always non-negative.
#[inline]
pub fn gamma(params: &OptionParams) -> f64 {
    norm_pdf(params.d1()) / (params.spot() * params.volatility() * params.expiry().sqrt())
}

/// Computes Vega (∂V/∂σ), identical for calls and puts.
///
/// Vega = S·√t·φ(d₁), always non-negative.
#[inline]
pub fn vega(params: &OptionParams) -> f64 {
    params.spot() * params.expiry().sqrt() * norm_pdf(params.d1())
}
