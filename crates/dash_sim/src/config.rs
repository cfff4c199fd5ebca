//! Monte Carlo simulation configuration.
//!
//! The bounds mirror the dashboard widgets: the simulation-count slider runs
//! from 100 to 10000 and the horizon is one trading year of 252 steps.

use crate::error::SimError;

/// Minimum number of simulation paths (slider lower bound).
pub const MIN_PATHS: usize = 100;

/// Maximum number of simulation paths (slider upper bound).
pub const MAX_PATHS: usize = 10_000;

/// Maximum number of time steps per path.
pub const MAX_STEPS: usize = 10_000;

/// Trading days in a year; the dashboard's fixed simulation horizon.
pub const TRADING_DAYS: usize = 252;

/// Immutable Monte Carlo simulation configuration.
///
/// Use [`SimulationConfig::builder`] to construct instances; all fields carry
/// the dashboard defaults, so `builder().build()` yields the default run of
/// 1000 paths over 252 steps.
///
/// # Examples
///
/// ```rust
/// use dash_sim::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(5000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 5000);
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    n_paths: usize,
    n_steps: usize,
    spot: f64,
    drift: f64,
    volatility: f64,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder preloaded with dashboard defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Initial price S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Per-step return mean.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Per-step return standard deviation.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn validate(&self) -> Result<(), SimError> {
        if self.n_paths < MIN_PATHS || self.n_paths > MAX_PATHS {
            return Err(SimError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(SimError::InvalidStepCount(self.n_steps));
        }
        if self.spot <= 0.0 || !self.spot.is_finite() {
            return Err(SimError::InvalidSpot(self.spot));
        }
        if !self.drift.is_finite() {
            return Err(SimError::InvalidDrift(self.drift));
        }
        if self.volatility < 0.0 || !self.volatility.is_finite() {
            return Err(SimError::InvalidVolatility(self.volatility));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Defaults: 1000 paths, 252 steps, S₀ = 100, drift 0.05, volatility 0.2,
/// entropy seeding.
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    n_paths: usize,
    n_steps: usize,
    spot: f64,
    drift: f64,
    volatility: f64,
    seed: Option<u64>,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: 1000,
            n_steps: TRADING_DAYS,
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            seed: None,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of paths, in `[100, 10000]`.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the number of steps per path, in `[1, 10000]`.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Sets the initial price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Sets the per-step return mean.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Sets the per-step return standard deviation.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Pins the random sequence for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<SimulationConfig, SimError> {
        let config = SimulationConfig {
            n_paths: self.n_paths,
            n_steps: self.n_steps,
            spot: self.spot,
            drift: self.drift,
            volatility: self.volatility,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
