//! Monte Carlo price-path generation.
//!
//! Each path draws independent per-step returns from N(drift, volatility),
//! accumulates them, and exponentiates:
//!
//! ```text
//! price[t] = S₀ × exp(Σ_{k<=t} z_k),   z_k ~ N(drift, volatility)
//! ```
//!
//! The batch is a dense row-major matrix of `n_paths × n_steps` prices,
//! generated fresh per request and discarded after display.
//!
//! # Memory Layout
//!
//! `data[path_idx * n_steps + step_idx]`; each row is one complete path.

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::rng::SimRng;

/// A batch of simulated price paths.
///
/// Row-major `n_paths × n_steps` matrix; all values are strictly positive
/// since each is an exponential of a real-valued sum.
///
/// # Examples
///
/// ```rust
/// use dash_sim::config::SimulationConfig;
/// use dash_sim::paths::simulate_paths;
///
/// let config = SimulationConfig::builder().n_paths(100).seed(1).build().unwrap();
/// let paths = simulate_paths(&config).unwrap();
///
/// assert_eq!(paths.n_paths(), 100);
/// assert_eq!(paths.n_steps(), 252);
/// assert!(paths.path(0).iter().all(|&p| p > 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathSet {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathSet {
    /// Number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of steps per path (columns).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns path `path_idx` as a slice of `n_steps` prices.
    ///
    /// # Panics
    ///
    /// Panics if `path_idx >= n_paths`.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let start = path_idx * self.n_steps;
        &self.data[start..start + self.n_steps]
    }

    /// Iterates over the paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_steps)
    }

    /// Terminal price of every path.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.iter()
            .map(|path| path[self.n_steps - 1])
            .collect()
    }

    /// Mean of the terminal prices.
    pub fn terminal_mean(&self) -> f64 {
        self.terminal_prices().iter().sum::<f64>() / self.n_paths as f64
    }

    /// Copies the matrix into nested vectors, one per path.
    ///
    /// Convenience for JSON serialisation in the service layer.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter().map(|path| path.to_vec()).collect()
    }
}

/// Generates a batch of price paths from the given configuration.
///
/// Seeded configs are bit-reproducible; unseeded configs draw fresh entropy
/// per call.
pub fn simulate_paths(config: &SimulationConfig) -> Result<PathSet, SimError> {
    let n_paths = config.n_paths();
    let n_steps = config.n_steps();
    let spot = config.spot();
    let drift = config.drift();
    let volatility = config.volatility();

    let mut rng = SimRng::from_optional_seed(config.seed());
    let mut data = Vec::with_capacity(n_paths * n_steps);

    for _ in 0..n_paths {
        let mut cumulative = 0.0;
        for _ in 0..n_steps {
            cumulative += drift + volatility * rng.next_normal();
            data.push(spot * cumulative.exp());
        }
    }

    Ok(PathSet {
        data,
        n_paths,
        n_steps,
    })
}
