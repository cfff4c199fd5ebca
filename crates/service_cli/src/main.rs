//! Derivdash CLI - Dashboard datasets in the terminal
//!
//! One subcommand per dashboard section:
//!
//! - `derivdash payoff` - Call payoff curve over a price range
//! - `derivdash price` - Black-Scholes option price and Greeks
//! - `derivdash simulate` - Monte Carlo price-path batch
//! - `derivdash backtest` - Synthetic daily series
//! - `derivdash leverage` - Leverage limit check
//! - `derivdash rollover` - Futures rollover timing check
//! - `derivdash check` - Verify component availability

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Derivatives Dashboard CLI
#[derive(Parser)]
#[command(name = "derivdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the call payoff curve over a price range
    Payoff {
        /// Lower bound of the underlying price range
        #[arg(long, default_value = "80.0")]
        min_spot: f64,

        /// Upper bound of the underlying price range
        #[arg(long, default_value = "120.0")]
        max_spot: f64,

        /// Strike price
        #[arg(short, long, default_value = "100.0")]
        strike: f64,

        /// Number of curve samples
        #[arg(short, long, default_value = "100")]
        points: usize,
    },

    /// Price a European option with Black-Scholes
    Price {
        /// Underlying asset price
        #[arg(short = 'S', long, default_value = "100.0")]
        spot: f64,

        /// Strike price
        #[arg(short = 'K', long, default_value = "100.0")]
        strike: f64,

        /// Risk-free rate in percent
        #[arg(short, long, default_value = "5.0")]
        rate: f64,

        /// Time to expiry in years
        #[arg(short = 't', long, default_value = "1.0")]
        expiry: f64,

        /// Volatility in percent
        #[arg(long, default_value = "20.0")]
        volatility: f64,
    },

    /// Generate a Monte Carlo price-path batch
    Simulate {
        /// Number of Monte Carlo paths
        #[arg(short, long, default_value = "1000")]
        paths: usize,

        /// Initial price
        #[arg(short = 'S', long, default_value = "100.0")]
        spot: f64,

        /// Per-step return mean in percent
        #[arg(short, long, default_value = "5.0")]
        rate: f64,

        /// Per-step return standard deviation in percent
        #[arg(long, default_value = "20.0")]
        volatility: f64,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate the synthetic daily series
    Backtest {
        /// Number of daily observations
        #[arg(short, long, default_value = "252")]
        days: usize,

        /// Starting price
        #[arg(short, long, default_value = "100.0")]
        base_price: f64,

        /// Daily return standard deviation
        #[arg(long, default_value = "0.02")]
        daily_vol: f64,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check current leverage against a limit
    Leverage {
        /// Leverage limit in percent, in [100, 500]
        #[arg(short, long, default_value = "200")]
        limit: u32,

        /// Seed pinning the simulated observation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check whether a futures position should be rolled
    Rollover {
        /// Number of contracts in the position
        #[arg(short, long, default_value = "10")]
        contracts: u32,

        /// Days until the current contract expires
        #[arg(short, long, default_value = "5")]
        days_to_expiry: u32,

        /// Days before expiry at which to roll
        #[arg(short, long, default_value = "3")]
        rollover_days: u32,
    },

    /// Check component availability
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Payoff {
            min_spot,
            max_spot,
            strike,
            points,
        } => commands::payoff::run(min_spot, max_spot, strike, points),
        Commands::Price {
            spot,
            strike,
            rate,
            expiry,
            volatility,
        } => commands::price::run(spot, strike, rate, expiry, volatility),
        Commands::Simulate {
            paths,
            spot,
            rate,
            volatility,
            seed,
        } => commands::simulate::run(paths, spot, rate, volatility, seed),
        Commands::Backtest {
            days,
            base_price,
            daily_vol,
            seed,
        } => commands::backtest::run(days, base_price, daily_vol, seed),
        Commands::Leverage { limit, seed } => commands::leverage::run(limit, seed),
        Commands::Rollover {
            contracts,
            days_to_expiry,
            rollover_days,
        } => commands::rollover::run(contracts, days_to_expiry, rollover_days),
        Commands::Check => commands::check::run(),
    }
}
