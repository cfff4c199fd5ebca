//! Numerical building blocks shared by the pricing formulas.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
