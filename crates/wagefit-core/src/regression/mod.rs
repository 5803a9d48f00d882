//! Least-squares line fitting
//!
//! Ordinary least squares over paired observations, in closed form.

pub mod linear;

pub use linear::{fit_least_squares, LinearFit};
