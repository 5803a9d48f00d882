//! # wagefit-core
//!
//! Salary regression core library: loads paired (experience, salary)
//! observations from delimited data, computes descriptive statistics, and
//! fits an ordinary-least-squares line for prediction.
//!
//! ## Pipeline
//!
//! Data flows through three pure steps composed by the caller:
//!
//! 1. [`data::load_csv`] / [`data::read_observations`] — ingest paired data
//! 2. [`stats::summarize`] — per-series mean and median
//! 3. [`regression::fit_least_squares`] — slope/intercept via OLS
//!
//! ## Example
//!
//! ```rust
//! use wagefit_core::prelude::*;
//!
//! let obs = Observations::from_pairs([(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
//! let fit = fit_least_squares(&obs).unwrap();
//! assert!((fit.predict(4.0) - 8.0).abs() < 1e-10);
//! ```

pub mod data;
pub mod regression;
pub mod stats;
mod error;

pub use error::{RegressionError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::{load_csv, read_observations, Observations};
    pub use crate::error::{RegressionError, Result};
    pub use crate::regression::{fit_least_squares, LinearFit};
    pub use crate::stats::{mean, median, summarize, SummaryStats};
}
