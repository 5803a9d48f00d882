//! Ordinary least squares for salary prediction
//!
//! Fits y = intercept + slope * x over the paired observations using the
//! closed-form OLS solution in deviation form.

use serde::{Deserialize, Serialize};

use crate::data::Observations;
use crate::error::{RegressionError, Result};
use crate::stats::mean;

/// Fitted regression line
///
/// Produced by [`fit_least_squares`]; immutable once computed. Prediction is
/// pure and defined for any real input, extrapolation included.
///
/// # Example
///
/// ```rust
/// use wagefit_core::data::Observations;
/// use wagefit_core::regression::fit_least_squares;
///
/// let obs = Observations::from_pairs([
///     (1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0), (5.0, 10.0),
/// ]);
/// let fit = fit_least_squares(&obs).unwrap();
///
/// assert!((fit.slope() - 2.0).abs() < 1e-10);
/// assert!((fit.predict(6.0) - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Slope (beta_1): salary change per year of experience
    slope: f64,
    /// Y-intercept (beta_0)
    intercept: f64,
    /// Coefficient of determination
    r_squared: f64,
    /// Number of observations used in fitting
    n_observations: usize,
}

impl LinearFit {
    /// Get the slope (beta_1)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept (beta_0)
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared (coefficient of determination)
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Number of observations the line was fitted on
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Predict the salary for a given years-of-experience value
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residuals of the fit against a set of observations
    pub fn residuals(&self, obs: &Observations) -> Vec<f64> {
        obs.pairs().map(|(x, y)| y - self.predict(x)).collect()
    }
}

/// Fit a least-squares line to paired observations
///
/// Uses the deviation-form OLS solution:
///
/// ```text
/// slope     = sum((x_i - mean_x) * (y_i - mean_y)) / sum((x_i - mean_x)^2)
/// intercept = mean_y - slope * mean_x
/// ```
///
/// # Returns
///
/// - [`RegressionError::NoData`] for an empty observation set
/// - [`RegressionError::DegenerateInput`] when all x values are identical
pub fn fit_least_squares(obs: &Observations) -> Result<LinearFit> {
    if obs.is_empty() {
        return Err(RegressionError::NoData);
    }

    let mean_x = mean(obs.xs());
    let mean_y = mean(obs.ys());

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in obs.pairs() {
        numerator += (x - mean_x) * (y - mean_y);
        denominator += (x - mean_x).powi(2);
    }

    if denominator.abs() < 1e-10 {
        return Err(RegressionError::DegenerateInput);
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    let ss_tot: f64 = obs.ys().iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = obs
        .pairs()
        .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
        .sum();

    let r_squared = if ss_tot > 1e-10 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
        n_observations: obs.len(),
    })
}
