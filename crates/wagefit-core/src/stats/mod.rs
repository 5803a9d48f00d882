//! Descriptive statistics for observation series
//!
//! Per-series mean and median. Medians are computed on an independently
//! sorted copy of each series; the stored pairing of the observations is
//! left untouched.

use serde::{Deserialize, Serialize};

use crate::data::Observations;
use crate::error::{RegressionError, Result};

/// Arithmetic mean of a series
///
/// Returns NaN for an empty slice.
///
/// # Example
///
/// ```rust
/// use wagefit_core::stats::mean;
///
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v) - 3.0).abs() < 1e-10);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }

    data.iter().sum::<f64>() / data.len() as f64
}

/// Median of a series
///
/// Sorts a copy of the input. For odd lengths the middle element is returned;
/// for even lengths the two middle elements are averaged. Returns NaN for an
/// empty slice.
///
/// # Example
///
/// ```rust
/// use wagefit_core::stats::median;
///
/// assert!((median(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-10);
/// assert!((median(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-10);
/// ```
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2] + sorted[n / 2 - 1]) / 2.0
    }
}

/// Per-series summary statistics of an observation set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Mean years of experience
    pub mean_x: f64,
    /// Mean salary
    pub mean_y: f64,
    /// Median years of experience
    pub median_x: f64,
    /// Median salary
    pub median_y: f64,
}

/// Compute summary statistics for both series
///
/// Means are taken over the values in ingestion order; medians sort each
/// series independently.
///
/// # Returns
///
/// The summary, or [`RegressionError::NoData`] for an empty observation set.
pub fn summarize(obs: &Observations) -> Result<SummaryStats> {
    if obs.is_empty() {
        return Err(RegressionError::NoData);
    }

    Ok(SummaryStats {
        mean_x: mean(obs.xs()),
        mean_y: mean(obs.ys()),
        median_x: median(obs.xs()),
        median_y: median(obs.ys()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let data = vec![2.0, 4.0, 6.0];
        assert!((mean(&data) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_single_value() {
        assert!((mean(&[42.0]) - 42.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_median_odd_length() {
        assert!((median(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_median_even_length() {
        assert!((median(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert!((median(&[9.0, 1.0, 5.0]) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = median(&data);
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_empty_is_nan() {
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn test_summarize() {
        let obs = Observations::from_pairs([(1.0, 10.0), (2.0, 20.0), (3.0, 60.0)]);
        let stats = summarize(&obs).unwrap();

        assert!((stats.mean_x - 2.0).abs() < 1e-10);
        assert!((stats.mean_y - 30.0).abs() < 1e-10);
        assert!((stats.median_x - 2.0).abs() < 1e-10);
        assert!((stats.median_y - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_summarize_medians_sort_each_series_independently() {
        // Pairing puts the largest x with the smallest y; each median is
        // still taken from its own sorted series.
        let obs = Observations::from_pairs([(5.0, 1.0), (1.0, 5.0), (3.0, 3.0), (4.0, 2.0)]);
        let stats = summarize(&obs).unwrap();

        assert!((stats.median_x - 3.5).abs() < 1e-10);
        assert!((stats.median_y - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_summarize_empty_is_no_data() {
        let obs = Observations::default();
        assert_eq!(summarize(&obs).unwrap_err(), RegressionError::NoData);
    }

    #[test]
    fn test_summary_stats_serde_round_trip() {
        let stats = SummaryStats {
            mean_x: 2.0,
            mean_y: 30.0,
            median_x: 2.0,
            median_y: 20.0,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let back: SummaryStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
