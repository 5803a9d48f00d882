//! Observation data model and CSV ingestion
//!
//! Loads paired (years of experience, salary) observations from delimited
//! input with a header row. Rows that are structurally too short are skipped;
//! fields that are present but not numeric fail the load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::{RegressionError, Result};

/// Paired observation series
///
/// Two parallel series of equal length: `xs` holds the independent variable
/// (years of experience) and `ys` the dependent variable (salary). Index `i`
/// in one series is paired with index `i` in the other, and the stored
/// pairing is never reordered after ingestion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Observations {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Observations {
    /// Build observations from an iterable of (x, y) pairs
    ///
    /// # Example
    ///
    /// ```rust
    /// use wagefit_core::data::Observations;
    ///
    /// let obs = Observations::from_pairs([(1.0, 45000.0), (3.0, 60000.0)]);
    /// assert_eq!(obs.len(), 2);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (xs, ys) = pairs.into_iter().unzip();
        Self { xs, ys }
    }

    /// Independent variable series (years of experience)
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Dependent variable series (salary)
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of observation pairs
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the set holds no observations
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over (x, y) pairs in ingestion order
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Read observations from delimited input
///
/// Expects a header row (skipped) followed by rows whose first two fields are
/// the experience and salary values. Rows with fewer than two fields are
/// skipped; a non-numeric field in an otherwise valid row is an error.
///
/// # Returns
///
/// The parsed observations, or [`RegressionError::NoData`] if no valid rows
/// remain.
pub fn read_observations<R: Read>(reader: R) -> Result<Observations> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| RegressionError::Csv(e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        if record.len() < 2 {
            debug!("skipping line {}: expected 2 fields, got {}", line, record.len());
            continue;
        }

        let x = parse_field(&record, 0, line)?;
        let y = parse_field(&record, 1, line)?;

        xs.push(x);
        ys.push(y);
    }

    if xs.is_empty() {
        return Err(RegressionError::NoData);
    }

    Ok(Observations { xs, ys })
}

/// Load observations from a CSV file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Observations> {
    let file = File::open(path).map_err(|e| RegressionError::Io(e.to_string()))?;
    read_observations(BufReader::new(file))
}

fn parse_field(record: &csv::StringRecord, index: usize, line: usize) -> Result<f64> {
    let raw = record.get(index).unwrap_or_default();
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RegressionError::InvalidNumber {
            line,
            value: raw.to_string(),
        })
}
