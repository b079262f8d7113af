//! Validation utilities for matrix loading.
//!
//! Provides [`ValidationCollector`] for gathering multiple configuration
//! errors into a single [`IoError::Validation`], plus the per-row and
//! whole-matrix checks applied while a matrix file is read.

use vmp_markov::row_sum_within;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Row and matrix checks
// ---------------------------------------------------------------------------

/// Check that every value in a row is a finite, non-negative number.
pub(crate) fn check_entries(line: usize, values: &[f64]) -> Result<(), IoError> {
    match values
        .iter()
        .enumerate()
        .find(|&(_, &v)| !v.is_finite() || v < 0.0)
    {
        Some((column, &value)) => Err(IoError::InvalidEntry {
            line,
            column,
            value,
        }),
        None => Ok(()),
    }
}

/// Check that a row sum lies within `tolerance` of 1.0.
pub(crate) fn check_row_sum(
    line: usize,
    row: usize,
    sum: f64,
    tolerance: f64,
) -> Result<(), IoError> {
    if row_sum_within(sum, tolerance) {
        Ok(())
    } else {
        Err(IoError::MalformedMatrix { line, row, sum })
    }
}

/// Check that the number of rows read matches a column count.
pub(crate) fn check_square(rows: usize, columns: usize) -> Result<(), IoError> {
    if rows == columns {
        Ok(())
    } else {
        Err(IoError::NonSquareMatrix { rows, columns })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
