//! Row-stochastic transition matrix for a discrete time Markov chain.

use std::fmt;

use crate::error::MarkovError;

/// Maximum absolute deviation of a row sum from 1.0 still accepted as stochastic.
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Returns `true` if `sum` lies within `tolerance` of 1.0 on either side.
pub fn row_sum_within(sum: f64, tolerance: f64) -> bool {
    (sum - 1.0).abs() <= tolerance
}

/// A square transition matrix indexed `[from][to]`.
///
/// Values are stored row-major in a single contiguous buffer with stride
/// `order`. Row `i` holds the probabilities of moving from state `i` to each
/// state `0..order`. The matrix is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    order: usize,
    data: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a matrix of the given order from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::DimensionMismatch`] if `data.len() != order * order`.
    pub fn new(order: usize, data: Vec<f64>) -> Result<Self, MarkovError> {
        let expected = order * order;
        if data.len() != expected {
            return Err(MarkovError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { order, data })
    }

    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::DimensionMismatch`] if any row length differs
    /// from the number of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MarkovError> {
        let order = rows.len();
        let mut data = Vec::with_capacity(order * order);
        for row in rows {
            let row = row.as_ref();
            if row.len() != order {
                return Err(MarkovError::DimensionMismatch {
                    expected: order,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { order, data })
    }

    /// Returns the identity matrix of the given order.
    pub fn identity(order: usize) -> Self {
        let mut data = vec![0.0; order * order];
        for i in 0..order {
            data[i * order + i] = 1.0;
        }
        Self { order, data }
    }

    /// Returns the number of states.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the transition probabilities out of state `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= order`.
    pub fn row(&self, from: usize) -> &[f64] {
        let start = from * self.order;
        &self.data[start..start + self.order]
    }

    /// Returns the probability of moving from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.order && to < self.order,
            "index ({from}, {to}) out of range for order {}",
            self.order
        );
        self.data[from * self.order + to]
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, and an order-0 matrix has no rows anyway.
        self.data.chunks_exact(self.order.max(1))
    }

    /// Returns the row-major backing buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Checks that all values are finite and non-negative, and that each row
    /// sums to 1.0 within `tolerance`.
    pub fn validate(&self, tolerance: f64) -> Result<(), MarkovError> {
        for (i, row) in self.rows().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() || p < 0.0 {
                    return Err(MarkovError::InvalidEntry {
                        row: i,
                        column: j,
                        value: p,
                    });
                }
                sum += p;
            }
            if !row_sum_within(sum, tolerance) {
                return Err(MarkovError::NotStochastic { row: i, sum });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TransitionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|p| format!("{p:.6}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
