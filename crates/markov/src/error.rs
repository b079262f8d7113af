//! Error types for the vmp-markov crate.

/// Error type for all fallible operations in the vmp-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when an iteration configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when matrix data does not match the requested order.
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch {
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        got: usize,
    },

    /// Returned when a pre-allocated buffer has the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },

    /// Returned when a matrix row does not sum to one.
    #[error("row {row} sums to {sum}, expected ~1.0")]
    NotStochastic {
        /// Zero-based row index.
        row: usize,
        /// The offending row sum.
        sum: f64,
    },

    /// Returned when a matrix entry is negative or non-finite.
    #[error("entry [{row}][{column}] = {value} is not a probability")]
    InvalidEntry {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The invalid value.
        value: f64,
    },
}
