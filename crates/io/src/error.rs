//! Error types for vmp-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the vmp-io crate.
///
/// Covers failures to open or read a matrix file, every way a matrix row can
/// be rejected while loading, and invalid reader or writer settings.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the matrix file cannot be opened for reading.
    #[error("cannot open {}: {reason}", path.display())]
    InputUnavailable {
        /// Path that could not be opened.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when reading from an already opened source fails.
    #[error("read error in {}: {reason}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when writing a result line fails.
    #[error("write error: {reason}")]
    Write {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a row does not sum to one within tolerance.
    #[error("line {line}: row {row} not summing to one (sum={sum:.8})")]
    MalformedMatrix {
        /// 1-based line number in the source.
        line: usize,
        /// Zero-based matrix row index.
        row: usize,
        /// The offending row sum.
        sum: f64,
    },

    /// Returned when the number of rows differs from the number of columns.
    #[error("incorrect order: {rows} row(s) but {columns} column(s)")]
    NonSquareMatrix {
        /// Number of data rows read.
        rows: usize,
        /// Column count the rows were checked against.
        columns: usize,
    },

    /// Returned when a row has a different width than the first row.
    #[error("line {line}: expected {expected} value(s), got {got}")]
    RowWidthMismatch {
        /// 1-based line number in the source.
        line: usize,
        /// Width established by the first data row.
        expected: usize,
        /// Width of this row.
        got: usize,
    },

    /// Returned when a non-comment line holds no values.
    #[error("line {line}: empty row")]
    EmptyRow {
        /// 1-based line number in the source.
        line: usize,
    },

    /// Returned when a token cannot be parsed as a number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidToken {
        /// 1-based line number in the source.
        line: usize,
        /// The unparsable token.
        token: String,
    },

    /// Returned when a value is negative or non-finite.
    #[error("line {line}, column {column}: {value} is not a probability")]
    InvalidEntry {
        /// 1-based line number in the source.
        line: usize,
        /// Zero-based column index.
        column: usize,
        /// The invalid value.
        value: f64,
    },

    /// Returned when one or more configuration checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps an error originating from the vmp-markov crate.
    #[error("matrix error: {reason}")]
    Markov {
        /// Description of the underlying matrix failure.
        reason: String,
    },
}

impl From<vmp_markov::MarkovError> for IoError {
    fn from(e: vmp_markov::MarkovError) -> Self {
        IoError::Markov {
            reason: e.to_string(),
        }
    }
}
