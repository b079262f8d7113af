//! Loading a row-stochastic matrix from a plain-text file.
//!
//! The format is one matrix row per line, values separated by whitespace.
//! Lines starting with the comment marker (default `#`) are skipped. The
//! number of values on the first non-comment line fixes the matrix order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter;
use std::path::Path;

use tracing::{debug, info, trace, warn};
use vmp_markov::{ROW_SUM_TOLERANCE, TransitionMatrix};

use crate::error::IoError;
use crate::validate::{self, ValidationCollector};

/// Source label used in errors when parsing from an in-memory reader.
const UNNAMED_SOURCE: &str = "<input>";

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a transition matrix.
///
/// The [`Default`] implementation uses `#` comments, a row-sum tolerance of
/// `1e-6` and strict row-width checking.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Prefix marking a line as a comment.
    comment_marker: String,
    /// Maximum absolute deviation of a row sum from 1.0.
    row_sum_tolerance: f64,
    /// Check every row width instead of only the last one.
    strict_rows: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comment_marker: "#".into(),
            row_sum_tolerance: ROW_SUM_TOLERANCE,
            strict_rows: true,
        }
    }
}

impl ReaderConfig {
    /// Set the comment prefix.
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    /// Set the row-sum tolerance.
    pub fn with_row_sum_tolerance(mut self, tolerance: f64) -> Self {
        self.row_sum_tolerance = tolerance;
        self
    }

    /// Enable or disable per-row width checking.
    ///
    /// When disabled, only the last row's width is compared with the row
    /// count. Narrower rows are zero-padded and wider rows truncated to the
    /// order; their row sums still cover every value on the line.
    pub fn with_strict_rows(mut self, strict: bool) -> Self {
        self.strict_rows = strict;
        self
    }

    /// Returns the comment prefix.
    pub fn comment_marker(&self) -> &str {
        &self.comment_marker
    }

    /// Returns the row-sum tolerance.
    pub fn row_sum_tolerance(&self) -> f64 {
        self.row_sum_tolerance
    }

    /// Returns whether every row width is checked.
    pub fn strict_rows(&self) -> bool {
        self.strict_rows
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the comment marker is empty or the
    /// tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.comment_marker.is_empty() {
            c.push("comment_marker must not be empty");
        }
        if !self.row_sum_tolerance.is_finite() || self.row_sum_tolerance < 0.0 {
            c.push(format!(
                "row_sum_tolerance must be finite and non-negative, got {}",
                self.row_sum_tolerance
            ));
        }
        c.finish()
    }

    fn is_comment(&self, line: &str) -> bool {
        line.starts_with(self.comment_marker.as_str())
    }
}

// ---------------------------------------------------------------------------
// File entry points
// ---------------------------------------------------------------------------

/// Determine the matrix order of a file using the default configuration.
///
/// See [`determine_order_with`].
pub fn determine_order(path: &Path) -> Result<usize, IoError> {
    determine_order_with(path, &ReaderConfig::default())
}

/// Determine the tentative matrix order of a file.
///
/// Counts the whitespace-separated tokens on the first non-comment line and
/// stops reading there. A file without any non-comment line has order 0.
/// The count is not checked against later rows; [`read_matrix`] does that.
///
/// # Errors
///
/// Returns [`IoError::InputUnavailable`] if the file cannot be opened, or
/// [`IoError::Read`] if reading fails.
pub fn determine_order_with(path: &Path, config: &ReaderConfig) -> Result<usize, IoError> {
    config.validate()?;
    let reader = open(path)?;
    let order = order_from_lines(reader, path, config)?;
    debug!(path = %path.display(), order, "determined order");
    Ok(order)
}

/// Read and validate a matrix of known order from a file.
///
/// Every non-comment line becomes one row. Each row is checked for
/// parseable, finite, non-negative values whose sum is within the configured
/// tolerance of 1.0. Afterwards the row count must match the column count of
/// the last row and the order.
///
/// # Errors
///
/// Returns [`IoError::InputUnavailable`] if the file cannot be opened, and
/// any of the row or squareness errors described on [`IoError`].
pub fn read_matrix(
    path: &Path,
    order: usize,
    config: &ReaderConfig,
) -> Result<TransitionMatrix, IoError> {
    config.validate()?;
    let reader = open(path)?;
    let matrix = matrix_from_lines(reader, path, order, config)?;
    info!(path = %path.display(), order = matrix.order(), "matrix loaded");
    Ok(matrix)
}

/// Determine the order of a file and read its matrix.
///
/// Equivalent to [`determine_order_with`] followed by [`read_matrix`]. The
/// file is opened twice.
pub fn load_matrix(path: &Path, config: &ReaderConfig) -> Result<TransitionMatrix, IoError> {
    let order = determine_order_with(path, config)?;
    read_matrix(path, order, config)
}

// ---------------------------------------------------------------------------
// Reader entry points
// ---------------------------------------------------------------------------

/// Determine the tentative order from any buffered reader.
pub fn parse_order<R: BufRead>(reader: R, config: &ReaderConfig) -> Result<usize, IoError> {
    config.validate()?;
    order_from_lines(reader, Path::new(UNNAMED_SOURCE), config)
}

/// Read a matrix of known order from any buffered reader.
pub fn parse_matrix<R: BufRead>(
    reader: R,
    order: usize,
    config: &ReaderConfig,
) -> Result<TransitionMatrix, IoError> {
    config.validate()?;
    matrix_from_lines(reader, Path::new(UNNAMED_SOURCE), order, config)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<BufReader<File>, IoError> {
    let file = File::open(path).map_err(|e| IoError::InputUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "opened matrix file");
    Ok(BufReader::new(file))
}

fn order_from_lines<R: BufRead>(
    reader: R,
    source: &Path,
    config: &ReaderConfig,
) -> Result<usize, IoError> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| IoError::Read {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        let line = strip_bom(idx, &line);
        if config.is_comment(line) {
            continue;
        }
        return Ok(line.split_whitespace().count());
    }
    Ok(0)
}

fn matrix_from_lines<R: BufRead>(
    reader: R,
    source: &Path,
    order: usize,
    config: &ReaderConfig,
) -> Result<TransitionMatrix, IoError> {
    let mut data = Vec::with_capacity(order * order);
    let mut rows = 0;
    let mut last_width = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| IoError::Read {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        let line = strip_bom(idx, &line);
        if config.is_comment(line) {
            continue;
        }

        let values = parse_row(line_no, line)?;
        validate::check_entries(line_no, &values)?;

        if config.strict_rows && values.len() != order {
            return Err(IoError::RowWidthMismatch {
                line: line_no,
                expected: order,
                got: values.len(),
            });
        }
        // Row sums cover the stored values. Surplus rows are only counted,
        // so the squareness check reports them.
        let sum: f64 = if rows < order {
            let start = data.len();
            data.extend(values.iter().copied().chain(iter::repeat(0.0)).take(order));
            data[start..].iter().sum()
        } else {
            values.iter().sum()
        };
        validate::check_row_sum(line_no, rows, sum, config.row_sum_tolerance)?;
        trace!(line = line_no, row = rows, width = values.len(), sum, "row read");

        rows += 1;
        last_width = values.len();
    }

    validate::check_square(rows, last_width)?;
    validate::check_square(rows, order)?;

    if order == 0 {
        warn!(path = %source.display(), "matrix has no rows");
    }
    Ok(TransitionMatrix::new(order, data)?)
}

/// Drop a UTF-8 byte order mark from the first line.
fn strip_bom(idx: usize, line: &str) -> &str {
    if idx == 0 {
        line.strip_prefix('\u{feff}').unwrap_or(line)
    } else {
        line
    }
}

/// Split a line on whitespace and parse every token as `f64`.
fn parse_row(line_no: usize, line: &str) -> Result<Vec<f64>, IoError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| IoError::InvalidToken {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(IoError::EmptyRow { line: line_no });
    }
    Ok(values)
}
