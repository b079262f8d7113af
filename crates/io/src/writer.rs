//! Rendering an iteration result as a single delimited line.

use std::io::Write;

use vmp_markov::IterationResult;

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Largest number of decimals that still carries information for an `f64`.
const MAX_PRECISION: usize = 17;

/// Configuration for result lines.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Separator between the outcome flag and each value.
    delimiter: String,
    /// Number of decimals printed per value.
    precision: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: ";".into(),
            precision: 6,
        }
    }
}

impl WriterConfig {
    /// Sets the field separator.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the number of decimals per value.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the field separator.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the number of decimals per value.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is empty or the
    /// precision exceeds 17.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.delimiter.is_empty() {
            c.push("delimiter must not be empty");
        }
        if self.precision > MAX_PRECISION {
            c.push(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            ));
        }
        c.finish()
    }
}

/// Formats a result as `<flag><d><v0><d>...<d><v_{n-1}>`.
///
/// The flag is `1` for a converged run and `0` for a capped one. Values use
/// fixed-point notation with the configured precision. There is no trailing
/// delimiter, and an empty vector renders only the flag.
pub fn format_result(result: &IterationResult, config: &WriterConfig) -> String {
    let mut line = result.outcome().flag().to_string();
    for p in result.vector().as_slice() {
        line.push_str(&config.delimiter);
        line.push_str(&format!("{p:.prec$}", prec = config.precision));
    }
    line
}

/// Writes the formatted result followed by a newline.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Write`] if the writer fails.
pub fn write_result<W: Write>(
    mut writer: W,
    result: &IterationResult,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;
    writeln!(writer, "{}", format_result(result, config)).map_err(|e| IoError::Write {
        reason: e.to_string(),
    })
}
