//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::*;

use vmp_io::{ReaderConfig, WriterConfig};
use vmp_markov::IterationConfig;

/// Builds an [`IterationConfig`] from the TOML iteration section.
pub fn build_iteration_config(t: &IterationToml) -> Result<IterationConfig> {
    let cfg = IterationConfig::new()
        .with_residue(t.residue)
        .with_max_runs(t.max_runs);
    cfg.validate().context("invalid [iteration] config")?;
    Ok(cfg)
}

/// Builds a [`ReaderConfig`] from the TOML reader section.
pub fn build_reader_config(t: &ReaderToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_comment_marker(&t.comment_marker)
        .with_row_sum_tolerance(t.row_sum_tolerance)
        .with_strict_rows(t.strict_rows);
    cfg.validate().context("invalid [reader] config")?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML output section.
pub fn build_writer_config(t: &OutputToml) -> Result<WriterConfig> {
    let cfg = WriterConfig::default()
        .with_delimiter(&t.delimiter)
        .with_precision(t.precision);
    cfg.validate().context("invalid [output] config")?;
    Ok(cfg)
}
