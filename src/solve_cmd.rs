//! Solve command: load a matrix, run power iteration, print the result line.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use vmp_io::{determine_order_with, read_matrix, write_result};
use vmp_markov::power_iterate;

use crate::cli::SolveArgs;
use crate::config::VmpConfig;
use crate::convert;

/// Run the load -> iterate -> format pipeline for one matrix file.
pub fn run(file: &Path, args: SolveArgs) -> Result<()> {
    let _cmd = info_span!("solve").entered();

    // 1. Load optional TOML config
    let mut config = match args.config {
        Some(ref config_path) => {
            let toml_str = std::fs::read_to_string(config_path).with_context(|| {
                format!("failed to read config file: {}", config_path.display())
            })?;
            toml::from_str::<VmpConfig>(&toml_str).context("failed to parse TOML config")?
        }
        None => VmpConfig::default(),
    };

    // 2. Merge CLI flags; CLI overrides config file values
    apply_overrides(&mut config, &args);

    let iteration_cfg = convert::build_iteration_config(&config.iteration)?;
    let reader_cfg = convert::build_reader_config(&config.reader)?;
    let writer_cfg = convert::build_writer_config(&config.output)?;

    // 3. Load the matrix
    info!(path = %file.display(), "reading matrix");
    let order = determine_order_with(file, &reader_cfg)
        .with_context(|| format!("failed to read matrix: {}", file.display()))?;
    let matrix = read_matrix(file, order, &reader_cfg)
        .with_context(|| format!("invalid matrix: {}", file.display()))?;

    if args.show_matrix {
        eprint!("{matrix}");
    }

    // 4. Iterate
    let result = power_iterate(&matrix, &iteration_cfg).context("power iteration failed")?;
    info!(
        iterations = result.iterations(),
        outcome = ?result.outcome(),
        "power iteration done"
    );
    if !result.outcome().is_converged() {
        warn!(
            max_runs = iteration_cfg.max_runs(),
            "iteration cap reached before convergence"
        );
    }

    // 5. Print the result line
    write_result(io::stdout().lock(), &result, &writer_cfg)
        .context("failed to write result")?;

    Ok(())
}

/// Overwrites config values with any flags given on the command line.
fn apply_overrides(config: &mut VmpConfig, args: &SolveArgs) {
    if let Some(residue) = args.residue {
        config.iteration.residue = residue;
    }
    if let Some(max_runs) = args.max_runs {
        config.iteration.max_runs = max_runs;
    }
    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }
    if args.lenient {
        config.reader.strict_rows = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    fn args(argv: &[&str]) -> SolveArgs {
        Cli::try_parse_from(argv).unwrap().solve
    }

    #[test]
    fn no_flags_keep_config() {
        let mut config: VmpConfig =
            toml::from_str("[iteration]\nmax_runs = 7\n[reader]\nstrict_rows = true\n").unwrap();
        apply_overrides(&mut config, &args(&["vmp", "m.txt"]));
        assert_eq!(config.iteration.max_runs, 7);
        assert!(config.reader.strict_rows);
        assert_eq!(config.output.precision, 6);
    }

    #[test]
    fn flags_override_config() {
        let mut config: VmpConfig = toml::from_str("[iteration]\nmax_runs = 7\n").unwrap();
        apply_overrides(
            &mut config,
            &args(&[
                "vmp",
                "--max-runs",
                "9",
                "--residue",
                "0.5",
                "--precision",
                "2",
                "--lenient",
                "m.txt",
            ]),
        );
        assert_eq!(config.iteration.max_runs, 9);
        assert_eq!(config.iteration.residue, 0.5);
        assert_eq!(config.output.precision, 2);
        assert!(!config.reader.strict_rows);
    }

    #[test]
    fn missing_matrix_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = run(&path, args(&["vmp"])).unwrap_err();
        assert!(format!("{err:#}").contains("cannot open"));
    }

    #[test]
    fn missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let matrix = dir.path().join("m.txt");
        std::fs::write(&matrix, "1\n").unwrap();
        let cfg = dir.path().join("nope.toml");
        let err = run(&matrix, args(&["vmp", "-c", cfg.to_str().unwrap()])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
