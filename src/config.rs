use serde::Deserialize;

/// Top-level vmp configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VmpConfig {
    /// Power-iteration settings.
    #[serde(default)]
    pub iteration: IterationToml,

    /// Matrix reader settings.
    #[serde(default)]
    pub reader: ReaderToml,

    /// Result line settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IterationToml {
    #[serde(default = "default_residue")]
    pub residue: f64,
    #[serde(default = "default_max_runs")]
    pub max_runs: usize,
}

impl Default for IterationToml {
    fn default() -> Self {
        Self {
            residue: default_residue(),
            max_runs: default_max_runs(),
        }
    }
}

fn default_residue() -> f64 {
    vmp_markov::RESIDUE
}
fn default_max_runs() -> usize {
    vmp_markov::MAX_RUNS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReaderToml {
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
    #[serde(default = "default_row_sum_tolerance")]
    pub row_sum_tolerance: f64,
    #[serde(default = "default_true")]
    pub strict_rows: bool,
}

impl Default for ReaderToml {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
            row_sum_tolerance: default_row_sum_tolerance(),
            strict_rows: true,
        }
    }
}

fn default_comment_marker() -> String {
    "#".to_string()
}
fn default_row_sum_tolerance() -> f64 {
    vmp_markov::ROW_SUM_TOLERANCE
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            precision: default_precision(),
        }
    }
}

fn default_delimiter() -> String {
    ";".to_string()
}
fn default_precision() -> usize {
    6
}
