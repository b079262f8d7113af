//! Configuration for power iteration.

use crate::error::MarkovError;

/// Default per-element residue below which two iterates are considered equal.
pub const RESIDUE: f64 = 1e-10;

/// Default number of checked multiply steps before iteration is capped.
pub const MAX_RUNS: usize = 1_000_000;

/// Configuration for [`power_iterate`](crate::power_iterate).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use vmp_markov::IterationConfig;
///
/// let config = IterationConfig::new()
///     .with_residue(1e-12)
///     .with_max_runs(5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct IterationConfig {
    residue: f64,
    max_runs: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl IterationConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `residue = 1e-10`, `max_runs = 1_000_000`.
    pub fn new() -> Self {
        Self {
            residue: RESIDUE,
            max_runs: MAX_RUNS,
        }
    }

    /// Sets the convergence residue.
    pub fn with_residue(mut self, residue: f64) -> Self {
        self.residue = residue;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_runs(mut self, max_runs: usize) -> Self {
        self.max_runs = max_runs;
        self
    }

    /// Returns the convergence residue.
    pub fn residue(&self) -> f64 {
        self.residue
    }

    /// Returns the iteration cap.
    pub fn max_runs(&self) -> usize {
        self.max_runs
    }

    /// Validates this configuration.
    ///
    /// The residue must be finite and non-negative. Any `max_runs` is
    /// accepted; zero caps the run after the first multiply.
    pub fn validate(&self) -> Result<(), MarkovError> {
        if !self.residue.is_finite() || self.residue < 0.0 {
            return Err(MarkovError::InvalidConfig {
                reason: format!(
                    "residue must be finite and non-negative, got {}",
                    self.residue
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = IterationConfig::new();
        assert_eq!(config.residue(), 1e-10);
        assert_eq!(config.max_runs(), 1_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_matches_new() {
        let a = IterationConfig::default();
        let b = IterationConfig::new();
        assert_eq!(a.residue(), b.residue());
        assert_eq!(a.max_runs(), b.max_runs());
    }

    #[test]
    fn builder_overrides() {
        let config = IterationConfig::new().with_residue(0.0).with_max_runs(0);
        assert_eq!(config.residue(), 0.0);
        assert_eq!(config.max_runs(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_residue_rejected() {
        let config = IterationConfig::new().with_residue(-1e-3);
        assert!(matches!(
            config.validate(),
            Err(MarkovError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_finite_residue_rejected() {
        for r in [f64::NAN, f64::INFINITY] {
            let config = IterationConfig::new().with_residue(r);
            assert!(config.validate().is_err(), "residue {r} should be rejected");
        }
    }
}
