//! Output types for power iteration.

use crate::vector::ProbabilityVector;

/// How a power-iteration run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Successive iterates agreed within the residue before the cap.
    Converged,
    /// The iteration cap was exceeded without meeting the residue.
    Capped,
}

impl Outcome {
    /// Returns the numeric flag used in result lines: `1` converged, `0` capped.
    pub fn flag(self) -> u8 {
        match self {
            Self::Converged => 1,
            Self::Capped => 0,
        }
    }

    /// Returns `true` for [`Outcome::Converged`].
    pub fn is_converged(self) -> bool {
        self == Self::Converged
    }
}

/// Result of a power-iteration run.
#[derive(Debug, Clone)]
pub struct IterationResult {
    outcome: Outcome,
    vector: ProbabilityVector,
    /// Number of vector-matrix multiplications performed.
    iterations: usize,
}

impl IterationResult {
    /// Creates a new `IterationResult`.
    pub(crate) fn new(outcome: Outcome, vector: ProbabilityVector, iterations: usize) -> Self {
        Self {
            outcome,
            vector,
            iterations,
        }
    }

    /// Returns how the run terminated.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final probability vector.
    pub fn vector(&self) -> &ProbabilityVector {
        &self.vector
    }

    /// Returns the number of multiply operations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
