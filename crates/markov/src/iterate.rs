//! Power iteration: repeated vector-matrix products until successive
//! iterates agree or the iteration cap is exceeded.

use tracing::{debug, trace};

use crate::config::IterationConfig;
use crate::error::MarkovError;
use crate::result::{IterationResult, Outcome};
use crate::transition::TransitionMatrix;
use crate::vector::ProbabilityVector;

/// Emit a trace event every this many iterations.
const TRACE_EVERY: usize = 100_000;

/// Computes `out = vector * matrix` for a row vector.
///
/// `out[i] = Σ_j matrix[j][i] * vector[j]`, summed over `j` in ascending order.
///
/// # Errors
///
/// Returns [`MarkovError::DimensionMismatch`] if `vector` does not have
/// `matrix.order()` elements, or [`MarkovError::BufferLengthMismatch`] if
/// `out` does not.
pub fn multiply_into(
    vector: &[f64],
    matrix: &TransitionMatrix,
    out: &mut [f64],
) -> Result<(), MarkovError> {
    let order = matrix.order();
    if vector.len() != order {
        return Err(MarkovError::DimensionMismatch {
            expected: order,
            got: vector.len(),
        });
    }
    if out.len() != order {
        return Err(MarkovError::BufferLengthMismatch {
            expected: order,
            got: out.len(),
        });
    }
    out.fill(0.0);
    for (row, &weight) in matrix.rows().zip(vector) {
        for (o, &p) in out.iter_mut().zip(row) {
            *o += p * weight;
        }
    }
    Ok(())
}

/// Replaces `vector` with `vector * matrix`.
///
/// The product is computed into a fresh buffer and swapped in only once it
/// is complete.
///
/// # Errors
///
/// Returns [`MarkovError::DimensionMismatch`] if the vector length differs
/// from the matrix order.
pub fn multiply(
    vector: &mut ProbabilityVector,
    matrix: &TransitionMatrix,
) -> Result<(), MarkovError> {
    let mut aux = vec![0.0; matrix.order()];
    multiply_into(vector.as_slice(), matrix, &mut aux)?;
    *vector = ProbabilityVector::from_vec(aux);
    Ok(())
}

/// Returns `true` if every element of `previous` and `current` differs by
/// at most `residue`.
///
/// Slices of unequal length never converge. NaN differences never satisfy
/// the residue.
pub fn converge(previous: &[f64], current: &[f64], residue: f64) -> bool {
    previous.len() == current.len()
        && previous
            .iter()
            .zip(current)
            .all(|(a, b)| (a - b).abs() <= residue)
}

/// Runs power iteration from a point mass on state 0.
///
/// Each step copies the current vector aside, multiplies, and increments the
/// run counter. If the counter then exceeds `max_runs` the run stops as
/// [`Outcome::Capped`] without a convergence check, so a chain that never
/// settles performs exactly `max_runs + 1` multiplications. Otherwise the
/// loop ends as [`Outcome::Converged`] as soon as [`converge`] holds.
///
/// Chains of order 0 or 1 converge after the first multiply.
///
/// # Errors
///
/// Returns [`MarkovError::InvalidConfig`] if `config` fails validation.
#[tracing::instrument(skip(matrix, config), fields(order = matrix.order()))]
pub fn power_iterate(
    matrix: &TransitionMatrix,
    config: &IterationConfig,
) -> Result<IterationResult, MarkovError> {
    config.validate()?;

    let order = matrix.order();
    let mut current = ProbabilityVector::point_mass(order);
    let mut previous = ProbabilityVector::from_vec(vec![0.0; order]);
    let mut runs: usize = 0;

    let outcome = loop {
        // previous takes the old iterate, current's stale buffer receives the product.
        std::mem::swap(&mut previous, &mut current);
        multiply_into(previous.as_slice(), matrix, current.as_mut_slice())?;
        runs += 1;

        if runs > config.max_runs() {
            break Outcome::Capped;
        }
        if converge(previous.as_slice(), current.as_slice(), config.residue()) {
            break Outcome::Converged;
        }
        if runs % TRACE_EVERY == 0 {
            trace!(runs, "still iterating");
        }
    };

    debug!(iterations = runs, ?outcome, "power iteration finished");
    Ok(IterationResult::new(outcome, current, runs))
}
