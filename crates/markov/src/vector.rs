//! Probability vector carried through power iteration.

/// A distribution over chain states, stored densely.
///
/// The vector is expected to sum to 1.0 but this is never re-checked after
/// construction; multiplying by a row-stochastic matrix preserves the sum up
/// to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityVector {
    probs: Vec<f64>,
}

impl ProbabilityVector {
    /// Returns a point mass on state 0: `[1, 0, ..., 0]`.
    ///
    /// An order of zero yields an empty vector.
    pub fn point_mass(order: usize) -> Self {
        let mut probs = vec![0.0; order];
        if let Some(first) = probs.first_mut() {
            *first = 1.0;
        }
        Self { probs }
    }

    /// Wraps an existing buffer without validation.
    pub fn from_vec(probs: Vec<f64>) -> Self {
        Self { probs }
    }

    /// Returns the number of states.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Returns `true` if the vector has no states.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Returns the probabilities as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Returns the probabilities as a mutable slice.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.probs
    }

    /// Returns the total probability mass.
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_mass_on_first_state() {
        let v = ProbabilityVector::point_mass(4);
        assert_eq!(v.as_slice(), &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(v.len(), 4);
        assert!((v.sum() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn point_mass_order_one() {
        assert_eq!(ProbabilityVector::point_mass(1).as_slice(), &[1.0]);
    }

    #[test]
    fn point_mass_order_zero_is_empty() {
        let v = ProbabilityVector::point_mass(0);
        assert!(v.is_empty());
        assert_eq!(v.sum(), 0.0);
    }

    #[test]
    fn from_vec_keeps_buffer() {
        let v = ProbabilityVector::from_vec(vec![0.25, 0.75]);
        assert_eq!(v.as_slice(), &[0.25, 0.75]);
    }
}
