//! Discrete time Markov chain power iteration.
//!
//! This crate holds the row-stochastic [`TransitionMatrix`] and drives a
//! probability vector through repeated vector-matrix products until two
//! successive iterates agree element-wise, or an iteration cap is exceeded.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  point mass on 0 │────▶│  v ← v · P     │────▶│  converge / cap  │
//!  │  (vector)        │     │  (iterate)     │◀────│  (iterate)       │
//!  └──────────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use vmp_markov::{IterationConfig, Outcome, TransitionMatrix, power_iterate};
//!
//! let matrix = TransitionMatrix::from_rows(&[[0.5, 0.5], [0.5, 0.5]]).unwrap();
//! let result = power_iterate(&matrix, &IterationConfig::new()).unwrap();
//!
//! assert_eq!(result.outcome(), Outcome::Converged);
//! assert!((result.vector().as_slice()[0] - 0.5).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod iterate;
pub mod result;
pub mod transition;
pub mod vector;

pub use config::{IterationConfig, MAX_RUNS, RESIDUE};
pub use error::MarkovError;
pub use iterate::{converge, multiply, multiply_into, power_iterate};
pub use result::{IterationResult, Outcome};
pub use transition::{ROW_SUM_TOLERANCE, TransitionMatrix, row_sum_within};
pub use vector::ProbabilityVector;
