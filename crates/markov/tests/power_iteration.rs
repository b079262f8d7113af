use approx::assert_abs_diff_eq;
use vmp_markov::{
    IterationConfig, MAX_RUNS, Outcome, ProbabilityVector, TransitionMatrix, multiply,
    power_iterate,
};

/// Build a matrix from literal rows, panicking on a shape error.
fn matrix<R: AsRef<[f64]>>(rows: &[R]) -> TransitionMatrix {
    TransitionMatrix::from_rows(rows).expect("rows form a square matrix")
}

/// Permutation matrix cycling `0 -> 1 -> ... -> n-1 -> 0`.
fn cycle(order: usize) -> TransitionMatrix {
    let mut data = vec![0.0; order * order];
    for i in 0..order {
        data[i * order + (i + 1) % order] = 1.0;
    }
    TransitionMatrix::new(order, data).expect("cycle data has order^2 values")
}

// ---------------------------------------------------------------------------
// 1. regular_chain_reaches_stationary_distribution
// ---------------------------------------------------------------------------
#[test]
fn regular_chain_reaches_stationary_distribution() {
    // pi = [5/6, 1/6] solves pi = pi * P.
    let m = matrix(&[[0.9, 0.1], [0.5, 0.5]]);
    let result = power_iterate(&m, &IterationConfig::new()).expect("valid config");

    assert_eq!(result.outcome(), Outcome::Converged);
    let v = result.vector().as_slice();
    assert_abs_diff_eq!(v[0], 5.0 / 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(v[1], 1.0 / 6.0, epsilon = 1e-9);

    // One more step must leave the vector (almost) unchanged.
    let mut next = result.vector().clone();
    multiply(&mut next, &m).expect("matching order");
    for (a, b) in next.as_slice().iter().zip(v) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 2. probability_mass_is_preserved
// ---------------------------------------------------------------------------
#[test]
fn probability_mass_is_preserved() {
    let m = matrix(&[
        [0.2, 0.3, 0.5, 0.0],
        [0.1, 0.1, 0.4, 0.4],
        [0.25, 0.25, 0.25, 0.25],
        [0.0, 0.6, 0.0, 0.4],
    ]);
    let mut v = ProbabilityVector::point_mass(4);
    for step in 0..50 {
        multiply(&mut v, &m).expect("matching order");
        assert_abs_diff_eq!(v.sum(), 1.0, epsilon = 1e-12);
        assert!(
            v.as_slice().iter().all(|&p| p >= 0.0),
            "step {step}: negative probability in {:?}",
            v.as_slice()
        );
    }
}

// ---------------------------------------------------------------------------
// 3. absorbing_state_collects_all_mass
// ---------------------------------------------------------------------------
#[test]
fn absorbing_state_collects_all_mass() {
    // State 3 is absorbing and reachable from every other state.
    let m = matrix(&[
        [0.6, 0.2, 0.1, 0.1],
        [0.3, 0.3, 0.2, 0.2],
        [0.0, 0.5, 0.0, 0.5],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let result = power_iterate(&m, &IterationConfig::new()).expect("valid config");

    assert_eq!(result.outcome(), Outcome::Converged);
    let v = result.vector().as_slice();
    assert_abs_diff_eq!(v[3], 1.0, epsilon = 1e-7);
    for &p in &v[..3] {
        assert_abs_diff_eq!(p, 0.0, epsilon = 1e-7);
    }
}

// ---------------------------------------------------------------------------
// 4. periodic_chain_hits_default_cap
// ---------------------------------------------------------------------------
#[test]
fn periodic_chain_hits_default_cap() {
    let m = cycle(3);
    let result = power_iterate(&m, &IterationConfig::new()).expect("valid config");

    assert_eq!(result.outcome(), Outcome::Capped);
    assert_eq!(result.iterations(), MAX_RUNS + 1);
    assert_eq!(result.iterations(), 1_000_001);

    // 1_000_001 = 3 * 333_333 + 2 steps around the cycle.
    assert_eq!(result.vector().as_slice(), &[0.0, 0.0, 1.0]);
}

// ---------------------------------------------------------------------------
// 5. periodic_chain_small_cap
// ---------------------------------------------------------------------------
#[test]
fn periodic_chain_small_cap() {
    for cap in [0, 1, 5, 42] {
        let config = IterationConfig::new().with_max_runs(cap);
        let result = power_iterate(&cycle(4), &config).expect("valid config");
        assert_eq!(result.outcome(), Outcome::Capped, "cap {cap}");
        assert_eq!(result.iterations(), cap + 1, "cap {cap}");
    }
}

// ---------------------------------------------------------------------------
// 6. identity_and_symmetric_chains
// ---------------------------------------------------------------------------
#[test]
fn identity_and_symmetric_chains() {
    let identity = matrix(&[[1.0, 0.0], [0.0, 1.0]]);
    let result = power_iterate(&identity, &IterationConfig::new()).expect("valid config");
    assert_eq!(result.outcome(), Outcome::Converged);
    assert_eq!(result.vector().as_slice(), &[1.0, 0.0]);

    let symmetric = matrix(&[[0.5, 0.5], [0.5, 0.5]]);
    let result = power_iterate(&symmetric, &IterationConfig::new()).expect("valid config");
    assert_eq!(result.outcome(), Outcome::Converged);
    assert!(result.iterations() <= 5, "took {} steps", result.iterations());
    assert_abs_diff_eq!(result.vector().as_slice()[0], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(result.vector().as_slice()[1], 0.5, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// 7. looser_residue_stops_earlier
// ---------------------------------------------------------------------------
#[test]
fn looser_residue_stops_earlier() {
    let m = matrix(&[[0.9, 0.1], [0.5, 0.5]]);
    let tight = power_iterate(&m, &IterationConfig::new()).expect("valid config");
    let loose =
        power_iterate(&m, &IterationConfig::new().with_residue(1e-3)).expect("valid config");

    assert_eq!(loose.outcome(), Outcome::Converged);
    assert!(
        loose.iterations() < tight.iterations(),
        "loose={} tight={}",
        loose.iterations(),
        tight.iterations()
    );
}
