//! Property tests: the CF combination law and the left-to-right fold.

use certainty_engine::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// A certainty factor strictly inside (-1, 1).
fn arb_open_cf() -> impl Strategy<Value = f64> {
    -0.999_f64..0.999
}

/// A certainty factor anywhere in [-1, 1].
fn arb_cf() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0_f64..=1.0,
        1 => Just(1.0),
        1 => Just(-1.0),
    ]
}

fn arb_contributions(max: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_open_cf(), 0..max)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Zero evidence never moves an existing certainty factor.
    #[test]
    fn zero_is_neutral(a in arb_open_cf()) {
        prop_assert_eq!(combine(a, 0.0), Some(a));
    }

    /// Combined values stay inside [-1, 1]; only full contradiction is undefined.
    #[test]
    fn result_stays_bounded(a in arb_cf(), b in arb_cf()) {
        match combine(a, b) {
            Some(v) => prop_assert!((-1.0..=1.0).contains(&v), "combine({}, {}) = {}", a, b, v),
            None => prop_assert!(a.abs() == 1.0 && b.abs() == 1.0 && a.signum() != b.signum()),
        }
    }

    /// Agreeing evidence never weakens belief in either direction.
    #[test]
    fn agreeing_evidence_reinforces(a in 0.0_f64..1.0, b in 0.0_f64..1.0) {
        let up = combine(a, b).unwrap();
        prop_assert!(up >= a.max(b) - 1e-12);

        let down = combine(-a, -b).unwrap();
        prop_assert!(down <= (-a).min(-b) + 1e-12);
    }

    /// The branch follows the operand signs.
    #[test]
    fn branch_matches_signs(a in arb_open_cf(), b in arb_open_cf()) {
        let expected = if a >= 0.0 && b >= 0.0 {
            CombinationBranch::BothSupporting
        } else if a <= 0.0 && b <= 0.0 {
            CombinationBranch::BothOpposing
        } else {
            CombinationBranch::Conflicting
        };
        prop_assert_eq!(branch_for(a, b), expected);
    }

    /// Folding is a plain left fold of `combine`, repeatable bit for bit.
    #[test]
    fn fold_is_deterministic_left_fold(values in arb_contributions(12)) {
        let engine = CombinationEngine::default();
        let id = HypothesisId::from("P01");

        let first = engine.fold(&id, &values).unwrap();
        let second = engine.fold(&id, &values).unwrap();
        prop_assert_eq!(first.aggregate.to_bits(), second.aggregate.to_bits());
        prop_assert_eq!(&first.steps, &second.steps);

        let expected = match values.split_first() {
            None => 0.0,
            Some((&seed, rest)) => rest
                .iter()
                .fold(seed, |acc, &v| combine(acc, v).unwrap()),
        };
        prop_assert_eq!(first.aggregate.to_bits(), expected.to_bits());
    }

    /// One combination step is recorded per contribution after the seed.
    #[test]
    fn fold_records_one_step_per_pair(values in arb_contributions(12)) {
        let fold = CombinationEngine::default()
            .fold(&HypothesisId::from("P02"), &values)
            .unwrap();
        let combined = fold
            .steps
            .iter()
            .filter(|s| matches!(s, TraceStep::Combined { .. }))
            .count();
        prop_assert_eq!(combined, values.len().saturating_sub(1));
    }
}
