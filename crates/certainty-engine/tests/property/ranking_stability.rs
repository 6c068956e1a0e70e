//! Property tests: ranking order and tie stability.

use certainty_engine::*;
use proptest::prelude::*;

fn hypotheses(n: usize) -> Vec<Hypothesis> {
    (0..n)
        .map(|i| Hypothesis::new(format!("P{:02}", i + 1), format!("hypothesis {}", i + 1)))
        .collect()
}

/// Aggregates drawn from a small set so that ties are common.
fn arb_aggregates() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![Just(-0.5), Just(0.0), Just(0.25), Just(0.5), Just(1.0)],
        1..10,
    )
}

proptest! {
    /// Results are sorted descending and equal aggregates keep declaration order.
    #[test]
    fn sorted_descending_with_stable_ties(aggregates in arb_aggregates()) {
        let hyps = hypotheses(aggregates.len());
        let ranked = rank(&hyps, &aggregates);
        prop_assert_eq!(ranked.len(), hyps.len());

        let position = |r: &RankedHypothesis| {
            hyps.iter().position(|h| h.id == r.hypothesis.id).unwrap()
        };
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].aggregate_cf >= pair[1].aggregate_cf);
            if pair[0].aggregate_cf == pair[1].aggregate_cf {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    /// Percentages always carry exactly two decimals and a trailing `%`.
    #[test]
    fn percentage_shape(cf in -1.0_f64..=1.0) {
        let pct = format_percentage(cf);
        prop_assert!(pct.ends_with('%'));
        let number = pct.trim_end_matches('%');
        let decimals = number.split('.').nth(1).map(str::len);
        prop_assert_eq!(decimals, Some(2));
        let parsed: f64 = number.parse().unwrap();
        prop_assert!((parsed - cf * 100.0).abs() <= 0.005 + 1e-9);
    }
}
