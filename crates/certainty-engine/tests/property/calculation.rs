//! Property tests: whole calculations over randomly generated knowledge bases.

use certainty_engine::*;
use proptest::prelude::*;

const TRAITS: usize = 5;
const HYPOTHESES: usize = 3;

fn trait_id(i: usize) -> String {
    format!("K{:02}", i + 1)
}

fn hypothesis_id(i: usize) -> String {
    format!("P{:02}", i + 1)
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    (0..TRAITS, 0..HYPOTHESES, 0.0_f64..=1.0, 0.0_f64..=1.0)
        .prop_map(|(t, h, mb, md)| Rule::new(trait_id(t), hypothesis_id(h), mb, md))
}

fn arb_engine() -> impl Strategy<Value = CertaintyEngine> {
    prop::collection::vec(arb_rule(), 0..20).prop_map(|rules| {
        let mut builder = KnowledgeBase::builder();
        for t in 0..TRAITS {
            builder = builder.with_trait(&trait_id(t));
        }
        for h in 0..HYPOTHESES {
            builder = builder.with_hypothesis(&hypothesis_id(h));
        }
        for rule in rules {
            builder = builder.add_rule(rule);
        }
        let config = EngineConfig {
            degenerate_policy: DegeneratePolicy::Neutral,
            ..EngineConfig::default()
        };
        CertaintyEngine::with_config(builder.build().unwrap(), config)
    })
}

fn arb_observations() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec(
        (0..TRAITS, 0.0_f64..=1.0).prop_map(|(t, c)| Observation::new(trait_id(t), c)),
        0..8,
    )
}

proptest! {
    /// Identical input yields bit-identical results and identical logs.
    #[test]
    fn calculate_is_repeatable(engine in arb_engine(), observations in arb_observations()) {
        let first = engine.calculate(&observations).unwrap();
        let second = engine.calculate(&observations).unwrap();
        prop_assert_eq!(&first.results, &second.results);
        prop_assert_eq!(&first.log, &second.log);
        for (a, b) in first.results.iter().zip(&second.results) {
            prop_assert_eq!(a.aggregate_cf.to_bits(), b.aggregate_cf.to_bits());
        }
    }

    /// Every hypothesis appears exactly once with a bounded aggregate.
    #[test]
    fn results_cover_every_hypothesis(engine in arb_engine(), observations in arb_observations()) {
        let diagnosis = engine.calculate(&observations).unwrap();
        prop_assert_eq!(diagnosis.results.len(), HYPOTHESES);
        for h in 0..HYPOTHESES {
            let id = HypothesisId::new(hypothesis_id(h));
            let cf = diagnosis.aggregate_for(&id);
            prop_assert!(cf.is_some());
            let cf = cf.unwrap();
            prop_assert!((-1.0..=1.0).contains(&cf));
        }
    }

    /// One trace entry per fired rule, in observation then rule order.
    #[test]
    fn trace_records_every_match(engine in arb_engine(), observations in arb_observations()) {
        let diagnosis = engine.calculate(&observations).unwrap();
        let kb = engine.knowledge_base();
        let expected: Vec<(TraitId, HypothesisId)> = observations
            .iter()
            .flat_map(|o| {
                kb.rules_for_trait(&o.trait_id)
                    .map(|r| (o.trait_id.clone(), r.hypothesis_id.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();
        let recorded: Vec<(TraitId, HypothesisId)> = diagnosis
            .trace
            .matches()
            .filter_map(|s| match s {
                TraceStep::RuleMatched { trait_id, hypothesis_id, .. } => {
                    Some((trait_id.clone(), hypothesis_id.clone()))
                }
                _ => None,
            })
            .collect();
        prop_assert_eq!(recorded, expected);
    }
}
