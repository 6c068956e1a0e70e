//! Rule evaluator: turns one observation into weighted contributions.
//!
//! Every rule whose trait matches the observation fires once, in rule
//! definition order, producing `user_confidence * expert_cf` for the rule's
//! hypothesis.

use crate::knowledge::KnowledgeBase;
use crate::trace::TraceStep;
use crate::types::{HypothesisId, Observation};

/// A single piece of evidence for one hypothesis.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub hypothesis_id: HypothesisId,
    /// `user_confidence * expert_cf`, in [-1, 1].
    pub value: f64,
}

/// Contributions and trace steps produced by one observation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    pub contributions: Vec<Contribution>,
    pub steps: Vec<TraceStep>,
}

/// Matches observations against the rules of a knowledge base.
#[derive(Clone, Copy, Debug)]
pub struct RuleEvaluator<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> RuleEvaluator<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Evaluate one observation. No matching rules is not an error; the
    /// result is simply empty.
    pub fn evaluate(&self, observation: &Observation) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for rule in self.kb.rules_for_trait(&observation.trait_id) {
            let expert_cf = rule.expert_cf();
            let contribution = observation.user_confidence * expert_cf;

            evaluation.steps.push(TraceStep::RuleMatched {
                trait_id: observation.trait_id.clone(),
                user_confidence: observation.user_confidence,
                hypothesis_id: rule.hypothesis_id.clone(),
                measure_of_belief: rule.measure_of_belief,
                measure_of_disbelief: rule.measure_of_disbelief,
                expert_cf,
                contribution,
            });
            evaluation.contributions.push(Contribution {
                hypothesis_id: rule.hypothesis_id.clone(),
                value: contribution,
            });
        }

        evaluation
    }
}
