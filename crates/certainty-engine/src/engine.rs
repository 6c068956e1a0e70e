//! Central certainty factor engine.
//!
//! `CertaintyEngine::calculate` orchestrates the full pipeline:
//! validation → rule matching → per-hypothesis combination → ranking.

use tracing::{debug, info};

use crate::combination::CombinationEngine;
use crate::config::EngineConfig;
use crate::error::{CfError, CfResult, InputViolation};
use crate::evaluator::RuleEvaluator;
use crate::knowledge::KnowledgeBase;
use crate::ranking::{rank, RankedHypothesis};
use crate::trace::Trace;
use crate::types::{HypothesisId, Observation, Trait};

// ── Diagnosis ───────────────────────────────────────────────────────────

/// Outcome of one `calculate` call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnosis {
    /// Every hypothesis, strongest first.
    pub results: Vec<RankedHypothesis>,
    /// Rendered trace, ready for display.
    pub log: Vec<String>,
    /// Structured trace the log was rendered from.
    pub trace: Trace,
}

impl Diagnosis {
    /// The strongest hypothesis.
    pub fn top(&self) -> Option<&RankedHypothesis> {
        self.results.first()
    }

    pub fn aggregate_for(&self, id: &HypothesisId) -> Option<f64> {
        self.results
            .iter()
            .find(|r| &r.hypothesis.id == id)
            .map(|r| r.aggregate_cf)
    }
}

// ── Certainty Engine ────────────────────────────────────────────────────

/// Certainty factor inference over an immutable knowledge base.
///
/// The engine keeps no per-call state, so a shared reference can serve
/// concurrent callers.
#[derive(Clone, Debug)]
pub struct CertaintyEngine {
    kb: KnowledgeBase,
    config: EngineConfig,
}

impl CertaintyEngine {
    /// Create an engine with the default configuration.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::with_config(kb, EngineConfig::default())
    }

    pub fn with_config(kb: KnowledgeBase, config: EngineConfig) -> Self {
        Self { kb, config }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank every hypothesis against the given observations.
    ///
    /// Observations are evaluated in the order given; that order, then rule
    /// definition order, fixes the combination order per hypothesis. All
    /// observations are validated before any evaluation starts.
    pub fn calculate(&self, observations: &[Observation]) -> CfResult<Diagnosis> {
        self.validate(observations)?;

        let evaluator = RuleEvaluator::new(&self.kb);
        let hypotheses = self.kb.hypotheses();
        let mut trace = Trace::new();

        // Contributions grouped by hypothesis declaration position.
        let mut grouped: Vec<Vec<f64>> = vec![Vec::new(); hypotheses.len()];
        for observation in observations {
            let evaluation = evaluator.evaluate(observation);
            debug!(
                trait_id = %observation.trait_id,
                confidence = observation.user_confidence,
                matched = evaluation.contributions.len(),
                "Evaluated observation"
            );
            for contribution in evaluation.contributions {
                if let Some(pos) = self.kb.hypothesis_position(&contribution.hypothesis_id) {
                    grouped[pos].push(contribution.value);
                }
            }
            trace.extend(evaluation.steps);
        }

        let combiner = CombinationEngine::new(self.config.degenerate_policy);
        let mut aggregates = vec![0.0; hypotheses.len()];
        for (pos, contributions) in grouped.iter().enumerate() {
            if contributions.is_empty() {
                continue;
            }
            let fold = combiner.fold(&hypotheses[pos].id, contributions)?;
            aggregates[pos] = fold.aggregate;
            trace.extend(fold.steps);
        }

        let results = rank(hypotheses, &aggregates);
        let log = trace.render(&self.config.trace);

        if let Some(top) = results.first() {
            info!(
                observations = observations.len(),
                steps = trace.len(),
                top = %top.hypothesis.id,
                aggregate = top.aggregate_cf,
                "Diagnosis complete"
            );
        }

        Ok(Diagnosis {
            results,
            log,
            trace,
        })
    }

    /// Traits observed with at least the configured strong confidence that
    /// have a supporting rule for the diagnosis' top hypothesis, in
    /// observation order.
    pub fn supporting_traits(
        &self,
        diagnosis: &Diagnosis,
        observations: &[Observation],
    ) -> Vec<&Trait> {
        let Some(top) = diagnosis.top() else {
            return Vec::new();
        };

        let mut traits: Vec<&Trait> = Vec::new();
        for observation in observations
            .iter()
            .filter(|o| o.user_confidence >= self.config.strong_confidence)
        {
            let supports = self
                .kb
                .rules_for_trait(&observation.trait_id)
                .any(|r| r.hypothesis_id == top.hypothesis.id && r.is_supporting());
            if !supports {
                continue;
            }
            if let Some(t) = self.kb.get_trait(&observation.trait_id) {
                if !traits.iter().any(|seen| seen.id == t.id) {
                    traits.push(t);
                }
            }
        }
        traits
    }

    /// Check every observation against the knowledge base without
    /// evaluating anything. `calculate` runs the same check first.
    pub fn validate(&self, observations: &[Observation]) -> CfResult<()> {
        for (index, observation) in observations.iter().enumerate() {
            if !self.kb.contains_trait(&observation.trait_id) {
                return Err(CfError::invalid_input(
                    index,
                    InputViolation::UnknownTrait {
                        trait_id: observation.trait_id.clone(),
                    },
                ));
            }
            if !(0.0..=1.0).contains(&observation.user_confidence) {
                return Err(CfError::invalid_input(
                    index,
                    InputViolation::ConfidenceOutOfRange {
                        trait_id: observation.trait_id.clone(),
                        value: observation.user_confidence,
                    },
                ));
            }
        }
        Ok(())
    }
}
