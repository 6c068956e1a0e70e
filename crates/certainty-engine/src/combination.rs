//! Combination engine: folds the contributions for one hypothesis into a
//! single aggregate certainty factor.
//!
//! The combination law is applied strictly left to right. It is not
//! associative under floating point, so callers must hand contributions over
//! in the order they were produced.

use tracing::{debug, warn};

use crate::config::DegeneratePolicy;
use crate::error::{CfError, CfResult};
use crate::trace::{CombinationBranch, TraceStep};
use crate::types::HypothesisId;

// ── Combination Law ─────────────────────────────────────────────────────

/// Branch of the combination law that applies to `(a, b)`.
pub fn branch_for(a: f64, b: f64) -> CombinationBranch {
    if a >= 0.0 && b >= 0.0 {
        CombinationBranch::BothSupporting
    } else if a <= 0.0 && b <= 0.0 {
        CombinationBranch::BothOpposing
    } else {
        CombinationBranch::Conflicting
    }
}

/// Combine two certainty factors.
///
/// Returns `None` when the operands are fully certain and of opposite sign,
/// where the law's denominator is zero.
pub fn combine(a: f64, b: f64) -> Option<f64> {
    let value = match branch_for(a, b) {
        CombinationBranch::BothSupporting => a + b * (1.0 - a),
        CombinationBranch::BothOpposing => a + b * (1.0 + a),
        _ => {
            let denominator = 1.0 - a.abs().min(b.abs());
            if denominator == 0.0 {
                return None;
            }
            (a + b) / denominator
        }
    };
    // Rounding can push a sum marginally past ±1.
    Some(value.clamp(-1.0, 1.0))
}

// ── Combination Engine ──────────────────────────────────────────────────

/// Outcome of folding one hypothesis' contributions.
#[derive(Clone, Debug, PartialEq)]
pub struct Fold {
    /// Aggregate CF in [-1, 1]; 0.0 when there were no contributions.
    pub aggregate: f64,
    /// Trace steps recorded while folding.
    pub steps: Vec<TraceStep>,
}

/// Sequential combiner applying a configured degenerate-case policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombinationEngine {
    pub policy: DegeneratePolicy,
}

impl CombinationEngine {
    pub fn new(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }

    /// Apply the law to one pair, resolving the degenerate case per policy.
    pub fn step(
        &self,
        hypothesis_id: &HypothesisId,
        previous: f64,
        incoming: f64,
    ) -> CfResult<TraceStep> {
        let (branch, result) = match combine(previous, incoming) {
            Some(result) => (branch_for(previous, incoming), result),
            None => match self.policy {
                DegeneratePolicy::Reject => {
                    return Err(CfError::DegenerateCombination {
                        hypothesis_id: hypothesis_id.clone(),
                        left: previous,
                        right: incoming,
                    })
                }
                DegeneratePolicy::Neutral => {
                    warn!(
                        hypothesis = %hypothesis_id,
                        left = previous,
                        right = incoming,
                        "Fully certain evidence cancels out; treating step as 0"
                    );
                    (CombinationBranch::DegenerateNeutral, 0.0)
                }
            },
        };

        Ok(TraceStep::Combined {
            hypothesis_id: hypothesis_id.clone(),
            previous,
            incoming,
            branch,
            result,
        })
    }

    /// Fold contributions left to right, seeding with the first value.
    ///
    /// A single contribution is taken as-is; an empty list yields 0.0 and
    /// records nothing.
    pub fn fold(&self, hypothesis_id: &HypothesisId, contributions: &[f64]) -> CfResult<Fold> {
        let Some((&seed, rest)) = contributions.split_first() else {
            return Ok(Fold {
                aggregate: 0.0,
                steps: Vec::new(),
            });
        };

        let mut steps = Vec::with_capacity(rest.len() + 2);
        steps.push(TraceStep::CombinationStarted {
            hypothesis_id: hypothesis_id.clone(),
            seed,
        });

        let mut current = seed;
        for &incoming in rest {
            let step = self.step(hypothesis_id, current, incoming)?;
            if let TraceStep::Combined { result, .. } = step {
                current = result;
            }
            steps.push(step);
        }

        debug!(
            hypothesis = %hypothesis_id,
            contributions = contributions.len(),
            aggregate = current,
            "Folded contributions"
        );

        steps.push(TraceStep::Concluded {
            hypothesis_id: hypothesis_id.clone(),
            aggregate: current,
        });

        Ok(Fold {
            aggregate: current,
            steps,
        })
    }
}
