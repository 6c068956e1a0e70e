//! Calculation trace: a structured record of every arithmetic step.
//!
//! The engine records `TraceStep`s while it works; text is produced only
//! when a presentation layer calls [`Trace::render`].

use serde::{Deserialize, Serialize};

use crate::config::TracePrecision;
use crate::types::{HypothesisId, TraitId};

/// Which branch of the combination law produced a combined value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationBranch {
    /// Both operands ≥ 0: `a + b(1 − a)`.
    BothSupporting,
    /// Both operands ≤ 0: `a + b(1 + a)`.
    BothOpposing,
    /// Mixed signs: `(a + b) / (1 − min(|a|, |b|))`.
    Conflicting,
    /// Mixed signs with a zero denominator, resolved as 0.0.
    DegenerateNeutral,
}

impl std::fmt::Display for CombinationBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BothSupporting => write!(f, "both-supporting"),
            Self::BothOpposing => write!(f, "both-opposing"),
            Self::Conflicting => write!(f, "conflicting"),
            Self::DegenerateNeutral => write!(f, "degenerate-neutral"),
        }
    }
}

/// One recorded step of a calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceStep {
    /// A rule fired for an observation.
    RuleMatched {
        trait_id: TraitId,
        user_confidence: f64,
        hypothesis_id: HypothesisId,
        measure_of_belief: f64,
        measure_of_disbelief: f64,
        expert_cf: f64,
        contribution: f64,
    },
    /// Folding starts for a hypothesis; `seed` is its first contribution.
    CombinationStarted {
        hypothesis_id: HypothesisId,
        seed: f64,
    },
    /// One application of the combination law.
    Combined {
        hypothesis_id: HypothesisId,
        previous: f64,
        incoming: f64,
        branch: CombinationBranch,
        result: f64,
    },
    /// Final aggregate for a hypothesis that had contributions.
    Concluded {
        hypothesis_id: HypothesisId,
        aggregate: f64,
    },
}

/// Ordered record of a calculation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn extend(&mut self, steps: impl IntoIterator<Item = TraceStep>) {
        self.steps.extend(steps);
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps of the rule-matching phase.
    pub fn matches(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps
            .iter()
            .filter(|s| matches!(s, TraceStep::RuleMatched { .. }))
    }

    /// Combination steps recorded for one hypothesis.
    pub fn combinations_for<'a>(
        &'a self,
        id: &'a HypothesisId,
    ) -> impl Iterator<Item = &'a TraceStep> + 'a {
        self.steps.iter().filter(move |s| match s {
            TraceStep::Combined { hypothesis_id, .. } => hypothesis_id == id,
            _ => false,
        })
    }

    /// Render the trace as display lines: a rule-matching section followed
    /// by a combination section.
    pub fn render(&self, precision: &TracePrecision) -> Vec<String> {
        let c = precision.coefficient_decimals;
        let v = precision.value_decimals;
        let mut lines = vec!["=== 1. Rule Matching ===".to_string()];
        let mut combination_header = false;
        let mut fold_step = 0usize;

        for step in &self.steps {
            if !matches!(step, TraceStep::RuleMatched { .. }) && !combination_header {
                lines.push(String::new());
                lines.push("=== 2. CF Combination ===".to_string());
                combination_header = true;
            }
            match step {
                TraceStep::RuleMatched {
                    trait_id,
                    user_confidence,
                    hypothesis_id,
                    measure_of_belief,
                    measure_of_disbelief,
                    expert_cf,
                    contribution,
                } => {
                    lines.push(format!(
                        "Trait [{trait_id}] (CF user: {user_confidence}) matches [{hypothesis_id}]"
                    ));
                    lines.push(format!(
                        "   MB: {measure_of_belief}, MD: {measure_of_disbelief} => CF expert: {expert_cf:.c$}"
                    ));
                    lines.push(format!(
                        "   -> CF rule = {user_confidence} * {expert_cf:.c$} = {contribution:.v$}"
                    ));
                }
                TraceStep::CombinationStarted {
                    hypothesis_id,
                    seed,
                } => {
                    fold_step = 1;
                    lines.push(String::new());
                    lines.push(format!("Combining CF for {hypothesis_id}:"));
                    lines.push(format!("   CF(1) = {seed:.v$}"));
                }
                TraceStep::Combined {
                    previous,
                    incoming,
                    branch,
                    result,
                    ..
                } => {
                    fold_step += 1;
                    let formula = match branch {
                        CombinationBranch::BothSupporting => format!(
                            "{previous:.v$} + {incoming:.v$} * (1 - {previous:.v$})"
                        ),
                        CombinationBranch::BothOpposing => format!(
                            "{previous:.v$} + {incoming:.v$} * (1 + {previous:.v$})"
                        ),
                        CombinationBranch::Conflicting => format!(
                            "({previous:.v$} + {incoming:.v$}) / (1 - min(|{previous:.v$}|, |{incoming:.v$}|))"
                        ),
                        CombinationBranch::DegenerateNeutral => format!(
                            "{previous:.v$} and {incoming:.v$} cancel completely, treated as 0"
                        ),
                    };
                    lines.push(format!(
                        "   CF({fold_step}) [{branch}] = {formula} = {result:.v$}"
                    ));
                }
                TraceStep::Concluded {
                    hypothesis_id,
                    aggregate,
                } => {
                    lines.push(format!(
                        "-> Final result {hypothesis_id}: {}",
                        crate::ranking::format_percentage(*aggregate)
                    ));
                }
            }
        }

        if !combination_header {
            lines.push(String::new());
            lines.push("=== 2. CF Combination ===".to_string());
        }
        lines
    }
}
