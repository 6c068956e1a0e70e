//! Ranking: orders hypotheses by aggregate CF and formats percentages.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::Hypothesis;

/// One hypothesis with its aggregate certainty factor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedHypothesis {
    pub hypothesis: Hypothesis,
    /// Aggregate CF in [-1, 1].
    pub aggregate_cf: f64,
    /// `aggregate_cf` as a percentage with two decimals, e.g. `"95.50%"`.
    pub percentage: String,
}

/// Format a certainty factor as a percentage with exactly two decimals.
pub fn format_percentage(cf: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0 so a cancelled CF never prints "-0.00%".
    format!("{:.2}%", cf * 100.0 + 0.0)
}

/// Order hypotheses by descending aggregate CF.
///
/// `aggregates` must be parallel to `hypotheses` (declaration order). The
/// sort is stable, so equal aggregates keep declaration order.
pub fn rank(hypotheses: &[Hypothesis], aggregates: &[f64]) -> Vec<RankedHypothesis> {
    let mut ranked: Vec<RankedHypothesis> = hypotheses
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let aggregate_cf = aggregates.get(i).copied().unwrap_or(0.0);
            RankedHypothesis {
                hypothesis: h.clone(),
                aggregate_cf,
                percentage: format_percentage(aggregate_cf),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.aggregate_cf
            .partial_cmp(&a.aggregate_cf)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
