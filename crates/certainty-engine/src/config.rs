//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How to treat `combine(a, b)` when `a` and `b` are fully certain and of
/// opposite sign, where the combination law divides by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Fail the calculation with `CfError::DegenerateCombination`.
    #[default]
    Reject,
    /// Treat total contradiction as no evidence: the step yields 0.0.
    Neutral,
}

impl std::fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Decimal places used when rendering the calculation trace.
///
/// Rendering precision never feeds back into stored values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracePrecision {
    /// Places for expert CFs.
    pub coefficient_decimals: usize,
    /// Places for contributions and combined values.
    pub value_decimals: usize,
}

impl Default for TracePrecision {
    fn default() -> Self {
        Self {
            coefficient_decimals: 2,
            value_decimals: 3,
        }
    }
}

/// Configuration for the certainty factor engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub degenerate_policy: DegeneratePolicy,
    pub trace: TracePrecision,
    /// Minimum user confidence for a trait to count as strong support when
    /// listing the traits behind a diagnosis.
    pub strong_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::Reject,
            trace: TracePrecision::default(),
            strong_confidence: 0.6,
        }
    }
}
