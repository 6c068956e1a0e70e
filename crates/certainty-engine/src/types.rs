//! Core type definitions for the certainty factor engine.
//!
//! These types describe the reference data an expert authors (traits,
//! hypotheses, weighted rules) and the observations a user supplies for a
//! single diagnosis.

use serde::{Deserialize, Serialize};

// ── Identifier Types ────────────────────────────────────────────────────

/// Identifier of an observable trait (e.g. `K01`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitId(pub String);

impl TraitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TraitId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TraitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a candidate hypothesis (e.g. `P01`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisId(pub String);

impl HypothesisId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HypothesisId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Reference Data ──────────────────────────────────────────────────────

/// An observable trait the user rates with a confidence value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub id: TraitId,
    /// Short display name.
    pub name: String,
    /// Question put to the user when collecting a rating.
    #[serde(default)]
    pub question: String,
    /// Phrase describing the trait once it has been observed.
    #[serde(default)]
    pub description: String,
    /// Optional illustration reference for presentation layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Trait {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TraitId::new(id),
            name: name.into(),
            question: String::new(),
            description: String::new(),
            image: None,
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Text used when describing this trait to a reader: the descriptive
    /// phrase when present, otherwise the name.
    pub fn display_text(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// One of the mutually exclusive output categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

impl Hypothesis {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: HypothesisId::new(id),
            name: name.into(),
            description: String::new(),
            recommendation: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }
}

/// An expert-authored link from a trait to a hypothesis.
///
/// The rule's expert CF is `measure_of_belief - measure_of_disbelief` unless
/// an explicit `expert_cf` override is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub trait_id: TraitId,
    pub hypothesis_id: HypothesisId,
    /// Measure of belief (MB), in [0, 1].
    #[serde(rename = "mb", alias = "measure_of_belief", default)]
    pub measure_of_belief: f64,
    /// Measure of disbelief (MD), in [0, 1].
    #[serde(rename = "md", alias = "measure_of_disbelief", default)]
    pub measure_of_disbelief: f64,
    /// Legacy fixed expert CF, in [-1, 1]. Takes precedence over MB − MD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expert_cf: Option<f64>,
}

impl Rule {
    pub fn new(
        trait_id: impl Into<String>,
        hypothesis_id: impl Into<String>,
        measure_of_belief: f64,
        measure_of_disbelief: f64,
    ) -> Self {
        Self {
            trait_id: TraitId::new(trait_id),
            hypothesis_id: HypothesisId::new(hypothesis_id),
            measure_of_belief,
            measure_of_disbelief,
            expert_cf: None,
        }
    }

    /// A rule carrying a fixed expert CF instead of MB/MD coefficients.
    pub fn with_expert_cf(
        trait_id: impl Into<String>,
        hypothesis_id: impl Into<String>,
        expert_cf: f64,
    ) -> Self {
        Self {
            trait_id: TraitId::new(trait_id),
            hypothesis_id: HypothesisId::new(hypothesis_id),
            measure_of_belief: 0.0,
            measure_of_disbelief: 0.0,
            expert_cf: Some(expert_cf),
        }
    }

    /// Net evidentiary weight of the rule, in [-1, 1].
    pub fn expert_cf(&self) -> f64 {
        self.expert_cf
            .unwrap_or(self.measure_of_belief - self.measure_of_disbelief)
    }

    /// Whether the rule lends positive support to its hypothesis.
    pub fn is_supporting(&self) -> bool {
        self.measure_of_belief > 0.0 || self.expert_cf.is_some_and(|cf| cf > 0.0)
    }
}

// ── Session Data ────────────────────────────────────────────────────────

/// A user's confidence that a trait was observed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub trait_id: TraitId,
    /// User confidence in [0, 1]; 0 means "not observed".
    #[serde(alias = "confidence")]
    pub user_confidence: f64,
}

impl Observation {
    pub fn new(trait_id: impl Into<String>, user_confidence: f64) -> Self {
        Self {
            trait_id: TraitId::new(trait_id),
            user_confidence,
        }
    }

    /// Whether the user reported the trait at all. Only an exact zero counts
    /// as "not observed"; negative or NaN ratings are kept so validation
    /// rejects them.
    pub fn is_observed(&self) -> bool {
        self.user_confidence != 0.0
    }
}

/// Drop observations the user rated with exactly zero confidence.
///
/// The engine itself evaluates zero-confidence observations like any other;
/// callers collecting ratings from a form apply this filter first, after
/// `CertaintyEngine::validate` so error indexes refer to the unfiltered list.
pub fn filter_observed(observations: impl IntoIterator<Item = Observation>) -> Vec<Observation> {
    observations
        .into_iter()
        .filter(Observation::is_observed)
        .collect()
}
