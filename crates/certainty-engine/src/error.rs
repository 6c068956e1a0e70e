//! Error types for the certainty factor engine.

use thiserror::Error;

use crate::types::{HypothesisId, TraitId};

/// What was wrong with a caller-supplied observation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputViolation {
    /// The observation names a trait the knowledge base does not define.
    #[error("unknown trait {trait_id}")]
    UnknownTrait { trait_id: TraitId },

    /// The user confidence is NaN or outside [0, 1].
    #[error("confidence {value} for trait {trait_id} is outside [0, 1]")]
    ConfidenceOutOfRange { trait_id: TraitId, value: f64 },
}

/// Problems detected while building or loading a knowledge base.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KnowledgeBaseError {
    /// No hypotheses were declared.
    #[error("knowledge base declares no hypotheses")]
    NoHypotheses,

    /// Two traits share an id.
    #[error("duplicate trait id {0}")]
    DuplicateTrait(TraitId),

    /// Two hypotheses share an id.
    #[error("duplicate hypothesis id {0}")]
    DuplicateHypothesis(HypothesisId),

    /// A rule references a trait that is not declared.
    #[error("rule {index} references unknown trait {trait_id}")]
    UnknownTrait { index: usize, trait_id: TraitId },

    /// A rule references a hypothesis that is not declared.
    #[error("rule {index} references unknown hypothesis {hypothesis_id}")]
    UnknownHypothesis {
        index: usize,
        hypothesis_id: HypothesisId,
    },

    /// A rule coefficient is NaN or outside its allowed range.
    #[error("rule {index} has {field} = {value}, expected a value in [{min}, {max}]")]
    CoefficientOutOfRange {
        index: usize,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors that can occur while evaluating or loading certainty factor data.
#[derive(Debug, Error)]
pub enum CfError {
    /// An observation failed validation; `index` is its position in the input.
    #[error("invalid input at observation {index}: {violation}")]
    InvalidInput {
        index: usize,
        violation: InputViolation,
    },

    /// Two fully certain contributions of opposite sign were combined.
    #[error(
        "degenerate combination for hypothesis {hypothesis_id}: {left} and {right} cancel with a zero denominator"
    )]
    DegenerateCombination {
        hypothesis_id: HypothesisId,
        left: f64,
        right: f64,
    },

    /// The knowledge base is malformed.
    #[error("knowledge base error: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),

    /// Reading a knowledge base file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A knowledge base document could not be parsed.
    #[error("parse error ({format}): {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Unsupported file extension or format name.
    #[error("unsupported knowledge base format: {0}")]
    UnsupportedFormat(String),
}

impl CfError {
    pub(crate) fn invalid_input(index: usize, violation: InputViolation) -> Self {
        Self::InvalidInput { index, violation }
    }
}

/// Result type for certainty factor operations.
pub type CfResult<T> = Result<T, CfError>;
