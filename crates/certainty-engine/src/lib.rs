//! # certainty-engine
//!
//! Certainty Factor (CF) inference over a fixed set of mutually exclusive
//! hypotheses.
//!
//! A user rates how confident they are that each trait was observed. Expert
//! rules link traits to hypotheses with a measure of belief (MB) and a measure
//! of disbelief (MD). Every matching rule contributes
//! `confidence * (MB - MD)` to its hypothesis, contributions are combined
//! sequentially with the CF combination law, and the hypotheses are ranked.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────┐     ┌──────────────────────┐
//!   │ Observations        │     │ KnowledgeBase        │
//!   │ (trait, confidence) │     │ traits/hyps/rules    │
//!   └──────────┬──────────┘     └──────────┬───────────┘
//!              │                            │
//!              └─────────┬─────────────────┘
//!                        ▼
//!              ┌─────────────────────┐
//!              │  RuleEvaluator      │  ← confidence × expert CF per rule
//!              └─────────┬───────────┘
//!                        ▼
//!              ┌─────────────────────┐
//!              │  CombinationEngine  │  ← left-to-right CF combination
//!              └─────────┬───────────┘
//!                        ▼
//!              ┌─────────────────────┐
//!              │  Ranking            │  ← stable descending sort, percentages
//!              └─────────┬───────────┘
//!                        ▼
//!              ┌─────────────────────┐
//!              │  Diagnosis          │  → results + rendered trace
//!              └─────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Order matters**: the combination law is not associative under floating
//!   point; contributions are folded in observation order, then rule order.
//! - **Validate at the edges**: knowledge bases are validated when built,
//!   observations before any evaluation. Bad input fails fast.
//! - **Stateless calls**: `calculate` allocates its working state per call, so
//!   one engine can serve many threads.
//! - **Trace as data**: every arithmetic step is recorded as a `TraceStep` and
//!   rendered to text only for display.

#![deny(unsafe_code)]

pub mod builtin;
pub mod combination;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod knowledge;
pub mod loader;
pub mod ranking;
pub mod scale;
pub mod trace;
pub mod types;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use combination::{branch_for, combine, CombinationEngine, Fold};
pub use config::{DegeneratePolicy, EngineConfig, TracePrecision};
pub use engine::{CertaintyEngine, Diagnosis};
pub use error::{CfError, CfResult, InputViolation, KnowledgeBaseError};
pub use evaluator::{Contribution, Evaluation, RuleEvaluator};
pub use knowledge::{KnowledgeBase, KnowledgeBaseBuilder};
pub use loader::{load_knowledge_base, parse_knowledge_base, DocumentFormat, KnowledgeBaseDocument};
pub use ranking::{format_percentage, rank, RankedHypothesis};
pub use scale::{ConfidenceLevel, UnknownLevel};
pub use trace::{CombinationBranch, Trace, TraceStep};
pub use types::{filter_observed, Hypothesis, HypothesisId, Observation, Rule, Trait, TraitId};
