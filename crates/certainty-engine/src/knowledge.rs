//! The immutable knowledge base: traits, hypotheses and weighted rules.
//!
//! A `KnowledgeBase` can only be obtained through validation, so the engine
//! may rely on unique ids, resolvable rule references and in-range
//! coefficients without re-checking them per calculation.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::KnowledgeBaseError;
use crate::types::{Hypothesis, HypothesisId, Rule, Trait, TraitId};

/// Validated, read-only reference data for the engine.
#[derive(Clone, Debug, Serialize)]
pub struct KnowledgeBase {
    traits: Vec<Trait>,
    hypotheses: Vec<Hypothesis>,
    rules: Vec<Rule>,
    #[serde(skip)]
    trait_index: HashMap<TraitId, usize>,
    #[serde(skip)]
    hypothesis_index: HashMap<HypothesisId, usize>,
    /// Rule positions per trait, in rule definition order.
    #[serde(skip)]
    rules_by_trait: HashMap<TraitId, Vec<usize>>,
}

impl KnowledgeBase {
    /// Validate and index the given reference data.
    pub fn new(
        traits: Vec<Trait>,
        hypotheses: Vec<Hypothesis>,
        rules: Vec<Rule>,
    ) -> Result<Self, KnowledgeBaseError> {
        if hypotheses.is_empty() {
            return Err(KnowledgeBaseError::NoHypotheses);
        }

        let mut trait_index = HashMap::with_capacity(traits.len());
        for (i, t) in traits.iter().enumerate() {
            if trait_index.insert(t.id.clone(), i).is_some() {
                return Err(KnowledgeBaseError::DuplicateTrait(t.id.clone()));
            }
        }

        let mut hypothesis_index = HashMap::with_capacity(hypotheses.len());
        for (i, h) in hypotheses.iter().enumerate() {
            if hypothesis_index.insert(h.id.clone(), i).is_some() {
                return Err(KnowledgeBaseError::DuplicateHypothesis(h.id.clone()));
            }
        }

        let mut rules_by_trait: HashMap<TraitId, Vec<usize>> = HashMap::new();
        for (index, rule) in rules.iter().enumerate() {
            if !trait_index.contains_key(&rule.trait_id) {
                return Err(KnowledgeBaseError::UnknownTrait {
                    index,
                    trait_id: rule.trait_id.clone(),
                });
            }
            if !hypothesis_index.contains_key(&rule.hypothesis_id) {
                return Err(KnowledgeBaseError::UnknownHypothesis {
                    index,
                    hypothesis_id: rule.hypothesis_id.clone(),
                });
            }
            check_range(index, "mb", rule.measure_of_belief, 0.0, 1.0)?;
            check_range(index, "md", rule.measure_of_disbelief, 0.0, 1.0)?;
            if let Some(cf) = rule.expert_cf {
                check_range(index, "expert_cf", cf, -1.0, 1.0)?;
            }
            rules_by_trait
                .entry(rule.trait_id.clone())
                .or_default()
                .push(index);
        }

        Ok(Self {
            traits,
            hypotheses,
            rules,
            trait_index,
            hypothesis_index,
            rules_by_trait,
        })
    }

    /// Start building a knowledge base programmatically.
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    /// Traits in declaration order.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// Hypotheses in declaration order.
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Rules in definition order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get_trait(&self, id: &TraitId) -> Option<&Trait> {
        self.trait_index.get(id).map(|&i| &self.traits[i])
    }

    pub fn get_hypothesis(&self, id: &HypothesisId) -> Option<&Hypothesis> {
        self.hypothesis_index.get(id).map(|&i| &self.hypotheses[i])
    }

    pub fn contains_trait(&self, id: &TraitId) -> bool {
        self.trait_index.contains_key(id)
    }

    /// Declaration position of a hypothesis.
    pub fn hypothesis_position(&self, id: &HypothesisId) -> Option<usize> {
        self.hypothesis_index.get(id).copied()
    }

    /// Rules triggered by a trait, in rule definition order.
    pub fn rules_for_trait<'a>(&'a self, id: &TraitId) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules_by_trait
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&i| &self.rules[i])
    }
}

fn check_range(
    index: usize,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), KnowledgeBaseError> {
    // NaN fails both comparisons, so test containment rather than exclusion.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(KnowledgeBaseError::CoefficientOutOfRange {
            index,
            field,
            value,
            min,
            max,
        })
    }
}

/// Incremental construction of a `KnowledgeBase`; validation runs in `build`.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBaseBuilder {
    traits: Vec<Trait>,
    hypotheses: Vec<Hypothesis>,
    rules: Vec<Rule>,
}

impl KnowledgeBaseBuilder {
    pub fn add_trait(mut self, t: Trait) -> Self {
        self.traits.push(t);
        self
    }

    pub fn add_hypothesis(mut self, h: Hypothesis) -> Self {
        self.hypotheses.push(h);
        self
    }

    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Declare a trait by id alone, using the id as its name.
    pub fn with_trait(self, id: &str) -> Self {
        self.add_trait(Trait::new(id, id))
    }

    /// Declare a hypothesis by id alone, using the id as its name.
    pub fn with_hypothesis(self, id: &str) -> Self {
        self.add_hypothesis(Hypothesis::new(id, id))
    }

    /// Add an MB/MD rule.
    pub fn with_rule(self, trait_id: &str, hypothesis_id: &str, mb: f64, md: f64) -> Self {
        self.add_rule(Rule::new(trait_id, hypothesis_id, mb, md))
    }

    pub fn build(self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        KnowledgeBase::new(self.traits, self.hypotheses, self.rules)
    }
}
