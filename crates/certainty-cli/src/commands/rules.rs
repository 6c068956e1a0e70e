//! Rule listing command

use certainty_engine::{KnowledgeBase, Rule};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::error::CliResult;
use crate::output::{self, print_heading, OutputFormat};

/// Table row for rule display
#[derive(Debug, Serialize, Tabled)]
struct RuleRow {
    #[tabled(rename = "Trait")]
    trait_id: String,
    #[tabled(rename = "Hypothesis")]
    hypothesis_id: String,
    #[tabled(rename = "MB")]
    mb: String,
    #[tabled(rename = "MD")]
    md: String,
    #[tabled(rename = "Expert CF")]
    expert_cf: String,
}

impl RuleRow {
    fn new(rule: &Rule) -> Self {
        // Legacy rules carry only a fixed expert CF.
        let coefficient = |v: f64| {
            if rule.expert_cf.is_some() {
                "-".to_string()
            } else {
                format!("{:.2}", v)
            }
        };
        Self {
            trait_id: rule.trait_id.to_string(),
            hypothesis_id: rule.hypothesis_id.to_string(),
            mb: coefficient(rule.measure_of_belief),
            md: coefficient(rule.measure_of_disbelief),
            expert_cf: format!("{:.2}", rule.expert_cf()),
        }
    }
}

/// Execute the rules command
pub fn execute(ctx: &Context) -> CliResult<()> {
    let kb = ctx.knowledge_base()?;
    match ctx.format {
        OutputFormat::Table => {
            print_heading("Rules");
            output::print_output(rule_rows(&kb), OutputFormat::Table)
        }
        // Structured output keeps the numeric values.
        OutputFormat::Json | OutputFormat::Yaml => output::print_single(&kb.rules(), ctx.format),
    }
}

fn rule_rows(kb: &KnowledgeBase) -> Vec<RuleRow> {
    kb.rules().iter().map(RuleRow::new).collect()
}
