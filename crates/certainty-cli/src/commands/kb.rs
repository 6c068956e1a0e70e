//! Knowledge base commands

use std::path::PathBuf;

use certainty_engine::{load_knowledge_base, DocumentFormat, KnowledgeBase, KnowledgeBaseDocument};
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::error::CliResult;
use crate::output::{self, print_heading, print_success, OutputFormat};

/// Knowledge base subcommands
#[derive(Subcommand)]
pub enum KbCommands {
    /// Check that a knowledge base file parses and is consistent
    Validate {
        /// Path to the knowledge base (TOML, JSON or YAML)
        path: PathBuf,
    },

    /// Show the traits and hypotheses of the selected knowledge base
    Show,
}

#[derive(Debug, Serialize, Tabled)]
struct TraitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Question")]
    question: String,
}

#[derive(Debug, Serialize, Tabled)]
struct HypothesisRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rules")]
    rules: usize,
}

/// Execute a knowledge base command
pub fn execute(command: KbCommands, ctx: &Context) -> CliResult<()> {
    match command {
        KbCommands::Validate { path } => {
            let kb = load_knowledge_base(&path)?;
            print_success(&format!(
                "{} is valid: {} traits, {} hypotheses, {} rules",
                path.display(),
                kb.traits().len(),
                kb.hypotheses().len(),
                kb.rules().len()
            ));
            Ok(())
        }

        KbCommands::Show => {
            let kb = ctx.knowledge_base()?;
            match ctx.format {
                OutputFormat::Table => show_tables(&kb),
                OutputFormat::Json => {
                    println!("{}", KnowledgeBaseDocument::from(&kb).render(DocumentFormat::Json)?);
                    Ok(())
                }
                OutputFormat::Yaml => {
                    print!("{}", KnowledgeBaseDocument::from(&kb).render(DocumentFormat::Yaml)?);
                    Ok(())
                }
            }
        }
    }
}

fn show_tables(kb: &KnowledgeBase) -> CliResult<()> {
    print_heading("Traits");
    let traits: Vec<TraitRow> = kb
        .traits()
        .iter()
        .map(|t| TraitRow {
            id: t.id.to_string(),
            name: t.name.clone(),
            question: t.question.clone(),
        })
        .collect();
    output::print_output(traits, OutputFormat::Table)?;

    println!();
    print_heading("Hypotheses");
    let hypotheses: Vec<HypothesisRow> = kb
        .hypotheses()
        .iter()
        .map(|h| HypothesisRow {
            id: h.id.to_string(),
            name: h.name.clone(),
            rules: kb.rules().iter().filter(|r| r.hypothesis_id == h.id).count(),
        })
        .collect();
    output::print_output(hypotheses, OutputFormat::Table)
}
