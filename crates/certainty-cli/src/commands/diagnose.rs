//! Diagnosis command

use std::path::{Path, PathBuf};

use certainty_engine::{filter_observed, ConfidenceLevel, Observation, RankedHypothesis, Trait};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output::{self, print_heading, print_warning, OutputFormat};

/// Diagnose arguments
#[derive(Args)]
pub struct DiagnoseArgs {
    /// Observed traits as TRAIT=CONFIDENCE, where the confidence is a number
    /// in [0, 1] or a level label such as "very sure"
    #[arg(value_name = "TRAIT=CONF")]
    pub observations: Vec<String>,

    /// JSON file holding an array of {"trait_id", "confidence"} objects
    #[arg(short, long, conflicts_with = "observations")]
    pub input: Option<PathBuf>,

    /// Print the calculation trace
    #[arg(short, long)]
    pub trace: bool,
}

/// One entry of an `--input` file.
#[derive(Debug, Deserialize)]
struct InputObservation {
    #[serde(alias = "trait")]
    trait_id: String,
    confidence: InputConfidence,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputConfidence {
    Value(f64),
    Label(String),
}

/// Table row for ranked results
#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Hypothesis")]
    name: String,
    #[tabled(rename = "CF")]
    cf: String,
    #[tabled(rename = "Certainty")]
    percentage: String,
}

impl ResultRow {
    fn new(rank: usize, result: &RankedHypothesis) -> Self {
        Self {
            rank,
            id: result.hypothesis.id.to_string(),
            name: result.hypothesis.name.clone(),
            cf: format!("{:.3}", result.aggregate_cf),
            percentage: result.percentage.clone(),
        }
    }
}

/// Structured output for JSON and YAML.
#[derive(Debug, Serialize)]
struct DiagnosisReport<'a> {
    results: &'a [RankedHypothesis],
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<&'a str>,
    supporting_traits: Vec<&'a Trait>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log: Option<&'a [String]>,
}

/// Execute the diagnose command
pub fn execute(args: DiagnoseArgs, ctx: &Context) -> CliResult<()> {
    let engine = ctx.engine()?;

    let observations = match &args.input {
        Some(path) => read_input(path)?,
        None => args
            .observations
            .iter()
            .map(|arg| parse_assignment(arg))
            .collect::<CliResult<Vec<_>>>()?,
    };
    // Validate the raw list so error indexes match the caller's arguments.
    engine.validate(&observations)?;
    let total = observations.len();
    let observations = filter_observed(observations);
    if observations.is_empty() {
        return Err(CliError::InvalidArgument(
            "no observed traits; rate at least one trait above zero".into(),
        ));
    }
    if observations.len() < total {
        tracing::debug!(
            dropped = total - observations.len(),
            "Ignoring zero-confidence observations"
        );
    }

    let diagnosis = engine.calculate(&observations)?;
    let supporting = engine.supporting_traits(&diagnosis, &observations);
    let top = diagnosis.top();

    match ctx.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let report = DiagnosisReport {
                results: &diagnosis.results,
                recommendation: top
                    .map(|t| t.hypothesis.recommendation.as_str())
                    .filter(|r| !r.is_empty()),
                supporting_traits: supporting,
                log: args.trace.then_some(diagnosis.log.as_slice()),
            };
            output::print_single(&report, ctx.format)?;
        }
        OutputFormat::Table => {
            print_heading("Diagnosis");
            let rows: Vec<ResultRow> = diagnosis
                .results
                .iter()
                .enumerate()
                .map(|(i, r)| ResultRow::new(i + 1, r))
                .collect();
            output::print_output(rows, OutputFormat::Table)?;

            if let Some(top) = top {
                println!();
                println!(
                    "{} {} ({})",
                    "Most likely:".bold(),
                    top.hypothesis.name.bold().green(),
                    top.percentage
                );
                if top.aggregate_cf <= 0.0 {
                    print_warning("No hypothesis is supported by the observed traits");
                }
                if !top.hypothesis.recommendation.is_empty() {
                    println!("  {}", top.hypothesis.recommendation);
                }
            }

            if !supporting.is_empty() {
                println!();
                println!("{}", "Supporting traits:".bold());
                for t in &supporting {
                    println!("  - {} {}", format!("[{}]", t.id).yellow(), t.display_text());
                }
            }

            if args.trace {
                println!();
                print_heading("Calculation Trace");
                for line in &diagnosis.log {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

/// Parse `TRAIT=CONF` into an observation.
fn parse_assignment(arg: &str) -> CliResult<Observation> {
    let (trait_id, confidence) = arg.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("expected TRAIT=CONFIDENCE, got '{}'", arg))
    })?;
    let trait_id = trait_id.trim();
    if trait_id.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "missing trait id in '{}'",
            arg
        )));
    }
    Ok(Observation::new(trait_id, parse_confidence(confidence)?))
}

/// A confidence given as a number or as a level label.
fn parse_confidence(value: &str) -> CliResult<f64> {
    if let Ok(number) = value.trim().parse::<f64>() {
        return Ok(number);
    }
    value
        .parse::<ConfidenceLevel>()
        .map(ConfidenceLevel::value)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))
}

fn read_input(path: &Path) -> CliResult<Vec<Observation>> {
    let contents = std::fs::read_to_string(path)?;
    let entries: Vec<InputObservation> = serde_json::from_str(&contents)?;
    entries
        .into_iter()
        .map(|entry| {
            let confidence = match entry.confidence {
                InputConfidence::Value(v) => v,
                InputConfidence::Label(label) => parse_confidence(&label)?,
            };
            Ok(Observation::new(entry.trait_id, confidence))
        })
        .collect()
}
