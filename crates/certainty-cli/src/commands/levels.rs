//! Confidence scale command

use certainty_engine::ConfidenceLevel;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct LevelRow {
    #[tabled(rename = "Level")]
    label: &'static str,
    #[tabled(rename = "Confidence")]
    value: f64,
}

/// Execute the levels command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<LevelRow> = ConfidenceLevel::ALL
        .into_iter()
        .map(|level| LevelRow {
            label: level.label(),
            value: level.value(),
        })
        .collect();
    output::print_output(rows, format)
}
