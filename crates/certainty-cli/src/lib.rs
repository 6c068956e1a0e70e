//! Certainty CLI - Command-line interface for the certainty factor engine
//!
//! This CLI provides a terminal interface to:
//! - Diagnose a set of observed traits against a knowledge base
//! - List the expert rules and their coefficients
//! - Validate and inspect knowledge base files
//! - Show the labelled confidence scale

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{diagnose, kb, levels, rules, Context};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{print_error, OutputFormat};

/// Certainty CLI application
#[derive(Parser)]
#[command(name = "certainty")]
#[command(about = "Certainty - certainty factor evidence engine CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CERTAINTY_CONFIG")]
    config: Option<String>,

    /// Knowledge base file (TOML, JSON or YAML); the bundled one if omitted
    #[arg(long, global = true, env = "CERTAINTY_KB")]
    kb: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Rank hypotheses for a set of observed traits
    Diagnose(diagnose::DiagnoseArgs),

    /// List the expert rules
    Rules,

    /// Validate or inspect knowledge bases
    Kb {
        #[command(subcommand)]
        command: kb::KbCommands,
    },

    /// Show the confidence scale
    Levels,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing; logs go to stderr so stdout stays parseable.
    let filter = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.output).unwrap_or_default();
    let ctx = Context::new(config, cli.kb, format);

    match cli.command {
        Commands::Diagnose(args) => diagnose::execute(args, &ctx),
        Commands::Rules => rules::execute(&ctx),
        Commands::Kb { command } => kb::execute(command, &ctx),
        Commands::Levels => levels::execute(ctx.format),
    }
}
