//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use trigen_domain::Strategy;

/// Trigen - generate boundary-value and worst-case test tables for a
/// width/height input domain.
#[derive(Debug, Parser)]
#[command(name = "trigen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// The execute-log text, exactly as exported (default)
    Plain,
    /// Pretty table of the generated cases
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a test-case log in one shot
    Generate(GenerateArgs),

    /// Enter the interactive form session
    Form,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Tester name for the report header (empty renders as "Unknown")
    #[arg(short, long, default_value = "")]
    pub tester: String,

    /// Width range lower bound
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub width_min: i64,

    /// Width range upper bound
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub width_max: i64,

    /// Height range lower bound
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub height_min: i64,

    /// Height range upper bound
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub height_max: i64,

    /// Generation strategy
    #[arg(short, long, value_enum, default_value = "bva")]
    pub strategy: StrategyArg,

    /// Write the log to this file as well as displaying it
    #[arg(short, long)]
    pub out: Option<std::path::PathBuf>,

    /// Write the log to the configured default file (ExecuteLog.txt)
    #[arg(long)]
    pub save: bool,
}

/// Strategy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Boundary Value Analysis (5-point set, single-fault pairing)
    Bva,
    /// BVA extended one step beyond each bound
    Robustness,
    /// Full cross product of both dimensions' point sets
    WorstCase,
    /// Cross product over the extended point sets
    WorstCaseRobustness,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => crate::config::OutputFormat::Plain,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Bva => Strategy::BoundaryValueAnalysis,
            StrategyArg::Robustness => Strategy::Robustness,
            StrategyArg::WorstCase => Strategy::WorstCase,
            StrategyArg::WorstCaseRobustness => Strategy::WorstCaseRobustness,
        }
    }
}
