//! CLI argument definitions for the transfer planner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "restock",
    version,
    about = "Plan stock transfers between retail stores",
    long_about = "Plan stock transfers between retail stores.\n\n\
                  Reads a per-store sales and stock report, moves units from stores\n\
                  holding surplus to stores running low, and writes the transfer plan as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Allocate transfers for a store report.
    Allocate(AllocateArgs),

    /// Write an example report to fill in.
    Template(TemplateArgs),

    /// Print the effective allocation settings as TOML.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct AllocateArgs {
    /// Store report CSV (store, product, color, size, net sales, stock).
    #[arg(value_name = "REPORT")]
    pub input: PathBuf,

    /// Output CSV path (default: <REPORT stem>_transfers.csv next to the report).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Allocate and print the summary without writing the plan.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the summary tables.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Also write the summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Allocation settings shared by `allocate` and `config`.
#[derive(Args)]
pub struct SettingsArgs {
    /// TOML file with allocation settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store that never ships units.
    #[arg(long = "never-sender", value_name = "STORE")]
    pub never_sender: Option<String>,

    /// Store limited to a fixed number of units per product.
    #[arg(long = "capped-receiver", value_name = "STORE")]
    pub capped_receiver: Option<String>,

    /// Units the capped receiver may take per product code.
    #[arg(long = "capped-receiver-limit", value_name = "UNITS")]
    pub capped_receiver_limit: Option<u32>,

    /// Maximum units on one transfer line.
    #[arg(long = "max-per-line", value_name = "UNITS")]
    pub max_per_line: Option<u32>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        default_value = "transfer_template.csv"
    )]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
