//! CLI argument definitions for the IMO Bench loader.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use imobench_model::Category;

#[derive(Parser)]
#[command(
    name = "imobench",
    version,
    about = "Inspect and validate the IMO Bench datasets",
    long_about = "Load the IMO Bench CSV datasets (AnswerBench, ProofBench, GradingBench).\n\n\
                  The data directory defaults to $IMOBENCH_DATA_DIR when set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing the dataset CSV files.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load every dataset and report record counts.
    Check(CheckArgs),

    /// List AnswerBench problems.
    Answer(AnswerArgs),

    /// List ProofBench problems.
    Proof(ProofArgs),

    /// List GradingBench entries.
    Grading(GradingArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Skip row validation while loading.
    #[arg(long = "no-validate")]
    pub no_validate: bool,

    /// Fail when a dataset count falls outside its expected range.
    #[arg(long = "counts")]
    pub counts: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Skip row validation while loading.
    #[arg(long = "no-validate")]
    pub no_validate: bool,

    /// Show at most this many records.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Print records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct AnswerArgs {
    #[arg(long = "category", value_enum)]
    pub category: Option<CategoryArg>,

    #[arg(long = "subcategory")]
    pub subcategory: Option<String>,

    #[arg(long = "source")]
    pub source: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args)]
pub struct ProofArgs {
    #[arg(long = "category", value_enum)]
    pub category: Option<CategoryArg>,

    /// Difficulty level, e.g. "IMO-easy".
    #[arg(long = "level")]
    pub level: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args)]
pub struct GradingArgs {
    #[arg(long = "problem-id", value_name = "ID")]
    pub problem_id: Option<String>,

    /// Inclusive lower bound on points.
    #[arg(long = "min-points", value_name = "POINTS")]
    pub min_points: Option<i64>,

    /// Inclusive upper bound on points.
    #[arg(long = "max-points", value_name = "POINTS")]
    pub max_points: Option<i64>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Algebra,
    Combinatorics,
    Geometry,
    #[value(name = "number-theory")]
    NumberTheory,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Algebra => Category::Algebra,
            CategoryArg::Combinatorics => Category::Combinatorics,
            CategoryArg::Geometry => Category::Geometry,
            CategoryArg::NumberTheory => Category::NumberTheory,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
