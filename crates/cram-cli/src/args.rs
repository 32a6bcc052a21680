//! Command-line argument definitions using clap
//!
//! Argument structs carry clap derives and convert into core parameter types
//! through `From`, so `cram-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session / Controller
//! ```

use std::{fmt, num::NonZeroUsize, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use cram_core::{ComfortLevel, TaskPosition};

/// Generate AI-built study plans and track them as checklists
///
/// Cram asks a generative model for a week-by-week study schedule leading up
/// to a test date, saves it as a JSON file you own, and lets you tick off
/// tasks as you work through them.
#[derive(Parser)]
#[command(version, about, name = "cram")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cram CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new study plan and save it to a file
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show a saved plan with its progress
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Toggle the completion flag of one task in a saved plan
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Print the JSON schema the model is asked to follow
    Schema,
}

/// Generate a study plan
///
/// Input is validated before any network activity. Press Ctrl-C while the
/// model is working to cancel; nothing is written in that case.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Test date in YYYY-MM-DD form; must be after today
    #[arg(long)]
    pub test_date: String,

    /// Topics the test covers
    #[arg(long, conflicts_with = "topics_file")]
    pub topics: Option<String>,

    /// Read the topics from a plain-text file instead
    #[arg(long)]
    pub topics_file: Option<PathBuf>,

    /// How comfortable you already are with the material
    #[arg(long, value_enum, default_value_t = ComfortArg::Intermediate)]
    pub comfort: ComfortArg,

    /// Where to write the plan; defaults to a file named after its title
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Model name; defaults to $CRAM_MODEL or gemini-2.5-flash
    #[arg(long)]
    pub model: Option<String>,

    /// API key; defaults to $GEMINI_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Show a saved plan
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Plan file previously written by `cram generate`
    pub file: PathBuf,
}

/// Toggle one task
///
/// Positions are one-based, matching the `W.D.T` labels printed next to each
/// task by `cram show`.
#[derive(ClapArgs)]
pub struct ToggleArgs {
    /// Plan file to update in place
    pub file: PathBuf,
    #[command(flatten)]
    pub position: PositionArgs,
}

/// One-based task position
#[derive(ClapArgs, Clone, Copy)]
pub struct PositionArgs {
    /// Week number in the plan
    pub week: NonZeroUsize,
    /// Day within the week
    pub day: NonZeroUsize,
    /// Task within the day
    pub task: NonZeroUsize,
}

impl From<PositionArgs> for TaskPosition {
    fn from(val: PositionArgs) -> Self {
        TaskPosition::new(val.week.get() - 1, val.day.get() - 1, val.task.get() - 1)
    }
}

impl fmt::Display for PositionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.week, self.day, self.task)
    }
}

/// Comfort level options for the --comfort flag
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ComfortArg {
    /// New to the material
    Beginner,
    /// Some familiarity
    Intermediate,
    /// Mostly reviewing
    Advanced,
}

impl From<ComfortArg> for ComfortLevel {
    fn from(val: ComfortArg) -> Self {
        match val {
            ComfortArg::Beginner => ComfortLevel::Beginner,
            ComfortArg::Intermediate => ComfortLevel::Intermediate,
            ComfortArg::Advanced => ComfortLevel::Advanced,
        }
    }
}
