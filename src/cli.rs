use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "AI learning self-assessment: scoring, route matching, and reports"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a neutral answers template to fill in
    Init(InitCommand),
    /// Report which questions are still unanswered
    Check(CheckCommand),
    /// Score a completed answer set and print the matched route
    Score(ScoreCommand),
    /// Print the question bank for external UIs
    Questions(QuestionsCommand),
    /// Score an answer set and store the submission for aggregation
    Submit(SubmitCommand),
    /// Aggregate stored submissions into summary statistics
    Stats(StatsCommand),
    /// Remove stored submissions past the retention window
    Cleanup(CleanupCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}

#[derive(Clone, ValueEnum)]
pub enum DataFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct InitCommand {
    /// Destination file (.toml)
    pub path: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Answers file (.json or .toml)
    pub answers: PathBuf,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answers file (.json or .toml)
    pub answers: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Also write the result as JSON to this path
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: DataFormat,
}

#[derive(Args)]
pub struct SubmitCommand {
    /// Answers file (.json or .toml)
    pub answers: PathBuf,
    /// Directory holding collected submissions
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct StatsCommand {
    /// Directory holding collected submissions
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Only include submissions from the last N days
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: DataFormat,
}

#[derive(Args)]
pub struct CleanupCommand {
    /// Directory holding collected submissions
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Keep submissions from the last N days
    #[arg(long, default_value_t = 90)]
    pub keep_days: u32,
    /// Preview without deleting
    #[arg(long)]
    pub dry_run: bool,
}
