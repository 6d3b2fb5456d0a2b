use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bedside",
    version,
    about = "Physician patient-centered care self-assessment CLI"
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
    Questions(QuestionsCommand),
    Init(InitCommand),
    Score(ScoreCommand),
    Export(ExportCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Overwrite an existing responses file, discarding its answers
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExportCommand {
    pub path: PathBuf,
    /// Directory the snapshot file is written into
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}
