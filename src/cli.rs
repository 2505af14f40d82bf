use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sarif-qa",
    version,
    about = "Static analysis report to SARIF conversion CLI"
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
    /// Fix the paths of a SARIF JSON file in place
    FixPaths(FixPathsCommand),
    /// Convert a sonarQubeGenericIssueData JSON file into a SARIF JSON file
    Convert(ConvertCommand),
}

#[derive(Args)]
pub struct FixPathsCommand {
    /// SARIF JSON file to rewrite
    pub file: PathBuf,
    /// Base path for the source code locations
    #[arg(long, value_name = "dir")]
    pub base: String,
}

#[derive(Args)]
pub struct ConvertCommand {
    /// Input file (sonarQubeGenericIssueData JSON)
    #[arg(short, long, value_name = "f")]
    pub in_file: PathBuf,
    /// Output file (SARIF JSON)
    #[arg(short, long, value_name = "f")]
    pub out_file: PathBuf,
    /// Allow overwriting files
    #[arg(short, long)]
    pub force: bool,
    /// Base path for the source code locations
    #[arg(long, value_name = "dir")]
    pub base: Option<String>,
    /// Git repository to add extra revision info to the SARIF output
    #[arg(long, value_name = "repo")]
    pub git: Option<String>,
}
