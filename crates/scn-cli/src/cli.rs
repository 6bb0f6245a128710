use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scn_diff::ChangeKind;

#[derive(Parser)]
#[command(
    name = "scn",
    about = "Scene-aware diff for screenplay revisions",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with comparison and display settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the scenes of a screenplay
    Scenes(ScenesArgs),
    /// Compare two revisions scene by scene
    Compare(CompareArgs),
    /// Show the line and word diff of one scene
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ScenesArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CompareArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Only scenes of this kind (unchanged, added, removed, modified, moved)
    #[arg(long = "type")]
    pub kind: Option<ChangeKind>,
    #[arg(long)]
    pub hide_unchanged: bool,
    /// Case-insensitive text to look for in headers and bodies
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(long)]
    pub no_header_search: bool,
    #[arg(long)]
    pub no_content_search: bool,
    /// Only these scene numbers (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub scenes: Vec<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Scene number in the old revision (or the new one for added scenes)
    pub scene: String,
}
