use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snapshots")]
#[command(
    author,
    version,
    about = "Maintains the changelog page of Git for Windows snapshot builds"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a section for a new (or, with --backfill-release, a published) build
    AddEntry(AddEntryArgs),

    /// Turn bare file name links into release download URLs
    AdjustHrefs(AdjustHrefsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AddEntryArgs {
    /// Download URLs of the build's artifacts (https:// only)
    pub urls: Vec<String>,

    /// Build date, shown verbatim in the section header
    #[clap(long)]
    pub date: Option<String>,

    /// Commit the build was made from
    #[clap(long)]
    pub commit: Option<String>,

    /// Reconstruct the section of a published release (tag or release page URL)
    #[clap(long, value_name = "TAG")]
    pub backfill_release: Option<String>,

    #[clap(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AdjustHrefsArgs {
    #[clap(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Changelog document to update (defaults to index.html)
    #[clap(short, long)]
    pub file: Option<PathBuf>,

    /// TOML configuration file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
