use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "locsync",
    version,
    about = "Keeps per-language translation trees consistent with the baseline language"
)]
pub struct CmdArgs {
    /// Workspace root holding the locales directory and the master CSV.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to <root>/.locrc.json).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log progress details, not just warnings.
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill gaps in every language tree from the baseline tree.
    Sync,

    /// Verify that every language contains all baseline key paths.
    /// Exits non-zero when any language is incomplete or missing.
    Check,

    /// Migrate plain-string leaves to annotated records, tagging
    /// human-verified texts from the master CSV. Backs up each file first.
    Upgrade {
        /// Keep timestamped snapshots instead of overwriting one backup.
        #[arg(long)]
        versioned_backups: bool,

        /// Write backups into this directory instead of next to each file.
        #[arg(long)]
        backup_dir: Option<PathBuf>,
    },

    /// Merge a single-language CSV export into the master CSV as a new
    /// column.
    Import {
        /// The exported CSV to merge.
        csv: PathBuf,

        /// Language code for the new column.
        language: String,

        /// Human-readable name for the display-name row.
        display_name: String,

        /// Column index to splice at (default: after the last column).
        #[arg(long)]
        at: Option<usize>,
    },
}
