use std::path::PathBuf;

use clap::Parser;

use crate::{Commands, Theme};

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(version, about = "Desktop note-taking application core")]
pub struct Cli {
    /// Path to the notes directory
    #[clap(long, value_parser)]
    pub notes_dir: Option<PathBuf>,

    /// Color theme for rendered output
    #[clap(long, value_enum)]
    pub theme: Option<Theme>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the notedesk application
    #[clap(subcommand)]
    pub command: Commands,
}
