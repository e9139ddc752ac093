//! Shared types for the notedesk application.
use std::path::PathBuf;

use clap::Subcommand;

use crate::NoteError;

/// A specialized Result type for notedesk operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Available subcommands for the notedesk application
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    New {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Content of the note
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the note's content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// List all notes
    List {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,

        /// Show full content instead of a preview
        #[clap(short, long)]
        detailed: bool,
    },

    /// Show a single note by title
    Show {
        /// Title of the note to show
        title: String,
    },

    /// Edit an existing note
    Edit {
        /// Title of the note to edit
        title: String,

        /// New title for the note
        #[clap(short = 'T', long)]
        rename: Option<String>,

        /// New content for the note
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the new note content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// Delete a note by title
    Delete {
        /// Title of the note to delete
        title: String,
    },

    /// Search notes by title, or by title and content
    Search {
        /// Search query text
        query: String,

        /// Match against note content as well as titles
        #[clap(short, long)]
        content: bool,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Export a note as a human-readable snapshot file
    Export {
        /// Title of the note to export
        title: String,

        /// Path for the exported file
        #[clap(short, long)]
        output: PathBuf,
    },

    /// Import a text file's contents as a new note
    Import {
        /// Path to the file to import
        source: PathBuf,

        /// Title for the imported note (defaults to the file name)
        #[clap(short = 'T', long)]
        title: Option<String>,
    },
}
