//! Error types for the notedesk application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during note management operations. Nothing here is fatal to
//! the process; every failure is recoverable at the point of the user's next
//! action.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the notedesk application.
#[derive(Error, Debug)]
pub enum NoteError {
    /// Errors at the filesystem boundary.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization operations (JSON output).
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Note was not found when performing an operation.
    #[error("Note not found: {title}")]
    NoteNotFound { title: String },

    /// Empty or whitespace-only title, rejected before any I/O.
    #[error("Note title must not be empty")]
    EmptyTitle,

    /// Title cannot be used as a filename.
    #[error("Note title is not a valid filename: {title}")]
    InvalidTitle { title: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Index-addressed collection operation outside the valid range.
    #[error("Index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}
