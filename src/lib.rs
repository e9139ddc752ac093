//! Desktop note-taking core library
//!
//! This library provides the note model, the directory-backed note store,
//! the in-memory note collection driving the visible list, and substring
//! search over notes. The graphical presentation layer lives elsewhere and
//! calls into these components.

mod cli;
mod collection;
mod config;
mod errors;
mod export;
mod helper;
mod note;
mod search;
mod store;
mod types;

// Re-export key components
pub use cli::*;
pub use collection::*;
pub use config::*;
pub use errors::*;
pub use export::*;
pub use helper::*;
pub use note::*;
pub use search::*;
pub use store::*;
pub use types::*;
