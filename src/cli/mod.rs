//! Command-line front end for the notedesk application.
//!
//! Stands in for the graphical presentation layer: parses one command,
//! dispatches it against the store and collection, and renders the result.

mod app;
mod args;

pub use app::*;
pub use args::*;
