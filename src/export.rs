//! Export and import of individual notes.
//!
//! Export writes a human-readable snapshot of one note; it is not a
//! structured format and is not parsed back on import. Import always takes
//! a file's entire contents as the new note's content.

use std::{fs, io::Write, path::Path};

use log::info;

use crate::{Note, Result};

/// Writes a human-readable snapshot of the note to `path`.
///
/// The snapshot carries the title, the displayed date range, and the raw
/// content, in that order.
pub fn export_note(note: &Note, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)?;

    writeln!(file, "Title: {}", note.title)?;
    writeln!(file, "Date: {}", note.date_line())?;
    writeln!(file)?;
    writeln!(file, "Content:")?;
    write!(file, "{}", note.content)?;

    info!("Exported note '{}' to {}", note.title, path.display());
    Ok(())
}

/// Reads a text file wholesale for use as note content.
///
/// Exported snapshots are not parsed back into fields; their `Title:` and
/// `Date:` lines become content like any other text.
pub fn import_content(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    info!("Imported {} bytes from {}", content.len(), path.display());
    Ok(content)
}
