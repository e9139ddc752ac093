use std::{fs, path::Path, time::SystemTime};

use chrono::{DateTime, Utc};
use log::{debug, error, trace};

use crate::{Note, NoteError, Result};

/// Extension used for note files in the store directory
pub const NOTE_EXTENSION: &str = "txt";

/// Helper to load a single note from a text file.
///
/// The title comes from the file stem, the content is the whole file, and
/// both timestamps are taken from the file's modification time since no
/// creation time is recoverable from storage.
pub fn load_note_from_file(path: &Path) -> Result<Note> {
    debug!("Loading note from file: {}", path.display());

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.trim().is_empty())
        .ok_or_else(|| NoteError::InvalidTitle {
            title: path.display().to_string(),
        })?;

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read note file {}: {}", path.display(), e);
        NoteError::Io(e)
    })?;

    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(datetime_from_system_time)
        .unwrap_or_else(|_| Utc::now());

    trace!("Successfully loaded note: {}", title);
    Ok(Note::with_timestamps(title, content, modified, modified))
}

/// Converts filesystem metadata time to a UTC timestamp
pub fn datetime_from_system_time(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_title_from_stem_and_content_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Todo.txt");
        fs::write(&path, "Buy milk").unwrap();

        let note = load_note_from_file(&path).unwrap();
        assert_eq!(note.title, "Todo");
        assert_eq!(note.content, "Buy milk");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_note_from_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, NoteError::Io(_)));
    }
}
