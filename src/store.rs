use std::{
    collections::HashMap,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::{load_note_from_file, Note, NoteError, Result, NOTE_EXTENSION};

/// Directory-backed persistence for notes: one `<title>.txt` file per note.
///
/// The directory listing is the note index; files hold exactly the note
/// content with no embedded metadata. The store remembers which filename
/// each note id was last saved under so that renaming a note removes its
/// old backing file instead of orphaning it.
pub struct NoteStore {
    /// Directory where note files live
    notes_dir: PathBuf,

    /// Maps note id to the filename stem it is currently stored under
    filenames: HashMap<String, String>,
}

impl NoteStore {
    /// Creates a store over the given directory.
    ///
    /// The directory is not created here; `load` tolerates its absence and
    /// `save` creates it on first write.
    pub fn open(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            filenames: HashMap::new(),
        }
    }

    /// The directory this store reads and writes
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Loads all notes from disk, in file-name order.
    ///
    /// A missing directory yields an empty result. Unreadable individual
    /// files are logged and skipped so one bad entry cannot hide the rest.
    pub fn load(&mut self) -> Result<Vec<Note>> {
        if !self.notes_dir.exists() {
            info!(
                "Notes directory {} does not exist, starting empty",
                self.notes_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut notes = Vec::new();

        for entry in WalkDir::new(&self.notes_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() || !path.extension().is_some_and(|ext| ext == NOTE_EXTENSION) {
                continue;
            }

            match load_note_from_file(path) {
                Ok(note) => {
                    self.filenames.insert(note.id.clone(), note.title.clone());
                    notes.push(note);
                }
                Err(e) => {
                    warn!("Failed to load note from {}: {}", path.display(), e);
                }
            }
        }

        info!("Loaded {} notes from {}", notes.len(), self.notes_dir.display());
        Ok(notes)
    }

    /// Saves a note, creating or overwriting `<title>.txt`.
    ///
    /// The title is validated before any I/O. The write goes through a
    /// temporary file in the same directory and is persisted atomically.
    /// If this note id was previously saved under a different title, the
    /// old file is removed after the new one lands.
    pub fn save(&mut self, note: &Note) -> Result<()> {
        validate_title(&note.title)?;

        if !self.notes_dir.exists() {
            debug!("Creating notes directory: {}", self.notes_dir.display());
            fs::create_dir_all(&self.notes_dir).map_err(|_| NoteError::DirectoryError {
                path: self.notes_dir.clone(),
            })?;
        }

        let file_path = self.note_path(&note.title);
        debug!("Writing note to {}", file_path.display());

        let mut temp_file = NamedTempFile::new_in(&self.notes_dir)?;
        temp_file.write_all(note.content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&file_path).map_err(|e| NoteError::Io(e.error))?;

        // Rename cleanup: drop the file the note used to live under.
        if let Some(old_title) = self.filenames.insert(note.id.clone(), note.title.clone()) {
            if old_title != note.title {
                let old_path = self.note_path(&old_title);
                match fs::remove_file(&old_path) {
                    Ok(()) => debug!("Removed renamed note's old file: {}", old_path.display()),
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => {
                        warn!("Failed to remove old file {}: {}", old_path.display(), e)
                    }
                }
            }
        }

        info!("Saved note: {}", note.title);
        Ok(())
    }

    /// Deletes the note's backing file.
    ///
    /// An already-absent file is a no-op, so delete is idempotent.
    pub fn delete(&mut self, note: &Note) -> Result<()> {
        let file_path = self.note_path(&note.title);

        match fs::remove_file(&file_path) {
            Ok(()) => info!("Deleted note file: {}", file_path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Note file already absent: {}", file_path.display());
            }
            Err(e) => return Err(NoteError::Io(e)),
        }

        self.filenames.remove(&note.id);
        Ok(())
    }

    /// Path of the backing file for a note title
    fn note_path(&self, title: &str) -> PathBuf {
        self.notes_dir
            .join(format!("{}.{}", title, NOTE_EXTENSION))
    }
}

/// Rejects titles that cannot name a note file
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NoteError::EmptyTitle);
    }
    if title.contains(['/', '\\']) {
        return Err(NoteError::InvalidTitle {
            title: title.to_string(),
        });
    }
    Ok(())
}
