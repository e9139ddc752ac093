use log::debug;

use crate::{Note, NoteError, Result};

/// The in-memory ordered list of notes backing the visible note list.
///
/// Mutation is index-addressed to mirror a single-selection list widget,
/// but the active note itself is tracked by its stable id rather than by
/// position, so reordering or removal elsewhere in the list cannot leave
/// the selection pointing at the wrong entry.
#[derive(Debug, Default)]
pub struct NoteCollection {
    notes: Vec<Note>,
    /// Id of the currently active note, if any
    active: Option<String>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from already-loaded notes, preserving load order
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            active: None,
        }
    }

    /// Appends a note to the end of the list
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Replaces the note at `index` in place, preserving its position
    pub fn replace_at(&mut self, index: usize, note: Note) -> Result<()> {
        let len = self.notes.len();
        let slot = self
            .notes
            .get_mut(index)
            .ok_or(NoteError::IndexOutOfBounds { index, len })?;
        *slot = note;
        Ok(())
    }

    /// Removes and returns the note at `index`, shifting later entries left.
    ///
    /// Clears the active selection if it pointed at the removed note.
    pub fn remove_at(&mut self, index: usize) -> Result<Note> {
        if index >= self.notes.len() {
            return Err(NoteError::IndexOutOfBounds {
                index,
                len: self.notes.len(),
            });
        }
        let removed = self.notes.remove(index);
        if self.active.as_deref() == Some(removed.id.as_str()) {
            self.active = None;
        }
        Ok(removed)
    }

    /// Read view of all notes, in collection order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Position of the note with the given id, if present
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Position of the first note with the given title, if present
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.title == title)
    }

    /// Marks the note with the given id as active
    pub fn set_active(&mut self, id: impl Into<String>) {
        self.active = Some(id.into());
    }

    /// Clears the active selection ("new note" state)
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Current index of the active note, if one is selected and still present
    pub fn active_index(&self) -> Option<usize> {
        self.active.as_deref().and_then(|id| self.position_of(id))
    }

    /// Saves a note into the collection following the selection policy:
    /// an active selection means replace-in-place, no selection means append.
    ///
    /// Returns the index the note ended up at. This decides overwrite vs.
    /// create, so the caller's save flow must go through here.
    pub fn commit(&mut self, note: Note) -> usize {
        match self.active_index() {
            Some(index) => {
                debug!("Replacing note at index {}", index);
                let id = note.id.clone();
                self.notes[index] = note;
                self.active = Some(id);
                index
            }
            None => {
                debug!("Appending new note: {}", note.title);
                let id = note.id.clone();
                self.notes.push(note);
                self.active = Some(id);
                self.notes.len() - 1
            }
        }
    }
}
