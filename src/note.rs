//! Core data structure for the notedesk application.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single note in our system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Immutable identifier, independent of the mutable title
    pub id: String,
    /// Note title; doubles as the storage filename stem
    pub title: String,
    /// Note content, plain text
    pub content: String,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with the given title and content.
    ///
    /// The title is trimmed; emptiness is checked at the store boundary
    /// before any I/O happens.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into().trim().to_string();
        let now = Utc::now();

        Note {
            id: make_note_id(&title, now),
            title,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a note with known timestamps, e.g. from file metadata.
    ///
    /// Upholds `updated_at >= created_at` by clamping.
    pub fn with_timestamps(
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let title = title.into().trim().to_string();

        Note {
            id: make_note_id(&title, created_at),
            title,
            content: content.into(),
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    /// Replaces the title, bumping the modification time
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into().trim().to_string();
        self.touch();
    }

    /// Replaces the content, bumping the modification time
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Human-readable date line shown next to the note
    pub fn date_line(&self) -> String {
        format!(
            "Created: {} | Last Modified: {}",
            format_timestamp(self.created_at),
            format_timestamp(self.updated_at)
        )
    }
}

/// Generate a note identifier from its creation instant and slugged title
fn make_note_id(title: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}-{}",
        at.timestamp_millis(),
        title.to_lowercase().replace(' ', "-")
    )
}

/// Formats a timestamp into a readable date string
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_note_trims_title_and_equalizes_timestamps() {
        let note = Note::new("  Groceries  ", "milk");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn with_timestamps_clamps_updated_at() {
        let now = Utc::now();
        let earlier = now - Duration::seconds(30);
        let note = Note::with_timestamps("Todo", "", now, earlier);
        assert_eq!(note.updated_at, note.created_at);
    }

    #[test]
    fn mutation_bumps_updated_at() {
        let mut note = Note::new("Todo", "old");
        let before = note.updated_at;
        note.set_content("new");
        assert!(note.updated_at >= before);
        assert_eq!(note.content, "new");
    }

    #[test]
    fn id_is_stable_across_title_changes() {
        let mut note = Note::new("Todo", "");
        let id = note.id.clone();
        note.set_title("Chores");
        assert_eq!(note.id, id);
    }
}
