use std::path::{Path, PathBuf};

use console::Style;
use log::debug;

use crate::{
    export_note, filter, import_content, Commands, Config, Note, NoteCollection, NoteError,
    NoteStore, Result, SearchMode, Theme,
};

/// CLI application handler - processes commands against the note store and
/// the in-memory collection
pub struct App {
    /// The note storage backend
    store: NoteStore,

    /// In-memory collection mirroring the store
    collection: NoteCollection,

    /// Application configuration
    config: Config,
}

impl App {
    /// Opens the store from the config and loads all notes into memory
    pub fn new(config: Config) -> Result<Self> {
        let mut store = NoteStore::open(config.notes_dir.clone());
        let notes = store.load()?;
        debug!("Collection initialized with {} notes", notes.len());

        Ok(Self {
            store,
            collection: NoteCollection::from_notes(notes),
            config,
        })
    }

    /// Run the application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::New {
                title,
                content,
                file,
            } => self.create_note(title, content, file)?,

            Commands::List { json, detailed } => self.list_notes(json, detailed)?,

            Commands::Show { title } => self.show_note(&title)?,

            Commands::Edit {
                title,
                rename,
                content,
                file,
            } => self.edit_note(&title, rename, content, file)?,

            Commands::Delete { title } => self.delete_note(&title)?,

            Commands::Search {
                query,
                content,
                json,
            } => self.search_notes(&query, content, json)?,

            Commands::Export { title, output } => self.export(&title, &output)?,

            Commands::Import { source, title } => self.import(&source, title)?,
        }

        Ok(())
    }

    fn create_note(
        &mut self,
        title: String,
        content: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<()> {
        let note_content = match (content, file) {
            (Some(c), _) => c,
            (None, Some(path)) => import_content(&path)?,
            (None, None) => String::new(),
        };

        let note = Note::new(title, note_content);

        // Persist first; a rejected title must leave the collection untouched.
        self.store.save(&note)?;
        self.collection.clear_active();
        self.collection.commit(note.clone());

        println!("Note created: {}", note.title);
        Ok(())
    }

    fn list_notes(&self, json: bool, detailed: bool) -> Result<()> {
        let notes: Vec<&Note> = self.collection.notes().iter().collect();
        if json {
            self.display_notes_json(&notes)?;
        } else {
            self.display_notes_text(&notes, detailed)?;
        }
        Ok(())
    }

    fn show_note(&self, title: &str) -> Result<()> {
        let index = self.find_by_title(title)?;
        let note = &self.collection.notes()[index];

        println!("{}", self.accent_style().bold().apply_to(&note.title));
        println!("{}", note.date_line());
        println!();
        println!("{}", note.content);
        Ok(())
    }

    fn edit_note(
        &mut self,
        title: &str,
        rename: Option<String>,
        content: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<()> {
        if content.is_some() && file.is_some() {
            return Err(NoteError::ApplicationError {
                message: "Cannot specify both --content and --file options".to_string(),
            });
        }

        let index = self.find_by_title(title)?;
        let mut note = self.collection.notes()[index].clone();
        self.collection.set_active(note.id.clone());

        if let Some(new_title) = rename {
            note.set_title(new_title);
        }
        if let Some(new_content) = content {
            note.set_content(new_content);
        } else if let Some(path) = file {
            note.set_content(import_content(&path)?);
        }

        // Persist first so a rejected rename leaves the collection untouched.
        self.store.save(&note)?;
        let index = self.collection.commit(note.clone());
        debug!("Note replaced at index {}", index);

        println!("Note updated: {}", note.title);
        Ok(())
    }

    fn delete_note(&mut self, title: &str) -> Result<()> {
        let index = self.find_by_title(title)?;
        let note = self.collection.remove_at(index)?;
        self.store.delete(&note)?;

        println!("Note deleted: {}", note.title);
        Ok(())
    }

    fn search_notes(&self, query: &str, include_content: bool, json: bool) -> Result<()> {
        let mode = if include_content {
            SearchMode::TitleOrContent
        } else {
            SearchMode::Title
        };

        let results = filter(self.collection.notes(), query, mode);

        if json {
            self.display_notes_json(&results)?;
        } else {
            self.display_notes_text(&results, false)?;
        }

        if results.is_empty() {
            println!("No notes found matching query: \"{}\"", query);
        } else {
            println!(
                "\nFound {} matching note{}",
                results.len(),
                if results.len() == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }

    fn export(&self, title: &str, output: &Path) -> Result<()> {
        let index = self.find_by_title(title)?;
        export_note(&self.collection.notes()[index], output)?;
        println!("Note exported to {}", output.display());
        Ok(())
    }

    fn import(&mut self, source: &Path, title: Option<String>) -> Result<()> {
        let content = import_content(source)?;
        let title = title
            .or_else(|| {
                source
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
            })
            .ok_or_else(|| NoteError::InvalidTitle {
                title: source.display().to_string(),
            })?;

        self.create_note(title, Some(content), None)
    }

    /// Resolves a title to its collection index
    fn find_by_title(&self, title: &str) -> Result<usize> {
        self.collection
            .position_of_title(title)
            .ok_or_else(|| NoteError::NoteNotFound {
                title: title.to_string(),
            })
    }

    fn accent_style(&self) -> Style {
        match self.config.theme {
            Theme::Light => Style::new().blue(),
            Theme::Dark => Style::new().cyan(),
        }
    }

    /// Display notes in JSON format
    fn display_notes_json(&self, notes: &[&Note]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(notes)?);
        Ok(())
    }

    /// Display notes in text format
    fn display_notes_text(&self, notes: &[&Note], detailed: bool) -> Result<()> {
        if notes.is_empty() {
            return Ok(());
        }

        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, note) in notes.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            println!("{}", self.accent_style().bold().apply_to(&note.title));
            println!("{}", note.date_line());

            if detailed {
                println!("\n{}", note.content);
            } else {
                let preview = content_preview(&note.content, 100);
                if !preview.is_empty() {
                    println!("{}", preview);
                }
            }
        }

        Ok(())
    }
}

/// First non-empty line of the content, truncated for list display
fn content_preview(content: &str, max_len: usize) -> String {
    let first_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let truncated: String = first_line.chars().take(max_len).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn app_in(dir: &Path) -> App {
        let config = Config::from_overrides(Some(dir.join("notes")), None);
        App::new(config).unwrap()
    }

    #[test]
    fn new_note_lands_on_disk_and_in_the_collection() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        app.run(Commands::New {
            title: "Todo".to_string(),
            content: Some("Buy milk".to_string()),
            file: None,
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("notes").join("Todo.txt")).unwrap(),
            "Buy milk"
        );
        assert_eq!(app.collection.len(), 1);
    }

    #[test]
    fn rejected_title_leaves_collection_and_store_unchanged() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        let err = app
            .run(Commands::New {
                title: "   ".to_string(),
                content: Some("orphan".to_string()),
                file: None,
            })
            .unwrap_err();

        assert!(matches!(err, NoteError::EmptyTitle));
        assert_eq!(app.collection.len(), 0);
        assert!(!dir.path().join("notes").exists());
    }

    #[test]
    fn edit_replaces_in_place_and_overwrites_the_file() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.run(Commands::New {
            title: "Todo".to_string(),
            content: Some("Buy milk".to_string()),
            file: None,
        })
        .unwrap();

        app.run(Commands::Edit {
            title: "Todo".to_string(),
            rename: None,
            content: Some("Buy milk and eggs".to_string()),
            file: None,
        })
        .unwrap();

        assert_eq!(app.collection.len(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("notes").join("Todo.txt")).unwrap(),
            "Buy milk and eggs"
        );
    }

    #[test]
    fn rename_via_edit_does_not_orphan_the_old_file() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.run(Commands::New {
            title: "Todo".to_string(),
            content: Some("x".to_string()),
            file: None,
        })
        .unwrap();

        app.run(Commands::Edit {
            title: "Todo".to_string(),
            rename: Some("Chores".to_string()),
            content: None,
            file: None,
        })
        .unwrap();

        let notes_dir = dir.path().join("notes");
        assert!(!notes_dir.join("Todo.txt").exists());
        assert!(notes_dir.join("Chores.txt").exists());
        assert_eq!(app.collection.len(), 1);
        assert_eq!(app.collection.get(0).unwrap().title, "Chores");
    }

    #[test]
    fn delete_removes_one_entry_and_one_file() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        for title in ["Keep", "Gone"] {
            app.run(Commands::New {
                title: title.to_string(),
                content: None,
                file: None,
            })
            .unwrap();
        }

        app.run(Commands::Delete {
            title: "Gone".to_string(),
        })
        .unwrap();

        assert_eq!(app.collection.len(), 1);
        let notes_dir = dir.path().join("notes");
        assert!(notes_dir.join("Keep.txt").exists());
        assert!(!notes_dir.join("Gone.txt").exists());
    }

    #[test]
    fn deleting_an_unknown_title_reports_not_found() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        let err = app
            .run(Commands::Delete {
                title: "Missing".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, NoteError::NoteNotFound { .. }));
    }

    #[test]
    fn import_uses_file_stem_as_default_title() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Recipe.txt");
        fs::write(&source, "flour, water, salt").unwrap();

        let mut app = app_in(dir.path());
        app.run(Commands::Import {
            source: source.clone(),
            title: None,
        })
        .unwrap();

        assert_eq!(app.collection.get(0).unwrap().title, "Recipe");
        assert_eq!(app.collection.get(0).unwrap().content, "flour, water, salt");
    }
}
