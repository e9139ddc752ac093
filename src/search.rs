//! Substring search over the note collection.
//!
//! Filtering is synchronous, case-insensitive, and order-preserving; results
//! always come back in the underlying collection's order, never ranked. This
//! runs on every query-string change, which is fine at the scale of a
//! personal note collection.

use crate::Note;

/// Which fields a query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Match the title only (sidebar incremental filter)
    Title,
    /// Match either title or content (global search)
    TitleOrContent,
}

/// Derives a filtered view of `notes` for the given query.
///
/// A blank query returns the full collection unfiltered.
pub fn filter<'a>(notes: &'a [Note], query: &str, mode: SearchMode) -> Vec<&'a Note> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return notes.iter().collect();
    }

    notes
        .iter()
        .filter(|note| match mode {
            SearchMode::Title => note.title.to_lowercase().contains(&query),
            SearchMode::TitleOrContent => {
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
            }
        })
        .collect()
}

/// Title-only filter, as driven by the incremental sidebar search
pub fn filter_by_title<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    filter(notes, query, SearchMode::Title)
}

/// Title-or-content filter, as driven by the global search field
pub fn filter_by_title_or_content<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    filter(notes, query, SearchMode::TitleOrContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(pairs: &[(&str, &str)]) -> Vec<Note> {
        pairs.iter().map(|(t, c)| Note::new(*t, *c)).collect()
    }

    fn titles<'a>(found: &[&'a Note]) -> Vec<&'a str> {
        found.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let notes = notes(&[("b", ""), ("a", ""), ("c", "")]);
        assert_eq!(titles(&filter_by_title(&notes, "")), ["b", "a", "c"]);
        assert_eq!(titles(&filter_by_title(&notes, "   ")), ["b", "a", "c"]);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let notes = notes(&[("Groceries", ""), ("Grocery Budget", ""), ("Work", "")]);
        assert_eq!(
            titles(&filter_by_title(&notes, "grocer")),
            ["Groceries", "Grocery Budget"]
        );
        assert_eq!(titles(&filter_by_title(&notes, "BUDGET")), ["Grocery Budget"]);
    }

    #[test]
    fn content_mode_also_matches_note_bodies() {
        let notes = notes(&[("Todo", "buy milk"), ("Work", "standup at nine")]);
        assert_eq!(titles(&filter_by_title(&notes, "milk")), [] as [&str; 0]);
        assert_eq!(titles(&filter_by_title_or_content(&notes, "milk")), ["Todo"]);
    }

    #[test]
    fn title_matches_are_a_subset_of_title_or_content_matches() {
        let notes = notes(&[
            ("Groceries", "budget for the week"),
            ("Grocery Budget", ""),
            ("Journal", "went grocery shopping"),
        ]);
        for query in ["grocer", "budget", "journal", "week", "zzz"] {
            let by_title = titles(&filter_by_title(&notes, query));
            let by_any = titles(&filter_by_title_or_content(&notes, query));
            assert!(
                by_title.iter().all(|t| by_any.contains(t)),
                "query {:?}: {:?} not a subset of {:?}",
                query,
                by_title,
                by_any
            );
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let notes = notes(&[("Groceries", ""), ("Grocery Budget", ""), ("Work", "")]);
        let once: Vec<Note> = filter_by_title(&notes, "grocer")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_by_title(&once, "grocer");
        assert_eq!(titles(&twice).len(), once.len());
        assert_eq!(titles(&twice), once.iter().map(|n| n.title.as_str()).collect::<Vec<_>>());
    }
}
