//! Ordered note repository

use crate::domain::note::Note;
use std::collections::BTreeSet;
use tracing::debug;

/// In-memory note store, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        NoteBook::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        NoteBook { notes }
    }

    pub fn add(&mut self, text: impl Into<String>, tags: Vec<String>) {
        let note = Note::new(text, tags);
        debug!(tags = note.tags.len(), "added note");
        self.notes.push(note);
    }

    /// Notes whose text contains `keyword` ignoring case, or that carry
    /// `keyword` as an exact-case tag.
    pub fn search(&self, keyword: &str) -> Vec<&Note> {
        let needle = keyword.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.text.to_lowercase().contains(&needle) || note.has_tag(keyword))
            .collect()
    }

    /// Update every note whose text or any tag equals `identifier`, ignoring case.
    ///
    /// Empty `new_text` keeps the current text; `new_tags` replaces the tags
    /// whenever it is given. Returns whether anything matched.
    pub fn edit(
        &mut self,
        identifier: &str,
        new_text: Option<&str>,
        new_tags: Option<Vec<String>>,
    ) -> bool {
        let needle = identifier.to_lowercase();
        let mut edited = 0;

        for note in &mut self.notes {
            let matched = note.text.to_lowercase() == needle
                || note.tags.iter().any(|tag| tag.to_lowercase() == needle);
            if !matched {
                continue;
            }
            if let Some(text) = new_text.filter(|t| !t.is_empty()) {
                note.text = text.to_string();
            }
            if let Some(tags) = &new_tags {
                note.tags = tags.clone();
            }
            edited += 1;
        }

        debug!(identifier, edited, "edited notes");
        edited > 0
    }

    /// Remove every note whose text or a tag equals `identifier` exactly.
    pub fn delete(&mut self, identifier: &str) -> usize {
        let before = self.notes.len();
        self.notes
            .retain(|note| note.text != identifier && !note.has_tag(identifier));
        let removed = before - self.notes.len();
        debug!(identifier, removed, "deleted notes");
        removed
    }

    /// Distinct tags across all notes, sorted
    pub fn tags(&self) -> Vec<String> {
        self.notes
            .iter()
            .flat_map(|note| note.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
