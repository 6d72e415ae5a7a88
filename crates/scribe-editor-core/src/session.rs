//! Live editing session.
//!
//! Ties the document store, the history, and the Markdown pipeline
//! together: every content change records a snapshot and recomputes the
//! preview; document operations bridge the store and the live content.
//! Everything runs on the caller's single thread; the most recent change
//! always determines the next preview.

use scribe_markdown::{CursorPosition, MarkdownResult, RenderOptions, convert};

use crate::actions::{self, Snippet};
use crate::document::{DocumentId, DocumentStore, StoreError};
use crate::history::History;
use crate::search::SearchState;
use crate::types::Selection;

/// Seed content for the bootstrap document.
pub const WELCOME: &str = "\
# Welcome

This is a **live preview** Markdown editor.

## Features
- *Real-time* preview
- Export to HTML and PDF
- Undo/Redo functionality

```javascript
function greet(name) {
  console.log(`Hello, ${name}!`);
}
```

> Start editing this text to see the live preview!
";

/// A live editing session over one active document.
pub struct Session {
    store: DocumentStore,
    history: History,
    content: String,
    cursor: CursorPosition,
    search: SearchState,
    options: RenderOptions,
    preview: MarkdownResult,
}

impl Session {
    /// Bootstrap a session with one default document holding the welcome
    /// content.
    pub fn new(options: RenderOptions) -> Self {
        let mut store = DocumentStore::new();
        store.create_with_content("Untitled", WELCOME.to_string());
        let content = WELCOME.to_string();
        let cursor = CursorPosition::default();
        let preview = convert(&content, Some(cursor), &options);
        Self {
            store,
            history: History::new(&content),
            content,
            cursor,
            search: SearchState::default(),
            options,
            preview,
        }
    }

    // === Accessors ===

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn preview(&self) -> &MarkdownResult {
        &self.preview
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn character_count(&self) -> usize {
        self.content.chars().count()
    }

    // === Content editing ===

    /// Replace the live content, recording history and refreshing the
    /// preview.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.history.record(&self.content);
        self.refresh();
    }

    /// Move the source cursor; the preview's cursor offset follows.
    pub fn set_cursor(&mut self, cursor: CursorPosition) {
        self.cursor = cursor;
        self.refresh();
    }

    pub fn set_search(&mut self, search: SearchState) {
        self.search = search;
    }

    fn refresh(&mut self) {
        self.preview = convert(&self.content, Some(self.cursor), &self.options);
    }

    /// Restore the previous snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.content = snapshot.to_string();
        self.refresh();
        true
    }

    /// Restore the next snapshot. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.content = snapshot.to_string();
        self.refresh();
        true
    }

    /// Reset content and history. Callers confirm with the user first;
    /// declining means not calling this.
    pub fn clear(&mut self) {
        self.content.clear();
        self.history = History::new("");
        if let Some(id) = self.store.active_id() {
            // The active document mirrors the cleared editor.
            let _ = self.store.save(id, String::new());
        }
        self.refresh();
    }

    /// Replace the selection with a snippet; returns the caret after it.
    pub fn insert_snippet(&mut self, selection: Selection, snippet: Snippet) -> Selection {
        let (content, caret) = actions::insert_snippet(&self.content, selection, snippet);
        self.set_content(content);
        caret
    }

    /// Two-space indent at the selection (Tab key).
    pub fn insert_indent(&mut self, selection: Selection) -> Selection {
        let (content, caret) = actions::insert_indent(&self.content, selection);
        self.set_content(content);
        caret
    }

    // === Document management ===

    /// Create a new document, becoming active with empty editor content.
    pub fn create_document(&mut self, name: &str) -> DocumentId {
        let id = self.store.create(name);
        self.content.clear();
        self.history = History::new("");
        self.refresh();
        id
    }

    /// Load a document into the editor and mark it active.
    pub fn select_document(&mut self, id: DocumentId) -> Result<(), StoreError> {
        let content = self.store.select(id)?.content.clone();
        self.content = content;
        self.history = History::new(&self.content);
        self.refresh();
        Ok(())
    }

    /// Save the live editor content into the active document.
    pub fn save_active(&mut self) -> Result<(), StoreError> {
        match self.store.active_id() {
            Some(id) => self.store.save(id, self.content.clone()),
            None => Ok(()),
        }
    }

    pub fn rename_document(&mut self, id: DocumentId, name: &str) -> Result<(), StoreError> {
        self.store.rename(id, name)
    }

    /// Delete a document. Callers confirm with the user first. If it was
    /// active, the next remaining document is loaded, or the editor is
    /// cleared when none remain.
    pub fn delete_document(&mut self, id: DocumentId) -> Result<(), StoreError> {
        let was_active = self.store.active_id() == Some(id);
        let next_active = self.store.delete(id)?;
        if was_active {
            self.content = next_active
                .and_then(|id| self.store.get(id))
                .map(|doc| doc.content.clone())
                .unwrap_or_default();
            self.history = History::new(&self.content);
            self.refresh();
        }
        Ok(())
    }

    // === Find/replace ===

    /// First match of the current search, from the start of the document.
    pub fn find(&self) -> Option<Selection> {
        self.search.find_first(&self.content)
    }

    /// Replace the first match; returns a selection over the replacement.
    pub fn replace(&mut self, replacement: &str) -> Option<Selection> {
        let (content, selection) = self.search.replace_first(&self.content, replacement)?;
        self.set_content(content);
        Some(selection)
    }

    /// Replace every match; returns whether anything changed.
    pub fn replace_all(&mut self, replacement: &str) -> bool {
        match self.search.replace_all(&self.content, replacement) {
            Some(content) => {
                self.set_content(content);
                true
            }
            None => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
