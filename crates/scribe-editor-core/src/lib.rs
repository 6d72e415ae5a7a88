//! scribe-editor-core: Pure editor logic without framework dependencies.
//!
//! This crate provides:
//! - `Session` - a live editing session over one active document
//! - `DocumentStore` - in-memory documents with a single active slot
//! - `History` - bounded linear undo/redo snapshots
//! - `SearchState` - find/replace/highlight over document content
//! - `ScrollSync` - percentage-based scroll mirroring between panes
//! - `Keymap` and snippet insertion for keyboard shortcuts
//!
//! Everything is host-agnostic: the host feeds in key events, scroll
//! geometry, and content edits, and applies the results.

pub mod actions;
pub mod document;
pub mod history;
pub mod scroll;
pub mod search;
pub mod session;
pub mod types;

pub use actions::{
    EditorCommand, Key, KeyCombo, Keymap, Modifiers, Snippet, insert_indent, insert_snippet,
};
pub use document::{Document, DocumentId, DocumentStore, MD_EXTENSION, StoreError};
pub use history::{History, HistoryItem, MAX_HISTORY};
pub use scroll::{Pane, SYNC_COOLDOWN, ScrollMetrics, ScrollSync, ScrollUpdate};
pub use search::SearchState;
pub use session::{Session, WELCOME};
pub use smol_str::SmolStr;
pub use types::Selection;
