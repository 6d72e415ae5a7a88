//! In-memory document store.
//!
//! Documents live only for the session. The store - not the document -
//! enforces that identifiers are unique and that at most one document is
//! active at a time.

use smol_str::{SmolStr, format_smolstr};
use web_time::SystemTime;

/// File extension appended to display names that lack it.
pub const MD_EXTENSION: &str = ".md";

/// Stable, store-unique document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u64);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named in-memory document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub name: SmolStr,
    pub content: String,
    pub modified: SystemTime,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no such document: {0}")]
    UnknownDocument(DocumentId),
}

/// Ordered collection of documents with a single active slot.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    active: Option<DocumentId>,
    next_id: u64,
}

fn with_extension(name: &str) -> SmolStr {
    let name = name.trim();
    if name.ends_with(MD_EXTENSION) {
        name.into()
    } else {
        format_smolstr!("{name}{MD_EXTENSION}")
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty document and make it active.
    pub fn create(&mut self, name: &str) -> DocumentId {
        self.create_with_content(name, String::new())
    }

    /// Append a new document with initial content and make it active.
    pub fn create_with_content(&mut self, name: &str, content: String) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.documents.push(Document {
            id,
            name: with_extension(name),
            content,
            modified: SystemTime::now(),
        });
        self.active = Some(id);
        tracing::debug!(%id, "created document");
        id
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    fn get_mut(&mut self, id: DocumentId) -> Result<&mut Document, StoreError> {
        self.documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::UnknownDocument(id))
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn active(&self) -> Option<&Document> {
        self.active.and_then(|id| self.get(id))
    }

    /// Mark a document active and return it.
    pub fn select(&mut self, id: DocumentId) -> Result<&Document, StoreError> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::UnknownDocument(id))?;
        self.active = Some(id);
        Ok(&self.documents[index])
    }

    /// Update a display name, appending the extension if missing.
    pub fn rename(&mut self, id: DocumentId, new_name: &str) -> Result<(), StoreError> {
        let doc = self.get_mut(id)?;
        doc.name = with_extension(new_name);
        doc.modified = SystemTime::now();
        Ok(())
    }

    /// Update content and timestamp.
    pub fn save(&mut self, id: DocumentId, content: String) -> Result<(), StoreError> {
        let doc = self.get_mut(id)?;
        doc.content = content;
        doc.modified = SystemTime::now();
        Ok(())
    }

    /// Remove a document. Callers confirm destructive actions first.
    ///
    /// If the removed document was active, the first remaining document (in
    /// store order) becomes active; returns the new active id, if any.
    pub fn delete(&mut self, id: DocumentId) -> Result<Option<DocumentId>, StoreError> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::UnknownDocument(id))?;
        self.documents.remove(index);
        if self.active == Some(id) {
            self.active = self.documents.first().map(|d| d.id);
        }
        tracing::debug!(%id, "deleted document");
        Ok(self.active)
    }
}
