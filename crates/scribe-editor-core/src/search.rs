//! Find/replace over document content.
//!
//! Pure functions over `(content, selection)`: the caller passes the text
//! in and gets new text and a new selection back. Nothing here looks up an
//! input surface; that wiring belongs to the host.

use regex::Regex;

use crate::types::{Selection, byte_to_char, replace_char_range};

/// Transient search configuration driving find, replace, and highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub case_sensitive: bool,
    pub whole_word: bool,
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Blank queries match nothing and make every operation a no-op.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Compile the query: special characters escaped, optional word
    /// boundaries, optional case-insensitivity.
    fn build_regex(&self) -> Option<Regex> {
        if self.is_blank() {
            return None;
        }
        let mut pattern = String::new();
        if !self.case_sensitive {
            pattern.push_str("(?i)");
        }
        if self.whole_word {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(&self.query));
        if self.whole_word {
            pattern.push_str(r"\b");
        }
        Regex::new(&pattern).ok()
    }

    /// Find the first match from the start of the document.
    pub fn find_first(&self, content: &str) -> Option<Selection> {
        let regex = self.build_regex()?;
        let found = regex.find(content)?;
        Some(Selection::new(
            byte_to_char(content, found.start()),
            byte_to_char(content, found.end()),
        ))
    }

    /// Replace only the first match. Returns the new content and a selection
    /// covering the replacement text.
    pub fn replace_first(&self, content: &str, replacement: &str) -> Option<(String, Selection)> {
        let found = self.find_first(content)?;
        let new_content = replace_char_range(content, found.to_range(), replacement);
        let start = found.start();
        let selection = Selection::new(start, start + replacement.chars().count());
        Some((new_content, selection))
    }

    /// Replace every match. Returns the new content only when it differs.
    pub fn replace_all(&self, content: &str, replacement: &str) -> Option<String> {
        let regex = self.build_regex()?;
        // NoExpand: the replacement is literal text, not a capture template.
        let new_content = regex.replace_all(content, regex::NoExpand(replacement));
        if new_content == content {
            None
        } else {
            Some(new_content.into_owned())
        }
    }

    /// Wrap every match in a `<mark>` span for the editor's highlight
    /// overlay. Returns the content unchanged for blank queries.
    pub fn highlight(&self, content: &str) -> String {
        match self.build_regex() {
            Some(regex) => regex
                .replace_all(content, "<mark class=\"search-hit\">$0</mark>")
                .into_owned(),
            None => content.to_string(),
        }
    }
}
