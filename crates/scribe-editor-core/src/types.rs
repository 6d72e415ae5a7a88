//! Core editor types: selections and offset conversions.
//!
//! All editor-facing offsets are character offsets, not byte offsets.
//! Conversions to and from byte offsets happen at the boundaries that need
//! them (regex matching, string slicing).

use std::ops::Range;

/// Text selection with anchor and head positions.
///
/// The anchor is where the selection started, the head is where the cursor
/// is now. They may be in any order - use `start()` and `end()` for ordered
/// bounds.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where selection started
    pub anchor: usize,
    /// Where cursor is now
    pub head: usize,
}

impl Selection {
    /// Create a new selection.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor position).
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Get the start (lower bound) of the selection.
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end (upper bound) of the selection.
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Check if the selection is collapsed (empty, cursor only).
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the selection length.
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Check if empty (same as is_collapsed).
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Convert to a Range<usize> (ordered).
    pub fn to_range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if the selection is backwards (head before anchor).
    pub fn is_backwards(&self) -> bool {
        self.head < self.anchor
    }

    /// Clamp both ends to a document length.
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}

/// Convert a char offset into a byte offset, clamped to the end of `s`.
pub fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Convert a byte offset into a char offset. The offset must lie on a char
/// boundary within `s`.
pub fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

/// Replace a char range of `s` with `text`, returning the new string.
pub fn replace_char_range(s: &str, range: Range<usize>, text: &str) -> String {
    let start = char_to_byte(s, range.start);
    let end = char_to_byte(s, range.end);
    let mut out = String::with_capacity(s.len() - (end - start) + text.len());
    out.push_str(&s[..start]);
    out.push_str(text);
    out.push_str(&s[end..]);
    out
}
