//! Undo/redo history for the active document's content.
//!
//! A single linear sequence of content snapshots with a cursor. Appending
//! after the cursor truncates any forward (redone-then-diverged) entries.
//! The history is bounded: when a push would exceed the cap, the oldest
//! entry is dropped from the front and the cursor stays on the newest entry.

use web_time::Instant;

/// Maximum number of retained snapshots.
pub const MAX_HISTORY: usize = 50;

/// Immutable content snapshot.
#[derive(Debug, Clone)]
pub struct HistoryItem {
    pub content: String,
    pub timestamp: Instant,
}

/// Bounded linear undo/redo stack.
///
/// Invariant: never empty, and `index < len()` at all times.
#[derive(Debug, Clone)]
pub struct History {
    items: Vec<HistoryItem>,
    index: usize,
}

impl History {
    /// Start a new history seeded with the initial content.
    pub fn new(initial: &str) -> Self {
        Self {
            items: vec![HistoryItem {
                content: initial.to_string(),
                timestamp: Instant::now(),
            }],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Content at the cursor.
    pub fn current(&self) -> &str {
        &self.items[self.index].content
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    /// Record a snapshot if the content differs from the one at the cursor.
    ///
    /// Truncates forward entries, appends, and leaves the cursor on the new
    /// last entry; over the cap, the oldest entry is evicted from the front.
    /// Returns whether a snapshot was recorded.
    pub fn record(&mut self, content: &str) -> bool {
        if self.current() == content {
            return false;
        }
        self.items.truncate(self.index + 1);
        self.items.push(HistoryItem {
            content: content.to_string(),
            timestamp: Instant::now(),
        });
        if self.items.len() > MAX_HISTORY {
            self.items.remove(0);
        }
        self.index = self.items.len() - 1;
        true
    }

    /// Move the cursor back one entry. No-op at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Move the cursor forward one entry. No-op at the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_seed() {
        let history = History::new("a");
        assert_eq!(history.current(), "a");
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_identical_content_is_noop() {
        let mut history = History::new("a");
        assert!(!history.record("a"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new("A");
        assert!(history.record("B"));

        assert_eq!(history.undo(), Some("A"));
        assert_eq!(history.redo(), Some("B"));
        assert_eq!(history.current(), "B");
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new("a");
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), "a");
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut history = History::new("a");
        history.record("b");
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), "b");
    }

    #[test]
    fn test_divergence_truncates_forward_entries() {
        let mut history = History::new("a");
        history.record("b");
        history.record("c");
        history.undo();
        history.undo();
        assert_eq!(history.current(), "a");

        history.record("x");
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some("a"));
    }

    #[test]
    fn test_bounded_at_cap() {
        let mut history = History::new("0");
        for i in 1..=60 {
            history.record(&i.to_string());
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.current(), "60");
        assert_eq!(history.index(), MAX_HISTORY - 1);
    }

    #[test]
    fn test_eviction_drops_oldest_but_keeps_undo_chain() {
        let mut history = History::new("0");
        for i in 1..=MAX_HISTORY {
            history.record(&i.to_string());
        }
        // "0" was evicted; the oldest reachable snapshot is "1".
        let mut last = None;
        while let Some(content) = history.undo() {
            last = Some(content.to_string());
        }
        assert_eq!(last.as_deref(), Some("1"));
    }

    #[test]
    fn test_index_always_in_bounds() {
        let mut history = History::new("0");
        for i in 1..=120 {
            history.record(&i.to_string());
            assert!(history.index() < history.len());
        }
        while history.undo().is_some() {
            assert!(history.index() < history.len());
        }
    }
}
