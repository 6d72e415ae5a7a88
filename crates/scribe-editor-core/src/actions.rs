//! Keyboard shortcuts and snippet insertion.
//!
//! Platform-agnostic key representation plus the default keymap. The host
//! converts native key events into `KeyCombo`s; the editor answers with an
//! `EditorCommand`. Snippet insertion is a pure `(content, selection)` to
//! `(content, selection)` transform.

use smol_str::SmolStr;

use crate::types::{Selection, replace_char_range};

/// Key values for keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, stored lowercase.
    Character(SmolStr),
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
}

impl Key {
    /// Create a character key, normalizing to lowercase so lookups are
    /// independent of the Shift state reported by the host.
    pub fn character(s: impl AsRef<str>) -> Self {
        Self::Character(SmolStr::new(s.as_ref().to_lowercase()))
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };
}

/// A key combination for triggering a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    pub fn ctrl_shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL_SHIFT,
        }
    }
}

/// Fixed Markdown snippets inserted by shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    Bold,
    Italic,
    Link,
    Image,
    CodeBlock,
    Header,
    Quote,
    List,
    NumberedList,
    Table,
}

impl Snippet {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Bold => "**bold text**",
            Self::Italic => "*italic text*",
            Self::Link => "[link text](url)",
            Self::Image => "![alt text](image-url)",
            Self::CodeBlock => "```\ncode here\n```",
            Self::Header => "# Header",
            Self::Quote => "> Quote text",
            Self::List => "- List item",
            Self::NumberedList => "1. Numbered item",
            Self::Table => {
                "| Column 1 | Column 2 |\n|----------|----------|\n| Cell 1   | Cell 2   |"
            }
        }
    }
}

/// Semantic editor commands a key combination can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    OpenFind,
    OpenFindReplace,
    NewDocument,
    ClosePanel,
    InsertSnippet(Snippet),
}

/// Mapping from key combinations to editor commands.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCombo, EditorCommand)>,
}

impl Default for Keymap {
    fn default() -> Self {
        use EditorCommand::*;
        let ctrl = |c: char| KeyCombo::ctrl(Key::character(c.to_string()));
        let ctrl_shift = |c: char| KeyCombo::ctrl_shift(Key::character(c.to_string()));
        Self {
            bindings: vec![
                (ctrl('f'), OpenFind),
                (ctrl_shift('f'), OpenFindReplace),
                (ctrl('n'), NewDocument),
                (KeyCombo::new(Key::Escape), ClosePanel),
                (ctrl('b'), InsertSnippet(Snippet::Bold)),
                (ctrl('i'), InsertSnippet(Snippet::Italic)),
                (ctrl('k'), InsertSnippet(Snippet::Link)),
                (ctrl_shift('k'), InsertSnippet(Snippet::Image)),
                (ctrl('`'), InsertSnippet(Snippet::CodeBlock)),
                (ctrl('h'), InsertSnippet(Snippet::Header)),
                (ctrl('q'), InsertSnippet(Snippet::Quote)),
                (ctrl('l'), InsertSnippet(Snippet::List)),
                (ctrl_shift('l'), InsertSnippet(Snippet::NumberedList)),
                (ctrl('t'), InsertSnippet(Snippet::Table)),
            ],
        }
    }
}

impl Keymap {
    /// Look up the command bound to a combination, first match wins.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<EditorCommand> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == combo)
            .map(|(_, command)| *command)
    }

    pub fn bindings(&self) -> &[(KeyCombo, EditorCommand)] {
        &self.bindings
    }
}

/// Replace the selection with a snippet; the caret lands after the snippet.
pub fn insert_snippet(content: &str, selection: Selection, snippet: Snippet) -> (String, Selection) {
    insert_text(content, selection, snippet.text())
}

/// Insert two spaces at the selection (Tab key behavior).
pub fn insert_indent(content: &str, selection: Selection) -> (String, Selection) {
    insert_text(content, selection, "  ")
}

fn insert_text(content: &str, selection: Selection, text: &str) -> (String, Selection) {
    let len = content.chars().count();
    let selection = selection.clamp_to(len);
    let new_content = replace_char_range(content, selection.to_range(), text);
    let caret = Selection::collapsed(selection.start() + text.chars().count());
    (new_content, caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_lookups() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl(Key::character("f"))),
            Some(EditorCommand::OpenFind)
        );
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl_shift(Key::character("f"))),
            Some(EditorCommand::OpenFindReplace)
        );
        assert_eq!(
            keymap.lookup(&KeyCombo::new(Key::Escape)),
            Some(EditorCommand::ClosePanel)
        );
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl(Key::character("b"))),
            Some(EditorCommand::InsertSnippet(Snippet::Bold))
        );
        assert_eq!(keymap.lookup(&KeyCombo::new(Key::Tab)), None);
    }

    #[test]
    fn test_character_keys_normalize_case() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl_shift(Key::character("K"))),
            Some(EditorCommand::InsertSnippet(Snippet::Image))
        );
    }

    #[test]
    fn test_insert_snippet_at_caret() {
        let (content, caret) = insert_snippet("ab", Selection::collapsed(1), Snippet::Bold);
        assert_eq!(content, "a**bold text**b");
        assert_eq!(caret, Selection::collapsed(1 + "**bold text**".len()));
    }

    #[test]
    fn test_insert_snippet_replaces_selection() {
        let (content, caret) = insert_snippet("hello world", Selection::new(0, 5), Snippet::Header);
        assert_eq!(content, "# Header world");
        assert_eq!(caret, Selection::collapsed(8));
    }

    #[test]
    fn test_insert_indent() {
        let (content, caret) = insert_indent("ab", Selection::collapsed(1));
        assert_eq!(content, "a  b");
        assert_eq!(caret, Selection::collapsed(3));
    }

    #[test]
    fn test_insert_clamps_out_of_range_selection() {
        let (content, caret) = insert_indent("ab", Selection::new(5, 9));
        assert_eq!(content, "ab  ");
        assert_eq!(caret, Selection::collapsed(4));
    }

    #[test]
    fn test_table_snippet_shape() {
        let text = Snippet::Table.text();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.starts_with('|') && l.ends_with('|')));
    }
}
