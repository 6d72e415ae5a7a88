//! Cursor position mapping from source text into rendered HTML.

/// A cursor position in the source text. Line and column are zero-based
/// character indices, clamped to the bounds of the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Approximate the offset into `html` that corresponds to `position` in
/// `markdown`.
///
/// This is a linear length-ratio projection: the cursor's character offset
/// into the source is scaled by `html.len() / markdown.len()`. It does not
/// track structural correspondence between source and rendered positions;
/// that coarseness is a documented property, not a bug.
///
/// The result is always within `[0, html char length]`.
pub fn map_to_html_offset(markdown: &str, html: &str, position: CursorPosition) -> usize {
    let md_len = markdown.chars().count();
    let html_len = html.chars().count();
    if md_len == 0 {
        return 0;
    }

    let lines: Vec<&str> = markdown.split('\n').collect();
    let line = position.line.min(lines.len() - 1);
    let column = position.column.min(lines[line].chars().count());

    // Character offset into the source: preceding lines plus one separator
    // each, then the clamped column.
    let mut md_offset = 0usize;
    for l in &lines[..line] {
        md_offset += l.chars().count() + 1;
    }
    md_offset += column;

    let ratio = md_offset as f64 / md_len as f64;
    ((html_len as f64) * ratio).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_maps_to_zero() {
        assert_eq!(map_to_html_offset("", "<p></p>", CursorPosition::new(0, 0)), 0);
    }

    #[test]
    fn test_start_maps_to_start() {
        assert_eq!(map_to_html_offset("hello", "<p>hello</p>", CursorPosition::new(0, 0)), 0);
    }

    #[test]
    fn test_end_maps_to_end() {
        let md = "hello";
        let html = "<p>hello</p>";
        let offset = map_to_html_offset(md, html, CursorPosition::new(0, 5));
        assert_eq!(offset, html.chars().count());
    }

    #[test]
    fn test_offset_within_bounds_for_any_position() {
        let md = "# Hi\n\nsome **bold** text\nmore";
        let html = "<h1>Hi</h1>\n<p>some <strong>bold</strong> text<br>\nmore</p>\n";
        for line in 0..10 {
            for column in 0..40 {
                let offset = map_to_html_offset(md, html, CursorPosition::new(line, column));
                assert!(offset <= html.chars().count());
            }
        }
    }

    #[test]
    fn test_line_and_column_are_clamped() {
        let md = "ab\ncd";
        let html = "<p>ab<br>\ncd</p>";
        let clamped = map_to_html_offset(md, html, CursorPosition::new(99, 99));
        let end = map_to_html_offset(md, html, CursorPosition::new(1, 2));
        assert_eq!(clamped, end);
    }

    #[test]
    fn test_midpoint_is_roughly_proportional() {
        let md = "aaaa\nbbbb";
        let html = "<p>aaaa<br>\nbbbb</p>";
        // Cursor at start of the second line: offset 5 of 9.
        let offset = map_to_html_offset(md, html, CursorPosition::new(1, 0));
        assert_eq!(offset, (html.chars().count() as f64 * 5.0 / 9.0).floor() as usize);
    }
}
