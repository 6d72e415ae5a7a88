//! Conversion entry point: Markdown in, preview state out.

use pulldown_cmark::{Event, Parser};

use crate::cursor::{CursorPosition, map_to_html_offset};
use crate::html::write_html_fmt;
use crate::options::RenderOptions;
use crate::warnings::check_into;

/// Fallback body when rendering fails. Rendering never propagates an error
/// to the caller.
pub const FALLBACK_HTML: &str = "<p>Error converting markdown to HTML</p>";

/// Derived, ephemeral result of a conversion pass. Recomputed on every
/// content or cursor change; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownResult {
    /// Rendered HTML body.
    pub html: String,
    /// Approximate cursor offset into `html`, when a source cursor was given.
    pub cursor_offset: Option<usize>,
    /// Advisory syntax warnings, in rule order.
    pub warnings: Vec<String>,
}

/// Rendering failure. Callers of [`convert`] never see this; it is mapped to
/// [`FALLBACK_HTML`] plus a warning.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write rendered html: {0}")]
    Write(#[from] core::fmt::Error),
}

/// Render `markdown` to an HTML body string.
pub fn render_html(markdown: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let parser = Parser::new_ext(markdown, options.parser_options());
    let mut html = String::new();
    if options.hard_line_breaks {
        // The parser has no newline-as-break switch; rewrite the events.
        let events = parser.map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });
        write_html_fmt(&mut html, events)?;
    } else {
        write_html_fmt(&mut html, parser)?;
    }
    Ok(html)
}

/// Convert Markdown source to preview state.
///
/// Deterministic in its inputs. Syntax warnings are computed before
/// rendering so they are present even when rendering fails; the cursor is
/// mapped only when one was supplied and the source is non-empty.
pub fn convert(
    markdown: &str,
    cursor: Option<CursorPosition>,
    options: &RenderOptions,
) -> MarkdownResult {
    let mut warnings = Vec::new();
    check_into(markdown, &mut warnings);

    let html = match render_html(markdown, options) {
        Ok(html) => html,
        Err(err) => {
            tracing::error!("markdown rendering failed: {err}");
            warnings.push("Error occurred while parsing markdown".to_string());
            return MarkdownResult {
                html: FALLBACK_HTML.to_string(),
                cursor_offset: None,
                warnings,
            };
        }
    };

    let cursor_offset = match cursor {
        Some(position) if !markdown.is_empty() => {
            Some(map_to_html_offset(markdown, &html, position))
        }
        _ => None,
    };

    MarkdownResult {
        html,
        cursor_offset,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_is_deterministic() {
        let opts = RenderOptions::default();
        let a = convert("# Hi\n\n**bold** and *ok*", None, &opts);
        let b = convert("# Hi\n\n**bold** and *ok*", None, &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scenario_clean_document() {
        let result = convert("# Hi\n\n**bold** and *ok*", None, &RenderOptions::default());
        assert!(result.html.contains("<h1>Hi</h1>"));
        assert!(result.html.contains("<strong>bold</strong>"));
        assert!(result.html.contains("<em>ok</em>"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scenario_unbalanced_bold() {
        let result = convert("**unbalanced", None, &RenderOptions::default());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("bold markers"))
        );
    }

    #[test]
    fn test_hard_line_breaks_toggle() {
        let opts = RenderOptions::default();
        let result = convert("one\ntwo", None, &opts);
        assert!(result.html.contains("<br>"));

        let opts = RenderOptions {
            hard_line_breaks: false,
            ..Default::default()
        };
        let result = convert("one\ntwo", None, &opts);
        assert!(!result.html.contains("<br>"));
    }

    #[test]
    fn test_cursor_offset_present_and_bounded() {
        let result = convert(
            "# Hi\n\nbody text",
            Some(CursorPosition::new(2, 4)),
            &RenderOptions::default(),
        );
        let offset = result.cursor_offset.expect("cursor offset");
        assert!(offset <= result.html.chars().count());
    }

    #[test]
    fn test_cursor_skipped_for_empty_source() {
        let result = convert("", Some(CursorPosition::new(0, 0)), &RenderOptions::default());
        assert_eq!(result.cursor_offset, None);
    }

    #[test]
    fn test_warnings_present_without_cursor() {
        let result = convert("~~strike", None, &RenderOptions::default());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.html.contains("~~strike"));
    }
}
