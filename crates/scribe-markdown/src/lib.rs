//! scribe-markdown: the Markdown-to-HTML pipeline behind the live preview.
//!
//! This crate provides:
//! - `RenderOptions` - explicit, immutable parser/renderer configuration
//! - `convert()` - Markdown in, `MarkdownResult` out (html, cursor offset, warnings)
//! - `check_syntax()` - heuristic warnings for unbalanced Markdown markers
//! - `map_to_html_offset()` - approximate source-cursor-to-preview mapping
//! - `export` - standalone HTML document assembly and PDF export requests

pub mod convert;
pub mod cursor;
pub mod export;
pub mod html;
pub mod options;
pub mod warnings;

pub use convert::{MarkdownResult, RenderError, convert, render_html};
pub use cursor::{CursorPosition, map_to_html_offset};
pub use export::{HtmlExport, PdfExportRequest, PdfOptions, html_document};
pub use html::push_html;
pub use options::RenderOptions;
pub use warnings::check_syntax;
