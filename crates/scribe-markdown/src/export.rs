//! Export document assembly.
//!
//! HTML export produces a complete standalone page around the rendered body.
//! PDF export only assembles the request here; the actual HTML-to-PDF
//! conversion is an external facility invoked by the host, fire-and-forget.

use pulldown_cmark_escape::escape_html;

/// Default document title when the caller supplies none.
pub const DEFAULT_TITLE: &str = "Markdown Document";

/// Fixed stylesheet embedded into exported HTML documents.
const EXPORT_STYLESHEET: &str = "\
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1, h2, h3, h4, h5, h6 {
            margin-top: 2em;
            margin-bottom: 1em;
            font-weight: 600;
        }
        h1 { font-size: 2em; }
        h2 { font-size: 1.5em; }
        h3 { font-size: 1.25em; }
        p { margin-bottom: 1em; }
        pre {
            background: #f5f5f5;
            padding: 1em;
            border-radius: 4px;
            overflow-x: auto;
        }
        code {
            background: #f5f5f5;
            padding: 0.2em 0.4em;
            border-radius: 3px;
            font-size: 0.9em;
        }
        pre code {
            background: none;
            padding: 0;
        }
        blockquote {
            border-left: 4px solid #ddd;
            margin: 0;
            padding-left: 1em;
            color: #666;
        }
        table {
            border-collapse: collapse;
            width: 100%;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f5f5f5;
        }
        ul, ol {
            margin-bottom: 1em;
        }
        li {
            margin-bottom: 0.5em;
        }";

/// Wrap a rendered HTML body into a complete standalone document.
pub fn html_document(body: &str, title: &str) -> String {
    let mut escaped_title = String::new();
    // Writing into a String cannot fail.
    let _ = escape_html(&mut escaped_title, title);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20   <title>{escaped_title}</title>\n\
         \x20   <style>\n{EXPORT_STYLESHEET}\n\x20   </style>\n\
         </head>\n\
         <body>\n\
         \x20   {body}\n\
         </body>\n\
         </html>"
    )
}

/// A downloadable HTML export: file name plus full document contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlExport {
    pub filename: String,
    pub contents: String,
}

impl HtmlExport {
    pub fn new(body: &str, title: &str) -> Self {
        Self {
            filename: format!("{title}.html"),
            contents: html_document(body, title),
        }
    }
}

/// Page size for PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    #[default]
    Letter,
    A4,
}

/// Page orientation for PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Fixed options handed to the external HTML-to-PDF facility.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    /// Page margin in inches.
    pub margin_in: f64,
    /// JPEG quality for rasterized content, in `[0, 1]`.
    pub image_quality: f64,
    /// Raster scale factor.
    pub raster_scale: f64,
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin_in: 1.0,
            image_quality: 0.98,
            raster_scale: 2.0,
            format: PageFormat::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

/// A request for the host's PDF conversion facility. Completion is neither
/// awaited nor reported back into application state.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfExportRequest {
    pub filename: String,
    pub html: String,
    pub options: PdfOptions,
}

impl PdfExportRequest {
    pub fn new(body: &str, title: &str) -> Self {
        Self {
            filename: format!("{title}.pdf"),
            html: body.to_string(),
            options: PdfOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_document_structure() {
        let doc = html_document("<p>hi</p>", "Notes");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.contains("name=\"viewport\""));
        assert!(doc.contains("<title>Notes</title>"));
        assert!(doc.contains("<p>hi</p>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_html_document_escapes_title() {
        let doc = html_document("<p>hi</p>", "a < b");
        assert!(doc.contains("<title>a &lt; b</title>"));
    }

    #[test]
    fn test_html_export_filename() {
        let export = HtmlExport::new("<p>x</p>", DEFAULT_TITLE);
        assert_eq!(export.filename, "Markdown Document.html");
    }

    #[test]
    fn test_pdf_defaults() {
        let request = PdfExportRequest::new("<p>x</p>", "Notes");
        assert_eq!(request.filename, "Notes.pdf");
        assert_eq!(request.options.margin_in, 1.0);
        assert_eq!(request.options.image_quality, 0.98);
        assert_eq!(request.options.raster_scale, 2.0);
        assert_eq!(request.options.format, PageFormat::Letter);
        assert_eq!(request.options.orientation, Orientation::Portrait);
    }
}
