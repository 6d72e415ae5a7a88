//! HTML emission for the preview pane.
//!
//! Event-driven writer over the Markdown parser's event stream. The output
//! shapes are fixed contract for the preview stylesheet and the exporters:
//! `language-*` classed code blocks, `inline-code` spans, always-present
//! `title` attributes on links and images.

use std::collections::HashMap;

use pulldown_cmark::{
    Alignment, CodeBlockKind, CowStr, Event, Event::*, LinkType, Tag, TagEnd,
};
use pulldown_cmark_escape::{FmtWriter, StrWrite, escape_href, escape_html, escape_html_body_text};

enum TableState {
    Head,
    Body,
}

struct HtmlWriter<'a, I, W> {
    /// Iterator supplying events.
    iter: I,

    /// Writer to write to.
    writer: W,

    /// Whether or not the last write wrote a newline.
    end_newline: bool,

    /// Inside a fenced or indented code block; text gets code escaping.
    in_code_block: bool,

    table_state: TableState,
    table_alignments: Vec<Alignment>,
    table_cell_index: usize,
    numbers: HashMap<CowStr<'a>, usize>,
}

/// Escape code block content: `&`, `<`, `>`, `"`, `'`.
fn escape_code<W: StrWrite>(writer: &mut W, text: &str) -> Result<(), W::Error> {
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        let entity = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        writer.write_str(&text[start..i])?;
        writer.write_str(entity)?;
        start = i + ch.len_utf8();
    }
    writer.write_str(&text[start..])
}

impl<'a, I, W> HtmlWriter<'a, I, W>
where
    I: Iterator<Item = Event<'a>>,
    W: StrWrite,
{
    fn new(iter: I, writer: W) -> Self {
        Self {
            iter,
            writer,
            end_newline: true,
            in_code_block: false,
            table_state: TableState::Head,
            table_alignments: vec![],
            table_cell_index: 0,
            numbers: HashMap::new(),
        }
    }

    /// Writes a new line.
    #[inline]
    fn write_newline(&mut self) -> Result<(), W::Error> {
        self.end_newline = true;
        self.writer.write_str("\n")
    }

    /// Writes a buffer, and tracks whether or not a newline was written.
    #[inline]
    fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;

        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
        }
        Ok(())
    }

    fn run(mut self) -> Result<(), W::Error> {
        while let Some(event) = self.iter.next() {
            match event {
                Start(tag) => {
                    self.start_tag(tag)?;
                }
                End(tag) => {
                    self.end_tag(tag)?;
                }
                Text(text) => {
                    if self.in_code_block {
                        escape_code(&mut self.writer, &text)?;
                    } else {
                        escape_html_body_text(&mut self.writer, &text)?;
                    }
                    self.end_newline = text.ends_with('\n');
                }
                Code(text) => {
                    self.write("<code class=\"inline-code\">")?;
                    escape_html_body_text(&mut self.writer, &text)?;
                    self.write("</code>")?;
                }
                InlineMath(text) | DisplayMath(text) => {
                    // Math extensions are not enabled; emit as plain text.
                    escape_html_body_text(&mut self.writer, &text)?;
                }
                Html(html) | InlineHtml(html) => {
                    self.write(&html)?;
                }
                SoftBreak => {
                    self.write_newline()?;
                }
                HardBreak => {
                    self.write("<br>\n")?;
                }
                Rule => {
                    if self.end_newline {
                        self.write("<hr>\n")?;
                    } else {
                        self.write("\n<hr>\n")?;
                    }
                }
                FootnoteReference(name) => {
                    let len = self.numbers.len() + 1;
                    self.write("<sup class=\"footnote-reference\"><a href=\"#")?;
                    escape_html(&mut self.writer, &name)?;
                    self.write("\">")?;
                    let number = *self.numbers.entry(name).or_insert(len);
                    write!(&mut self.writer, "{}", number)?;
                    self.write("</a></sup>")?;
                }
                TaskListMarker(true) => {
                    self.write("<input disabled=\"\" type=\"checkbox\" checked=\"\"/>\n")?;
                }
                TaskListMarker(false) => {
                    self.write("<input disabled=\"\" type=\"checkbox\"/>\n")?;
                }
            }
        }
        Ok(())
    }

    /// Writes the start of an HTML tag.
    fn start_tag(&mut self, tag: Tag<'a>) -> Result<(), W::Error> {
        match tag {
            Tag::HtmlBlock => Ok(()),
            Tag::Paragraph => {
                if self.end_newline {
                    self.write("<p>")
                } else {
                    self.write("\n<p>")
                }
            }
            Tag::Heading { level, .. } => {
                if self.end_newline {
                    self.write("<")?;
                } else {
                    self.write("\n<")?;
                }
                write!(&mut self.writer, "{}", level)?;
                self.write(">")
            }
            Tag::Table(alignments) => {
                self.table_alignments = alignments;
                self.write("<table>")
            }
            Tag::TableHead => {
                self.table_state = TableState::Head;
                self.table_cell_index = 0;
                self.write("<thead><tr>")
            }
            Tag::TableRow => {
                self.table_cell_index = 0;
                self.write("<tr>")
            }
            Tag::TableCell => {
                match self.table_state {
                    TableState::Head => {
                        self.write("<th")?;
                    }
                    TableState::Body => {
                        self.write("<td")?;
                    }
                }
                match self.table_alignments.get(self.table_cell_index) {
                    Some(&Alignment::Left) => self.write(" style=\"text-align: left\">"),
                    Some(&Alignment::Center) => self.write(" style=\"text-align: center\">"),
                    Some(&Alignment::Right) => self.write(" style=\"text-align: right\">"),
                    _ => self.write(">"),
                }
            }
            Tag::BlockQuote(_) => {
                if self.end_newline {
                    self.write("<blockquote>\n")
                } else {
                    self.write("\n<blockquote>\n")
                }
            }
            Tag::CodeBlock(info) => {
                if !self.end_newline {
                    self.write_newline()?;
                }
                self.in_code_block = true;
                let lang = match &info {
                    CodeBlockKind::Fenced(info) => {
                        let lang = info.split(' ').next().unwrap_or("");
                        if lang.is_empty() { "text" } else { lang }
                    }
                    CodeBlockKind::Indented => "text",
                };
                self.write("<pre class=\"language-")?;
                escape_html(&mut self.writer, lang)?;
                self.write("\"><code class=\"language-")?;
                escape_html(&mut self.writer, lang)?;
                self.write("\">")
            }
            Tag::List(Some(1)) => {
                if self.end_newline {
                    self.write("<ol>\n")
                } else {
                    self.write("\n<ol>\n")
                }
            }
            Tag::List(Some(start)) => {
                if self.end_newline {
                    self.write("<ol start=\"")?;
                } else {
                    self.write("\n<ol start=\"")?;
                }
                write!(&mut self.writer, "{}", start)?;
                self.write("\">\n")
            }
            Tag::List(None) => {
                if self.end_newline {
                    self.write("<ul>\n")
                } else {
                    self.write("\n<ul>\n")
                }
            }
            Tag::Item => {
                if self.end_newline {
                    self.write("<li>")
                } else {
                    self.write("\n<li>")
                }
            }
            Tag::DefinitionList => {
                if self.end_newline {
                    self.write("<dl>\n")
                } else {
                    self.write("\n<dl>\n")
                }
            }
            Tag::DefinitionListTitle => self.write("<dt>"),
            Tag::DefinitionListDefinition => self.write("<dd>"),
            Tag::Subscript => self.write("<sub>"),
            Tag::Superscript => self.write("<sup>"),
            Tag::Emphasis => self.write("<em>"),
            Tag::Strong => self.write("<strong>"),
            Tag::Strikethrough => self.write("<del>"),
            Tag::Link {
                link_type: LinkType::Email,
                dest_url,
                title,
                id: _,
            } => {
                self.write("<a href=\"mailto:")?;
                escape_href(&mut self.writer, &dest_url)?;
                self.write("\" title=\"")?;
                escape_html(&mut self.writer, &title)?;
                self.write("\">")
            }
            Tag::Link {
                link_type: _,
                dest_url,
                title,
                id: _,
            } => {
                self.write("<a href=\"")?;
                escape_href(&mut self.writer, &dest_url)?;
                self.write("\" title=\"")?;
                escape_html(&mut self.writer, &title)?;
                self.write("\">")
            }
            Tag::Image {
                link_type: _,
                dest_url,
                title,
                id: _,
            } => {
                self.write("<img src=\"")?;
                escape_href(&mut self.writer, &dest_url)?;
                self.write("\" alt=\"")?;
                self.raw_text()?;
                self.write("\" title=\"")?;
                escape_html(&mut self.writer, &title)?;
                self.write("\">")
            }
            Tag::FootnoteDefinition(name) => {
                if self.end_newline {
                    self.write("<div class=\"footnote-definition\" id=\"")?;
                } else {
                    self.write("\n<div class=\"footnote-definition\" id=\"")?;
                }
                escape_html(&mut self.writer, &name)?;
                self.write("\"><sup class=\"footnote-definition-label\">")?;
                let len = self.numbers.len() + 1;
                let number = *self.numbers.entry(name).or_insert(len);
                write!(&mut self.writer, "{}", number)?;
                self.write("</sup>")
            }
            Tag::MetadataBlock(_) => Ok(()),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) -> Result<(), W::Error> {
        match tag {
            TagEnd::HtmlBlock => {}
            TagEnd::Paragraph => {
                self.write("</p>\n")?;
            }
            TagEnd::Heading(level) => {
                self.write("</")?;
                write!(&mut self.writer, "{}", level)?;
                self.write(">\n")?;
            }
            TagEnd::Table => {
                self.write("</tbody></table>\n")?;
            }
            TagEnd::TableHead => {
                self.write("</tr></thead><tbody>\n")?;
                self.table_state = TableState::Body;
            }
            TagEnd::TableRow => {
                self.write("</tr>\n")?;
            }
            TagEnd::TableCell => {
                match self.table_state {
                    TableState::Head => {
                        self.write("</th>")?;
                    }
                    TableState::Body => {
                        self.write("</td>")?;
                    }
                }
                self.table_cell_index += 1;
            }
            TagEnd::BlockQuote(_) => {
                self.write("</blockquote>\n")?;
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.write("</code></pre>\n")?;
            }
            TagEnd::List(true) => {
                self.write("</ol>\n")?;
            }
            TagEnd::List(false) => {
                self.write("</ul>\n")?;
            }
            TagEnd::Item => {
                self.write("</li>\n")?;
            }
            TagEnd::DefinitionList => {
                self.write("</dl>\n")?;
            }
            TagEnd::DefinitionListTitle => {
                self.write("</dt>\n")?;
            }
            TagEnd::DefinitionListDefinition => {
                self.write("</dd>\n")?;
            }
            TagEnd::Emphasis => {
                self.write("</em>")?;
            }
            TagEnd::Superscript => {
                self.write("</sup>")?;
            }
            TagEnd::Subscript => {
                self.write("</sub>")?;
            }
            TagEnd::Strong => {
                self.write("</strong>")?;
            }
            TagEnd::Strikethrough => {
                self.write("</del>")?;
            }
            TagEnd::Link => {
                self.write("</a>")?;
            }
            TagEnd::Image => (), // handled in start
            TagEnd::FootnoteDefinition => {
                self.write("</div>\n")?;
            }
            TagEnd::MetadataBlock(_) => {}
        }
        Ok(())
    }

    // run raw text, consuming end tag; used for image alt attributes
    fn raw_text(&mut self) -> Result<(), W::Error> {
        let mut nest = 0;
        while let Some(event) = self.iter.next() {
            match event {
                Start(_) => nest += 1,
                End(_) => {
                    if nest == 0 {
                        break;
                    }
                    nest -= 1;
                }
                Html(_) => {}
                InlineHtml(text) | Code(text) | Text(text) | InlineMath(text)
                | DisplayMath(text) => {
                    // The output of this function is used in the `alt` attribute.
                    escape_html(&mut self.writer, &text)?;
                    self.end_newline = text.ends_with('\n');
                }
                SoftBreak | HardBreak | Rule => {
                    self.write(" ")?;
                }
                FootnoteReference(name) => {
                    let len = self.numbers.len() + 1;
                    let number = *self.numbers.entry(name).or_insert(len);
                    write!(&mut self.writer, "[{}]", number)?;
                }
                TaskListMarker(true) => self.write("[x]")?,
                TaskListMarker(false) => self.write("[ ]")?,
            }
        }
        Ok(())
    }
}

/// Iterate over an `Iterator` of `Event`s, generate HTML for each `Event`,
/// and push it to a `String`.
pub fn push_html<'a, I>(s: &mut String, iter: I)
where
    I: Iterator<Item = Event<'a>>,
{
    write_html_fmt(s, iter).unwrap()
}

/// Iterate over an `Iterator` of `Event`s, generate HTML for each `Event`,
/// and write it into a Unicode-accepting buffer or stream.
pub fn write_html_fmt<'a, I, W>(writer: W, iter: I) -> core::fmt::Result
where
    I: Iterator<Item = Event<'a>>,
    W: core::fmt::Write,
{
    HtmlWriter::new(iter, FmtWriter(writer)).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Options, Parser};

    fn render(text: &str) -> String {
        let mut opts = Options::empty();
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_STRIKETHROUGH);
        opts.insert(Options::ENABLE_TASKLISTS);
        let mut out = String::new();
        push_html(&mut out, Parser::new_ext(text, opts));
        out
    }

    #[test]
    fn test_heading_and_paragraph() {
        let html = render("# Hi\n\nhello");
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn test_emphasis() {
        let html = render("**bold** and *ok* and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>ok</em>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_fenced_code_block_with_language() {
        let html = render("```rust\nlet x = 1;\n```");
        assert!(html.contains("<pre class=\"language-rust\"><code class=\"language-rust\">"));
        assert!(html.contains("let x = 1;"));
        assert!(html.contains("</code></pre>"));
    }

    #[test]
    fn test_fenced_code_block_without_language() {
        let html = render("```\nplain\n```");
        assert!(html.contains("<pre class=\"language-text\"><code class=\"language-text\">"));
    }

    #[test]
    fn test_code_block_escapes_quotes() {
        let html = render("```\na < b && c > \"d\" 'e'\n```");
        assert!(html.contains("a &lt; b &amp;&amp; c &gt; &quot;d&quot; &#39;e&#39;"));
    }

    #[test]
    fn test_inline_code() {
        let html = render("use `a<b>` here");
        assert!(html.contains("<code class=\"inline-code\">a&lt;b&gt;</code>"));
    }

    #[test]
    fn test_inline_code_does_not_escape_quotes() {
        let html = render("`\"x\"`");
        assert!(html.contains("<code class=\"inline-code\">\"x\"</code>"));
    }

    #[test]
    fn test_unordered_list() {
        let html = render("- one\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_ordered_list_start_one_has_no_attribute() {
        let html = render("1. one\n2. two");
        assert!(html.contains("<ol>"));
        assert!(!html.contains("start="));
    }

    #[test]
    fn test_ordered_list_custom_start() {
        let html = render("3. three\n4. four");
        assert!(html.contains("<ol start=\"3\">"));
    }

    #[test]
    fn test_task_list() {
        let html = render("- [x] done\n- [ ] todo");
        assert!(html.contains("<input disabled=\"\" type=\"checkbox\" checked=\"\"/>"));
        assert!(html.contains("<input disabled=\"\" type=\"checkbox\"/>"));
    }

    #[test]
    fn test_table_with_alignment() {
        let html = render("| a | b |\n|:--|--:|\n| 1 | 2 |");
        assert!(html.contains("<table><thead><tr>"));
        assert!(html.contains("<th style=\"text-align: left\">a</th>"));
        assert!(html.contains("<th style=\"text-align: right\">b</th>"));
        assert!(html.contains("<td style=\"text-align: left\">1</td>"));
        assert!(html.contains("</tbody></table>"));
    }

    #[test]
    fn test_link_with_and_without_title() {
        let html = render("[x](http://a \"t\")");
        assert!(html.contains("<a href=\"http://a\" title=\"t\">x</a>"));

        let html = render("[x](http://a)");
        assert!(html.contains("<a href=\"http://a\" title=\"\">x</a>"));
    }

    #[test]
    fn test_image_alt_and_empty_title() {
        let html = render("![alt text](http://img)");
        assert!(html.contains("<img src=\"http://img\" alt=\"alt text\" title=\"\">"));
    }

    #[test]
    fn test_blockquote_and_rule() {
        let html = render("> quoted\n\n---");
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("</blockquote>"));
        assert!(html.contains("<hr>"));
        assert!(!html.contains("<hr />"));
    }

    #[test]
    fn test_hard_break() {
        let html = render("a  \nb");
        assert!(html.contains("<br>\n"));
    }
}
