//! Rendering configuration.
//!
//! The configuration is an explicit value passed into every render call.
//! There is no process-wide renderer state to mutate at startup.

use pulldown_cmark::Options;

/// Parser and renderer configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Treat single newlines as hard line breaks (`<br>`), the way the
    /// editor's preview pane does.
    pub hard_line_breaks: bool,

    /// Enable GitHub-flavored extensions: tables, task lists, strikethrough.
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hard_line_breaks: true,
            gfm: true,
        }
    }
}

impl RenderOptions {
    /// Parser option flags for these settings.
    ///
    /// Hard line breaks are not a parser concern; they are applied as an
    /// event transform during rendering.
    pub fn parser_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.gfm {
            opts.insert(Options::ENABLE_TABLES);
            opts.insert(Options::ENABLE_STRIKETHROUGH);
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert!(opts.hard_line_breaks);
        assert!(opts.gfm);
    }

    #[test]
    fn test_parser_options_gfm() {
        let opts = RenderOptions::default();
        let flags = opts.parser_options();
        assert!(flags.contains(Options::ENABLE_TABLES));
        assert!(flags.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(flags.contains(Options::ENABLE_TASKLISTS));
    }

    #[test]
    fn test_parser_options_plain() {
        let opts = RenderOptions {
            gfm: false,
            ..Default::default()
        };
        assert!(opts.parser_options().is_empty());
    }
}
