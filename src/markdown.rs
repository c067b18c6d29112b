//! Markdown parsing for note sources.
//!
//! A note source is a plain Markdown document with a fixed leading shape:
//! the first non-blank line is the display title, the second the display
//! time label, and everything after that is the card body. The body goes
//! through pulldown-cmark with GFM syntax enabled; malformed Markdown is
//! rendered best-effort, never rejected.

use crate::models::{Note, TrustedHtml};
use pulldown_cmark::{html, Event, Options, Parser};

/// Placeholder title for a source with no content lines. Notes carrying it
/// are dropped from the collection.
pub const UNTITLED_TITLE: &str = "Untitled note";

/// Placeholder time label for a source with fewer than two content lines.
pub const UNKNOWN_TIME: &str = "Unknown time";

// ============================================================================
// Markdown Rendering
// ============================================================================

/// Render Markdown to HTML with GFM tables, strikethrough, and task lists,
/// and with soft line breaks promoted to hard breaks.
pub fn render_markdown(content: &str) -> TrustedHtml {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Blank lines are discarded before the body reaches the renderer, so a
    // single newline is the author's paragraph break. Promote it.
    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    TrustedHtml::from_renderer(html_output)
}

// ============================================================================
// Note Parsing
// ============================================================================

/// Strip leading `#` heading markup and whitespace, plus trailing whitespace.
fn strip_markup(line: &str) -> String {
    line.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end()
        .to_string()
}

/// Parse one raw source document into a [`Note`].
///
/// Whitespace-only lines are discarded throughout. Missing title or time
/// lines fall back to the placeholders rather than failing.
pub fn parse_note(raw: &str) -> Note {
    let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();

    let title = match lines.first() {
        Some(line) => strip_markup(line),
        None => UNTITLED_TITLE.to_string(),
    };
    let time = match lines.get(1) {
        Some(line) => strip_markup(line),
        None => UNKNOWN_TIME.to_string(),
    };

    let body = lines.get(2..).unwrap_or(&[]).join("\n");

    Note {
        title,
        time,
        content_html: render_markdown(&body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_time() {
        let note = parse_note("# Shopping list\n2024-03-01\nMilk and eggs.\n");
        assert_eq!(note.title, "Shopping list");
        assert_eq!(note.time, "2024-03-01");
        assert!(note.content_html.as_str().contains("Milk and eggs."));
    }

    #[test]
    fn test_parse_strips_heading_markup() {
        let note = parse_note("### # Deep heading\n## 10:30 am\nbody\n");
        assert_eq!(note.title, "Deep heading");
        assert_eq!(note.time, "10:30 am");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        // Blank lines do not count toward title/time positions.
        let note = parse_note("\n   \nTitle line\n\n  \nTime line\n\nBody here\n");
        assert_eq!(note.title, "Title line");
        assert_eq!(note.time, "Time line");
        assert!(note.content_html.as_str().contains("Body here"));
    }

    #[test]
    fn test_parse_body_starts_at_third_line() {
        let note = parse_note("Title\nTime\nThird\nFourth\n");
        let html = note.content_html.as_str();
        assert!(!html.contains("Title"));
        assert!(!html.contains("Time"));
        assert!(html.contains("Third"));
        assert!(html.contains("Fourth"));
    }

    #[test]
    fn test_parse_empty_input_yields_placeholders() {
        let note = parse_note("");
        assert_eq!(note.title, UNTITLED_TITLE);
        assert_eq!(note.time, UNKNOWN_TIME);
        assert_eq!(note.content_html.as_str(), "");
        assert!(note.is_untitled());
    }

    #[test]
    fn test_parse_blank_only_input_yields_placeholders() {
        let note = parse_note("   \n\n \t \n");
        assert!(note.is_untitled());
        assert_eq!(note.time, UNKNOWN_TIME);
    }

    #[test]
    fn test_parse_single_line_gets_time_placeholder() {
        let note = parse_note("Only a title\n");
        assert_eq!(note.title, "Only a title");
        assert_eq!(note.time, UNKNOWN_TIME);
        assert_eq!(note.content_html.as_str(), "");
    }

    #[test]
    fn test_render_soft_breaks_become_hard_breaks() {
        let html = render_markdown("first line\nsecond line");
        assert!(html.as_str().contains("<br"));
    }

    #[test]
    fn test_render_gfm_table() {
        let html = render_markdown("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.as_str().contains("<table>"));
    }

    #[test]
    fn test_render_gfm_strikethrough_and_tasklist() {
        let html = render_markdown("~~gone~~\n\n- [x] done");
        assert!(html.as_str().contains("<del>"));
        assert!(html.as_str().contains("checkbox"));
    }

    #[test]
    fn test_render_malformed_markdown_degrades() {
        // Unbalanced markup renders as text rather than erroring.
        let html = render_markdown("**unclosed [link( ~~");
        assert!(!html.as_str().is_empty());
    }
}
