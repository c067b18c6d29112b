//! HTML templates and styling.
//!
//! All page HTML is generated here: the base document with its two owned
//! containers (note cards and page-selector), the per-note card blocks, and
//! the loading/error/empty states. Both containers are rebuilt wholesale on
//! every render.

use crate::models::Note;
use crate::pager::{page_slice, total_pages, NOTES_PER_PAGE};

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
:root {
    --bg: #f0f2f5;
    --card-bg: #ffffff;
    --fg: #333333;
    --muted: #666666;
    --faint: #999999;
    --border: #e0e0e0;
    --accent: #4a76a8;
    --error: #c0392b;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 720px;
    margin: 0 auto;
    padding: 1.5rem 1rem;
}

.status { text-align: center; color: var(--muted); padding: 2rem 0; }
.status.error { color: var(--error); }

.note-block {
    background: var(--card-bg);
    border-radius: 12px;
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
    padding: 1.25rem 1.5rem;
    margin-bottom: 1.25rem;
}

.note-title { font-size: 1.15rem; font-weight: 600; }

.note-time { font-size: 0.8rem; color: var(--faint); }

.note-content { margin-top: 0.75rem; }
.note-content pre {
    background: var(--bg);
    padding: 0.75rem;
    overflow-x: auto;
    border-radius: 6px;
    margin: 0.75rem 0;
}
.note-content code { font-family: "SF Mono", "Consolas", "Liberation Mono", monospace; font-size: 0.9em; }
.note-content table { border-collapse: collapse; margin: 0.75rem 0; }
.note-content th, .note-content td { border: 1px solid var(--border); padding: 0.3rem 0.6rem; }
.note-content blockquote {
    border-left: 3px solid var(--border);
    margin: 0.75rem 0;
    padding-left: 0.75rem;
    color: var(--muted);
}
.note-content ul, .note-content ol { margin: 0.5rem 0; padding-left: 1.5rem; }

.pagination { display: flex; justify-content: center; gap: 0.5rem; padding: 1rem 0 2rem; }

.page-btn {
    display: inline-block;
    min-width: 2.2rem;
    padding: 0.35rem 0.6rem;
    text-align: center;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card-bg);
    color: var(--fg);
    text-decoration: none;
    font-size: 0.9rem;
}
.page-btn:hover { border-color: var(--accent); }
.page-btn.active {
    background: var(--accent);
    border-color: var(--accent);
    color: #ffffff;
}
"#;

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Base Document
// ============================================================================

/// The full page: one container for note cards, one for the page-selector.
pub fn base_html(cards: &str, controls: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body id="top">
    <div class="container">
        <div id="notes-container">
            {cards}
        </div>
        <div id="pagination" class="pagination">
            {controls}
        </div>
    </div>
</body>
</html>"#,
        title = html_escape(crate::BOARD_TITLE),
    )
}

// ============================================================================
// Board States
// ============================================================================

pub fn loading_html() -> String {
    base_html(r#"<p class="status">Loading notes...</p>"#, "")
}

pub fn error_html(message: &str) -> String {
    let cards = format!(
        r#"<p class="status error">Failed to load notes: {}</p>"#,
        html_escape(message)
    );
    base_html(&cards, "")
}

// ============================================================================
// Note Cards
// ============================================================================

/// One note as a card block. Title and time are escaped text; the body is
/// already-rendered HTML and goes in raw.
pub fn note_card(note: &Note) -> String {
    format!(
        r#"<div class="note-block">
    <div class="note-title">{title}</div>
    <span class="note-time">{time}</span>
    <div class="note-content">{content}</div>
</div>"#,
        title = html_escape(&note.title),
        time = html_escape(&note.time),
        content = note.content_html.as_str(),
    )
}

// ============================================================================
// Page-Selector Controls
// ============================================================================

/// One link per page, the current one marked active. Collapses to nothing
/// when a single page (or none) would be shown.
pub fn page_controls(current_page: usize, total: usize) -> String {
    if total <= 1 {
        return String::new();
    }

    let mut controls = String::new();
    for page in 1..=total {
        let class = if page == current_page {
            "page-btn active"
        } else {
            "page-btn"
        };
        controls.push_str(&format!(
            r##"<a class="{class}" href="/page/{page}#top">{page}</a>"##
        ));
    }
    controls
}

// ============================================================================
// Board Rendering
// ============================================================================

/// Render the board page: a pure function of the collection and the page
/// number, so the same inputs always produce the same document.
pub fn render_board(notes: &[Note], page: usize) -> String {
    let visible = page_slice(notes, page, NOTES_PER_PAGE);

    if visible.is_empty() && page == 1 {
        return base_html(r#"<p class="status">No notes here yet!</p>"#, "");
    }

    let cards: String = visible.iter().map(note_card).collect();
    let controls = page_controls(page, total_pages(notes.len(), NOTES_PER_PAGE));
    base_html(&cards, &controls)
}
