//! Markboard library - re-exports for testing and external use.
//!
//! A paginated board of Markdown notes: a fixed list of documents is
//! fetched once at startup, parsed into title/time/body cards, and served
//! as a web page. The application is organized into the following modules:
//!
//! - `models`: note and trusted-HTML data types
//! - `markdown`: source parsing and GFM rendering
//! - `loader`: the concurrent startup fetch
//! - `pager`: fixed-size page windowing
//! - `board`: the collection + page-state controller
//! - `templates`: HTML generation
//! - `handlers`: HTTP route handlers

use tokio::sync::RwLock;
use url::Url;

pub mod board;
pub mod handlers;
pub mod loader;
pub mod markdown;
pub mod models;
pub mod pager;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

/// The documents shown on the board, resolved against the server's own
/// address. Listed order is display order.
pub const NOTE_FILES: &[&str] = &[
    "notes/welcome.md",
    "notes/reading-list.md",
    "notes/week-plan.md",
];

/// Directory of bundled note sources, mounted at `/notes`.
pub const NOTES_DIR: &str = "notes";

pub const BIND_ADDR: &str = "127.0.0.1:3000";

pub const BOARD_TITLE: &str = "Markboard";

/// Order the board by parsed time label (newest first) instead of
/// source-list order.
pub const SORT_NOTES_BY_TIME: bool = false;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub base_url: Url,
    pub board: RwLock<board::LoadState>,
}

impl AppState {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            board: RwLock::new(board::LoadState::Loading),
        }
    }
}

// Re-export commonly used types
pub use board::{LoadState, NoteBoard};
pub use loader::{fetch_source, load_all_notes, load_into, sort_notes_by_time, LoadError};
pub use markdown::{parse_note, render_markdown, UNKNOWN_TIME, UNTITLED_TITLE};
pub use models::{Note, TrustedHtml};
pub use pager::{page_slice, total_pages, NOTES_PER_PAGE};
pub use templates::{base_html, html_escape, note_card, page_controls, render_board, STYLE};
