//! The board controller: loaded notes plus the selected page.
//!
//! Page state lives here rather than in module-level globals so rendering
//! and pagination stay pure functions of the controller's fields.

use crate::models::Note;
use crate::pager::{self, NOTES_PER_PAGE};
use crate::templates;

// ============================================================================
// Load Lifecycle
// ============================================================================

/// Lifecycle of the single startup load.
///
/// There is no reload: the state moves from `Loading` to exactly one of
/// `Ready` or `Failed` and stays there for the life of the process.
pub enum LoadState {
    Loading,
    Ready(NoteBoard),
    Failed(String),
}

// ============================================================================
// Note Board
// ============================================================================

/// The loaded note collection and the 1-indexed current page.
///
/// The page number only changes through [`NoteBoard::select_page`], i.e.
/// through a page-selector interaction.
pub struct NoteBoard {
    notes: Vec<Note>,
    current_page: usize,
}

impl NoteBoard {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            current_page: 1,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.notes.len(), NOTES_PER_PAGE)
    }

    /// Select a page. The selector only emits pages in `1..=total_pages`,
    /// but hand-typed URLs can carry anything; out-of-range pages simply
    /// render an empty grid.
    pub fn select_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// The notes visible on the current page.
    pub fn visible_notes(&self) -> &[Note] {
        pager::page_slice(&self.notes, self.current_page, NOTES_PER_PAGE)
    }

    /// Render the full page for the current state of the board.
    pub fn render(&self) -> String {
        templates::render_board(&self.notes, self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_note;

    fn board_with(count: usize) -> NoteBoard {
        let notes = (1..=count)
            .map(|i| parse_note(&format!("Note {i}\n2024-01-{i:02}\nbody {i}\n")))
            .collect();
        NoteBoard::new(notes)
    }

    #[test]
    fn test_initial_page_is_one() {
        let board = board_with(6);
        assert_eq!(board.current_page(), 1);
        assert_eq!(board.total_pages(), 2);
    }

    #[test]
    fn test_select_page_changes_visible_window() {
        let mut board = board_with(6);
        assert_eq!(board.visible_notes().len(), 5);
        assert_eq!(board.visible_notes()[0].title, "Note 1");

        board.select_page(2);
        assert_eq!(board.current_page(), 2);
        assert_eq!(board.visible_notes().len(), 1);
        assert_eq!(board.visible_notes()[0].title, "Note 6");
    }

    #[test]
    fn test_select_page_clamps_zero_to_one() {
        let mut board = board_with(3);
        board.select_page(0);
        assert_eq!(board.current_page(), 1);
        assert_eq!(board.visible_notes().len(), 3);
    }

    #[test]
    fn test_out_of_range_page_shows_nothing() {
        let mut board = board_with(3);
        board.select_page(7);
        assert!(board.visible_notes().is_empty());
    }

    #[test]
    fn test_empty_board() {
        let board = board_with(0);
        assert_eq!(board.total_pages(), 0);
        assert!(board.visible_notes().is_empty());
    }
}
