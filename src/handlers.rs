//! HTTP route handlers for the board.
//!
//! Two routes: the board at its current page, and the page-selector
//! interaction. Both render the full document for whatever state the load
//! is in.

use crate::board::LoadState;
use crate::templates;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

fn render_state(state: &LoadState) -> String {
    match state {
        LoadState::Loading => templates::loading_html(),
        LoadState::Ready(board) => board.render(),
        LoadState::Failed(message) => templates::error_html(message),
    }
}

// ============================================================================
// Board Handler
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let board = state.board.read().await;
    Html(render_state(&board))
}

// ============================================================================
// Page-Selector Handler
// ============================================================================

/// A click on a page control: move the board to `page`, then render.
/// Before the load finishes (or after it fails) there is no page state to
/// move, so the current load state renders unchanged.
pub async fn select_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<usize>,
) -> Html<String> {
    let mut guard = state.board.write().await;
    if let LoadState::Ready(board) = &mut *guard {
        board.select_page(page);
    }
    Html(render_state(&guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NoteBoard;
    use crate::markdown::parse_note;

    #[test]
    fn test_loading_state_shows_placeholder() {
        let html = render_state(&LoadState::Loading);
        assert!(html.contains("Loading notes"));
        assert!(!html.contains(r#"<div class="note-block">"#));
    }

    #[test]
    fn test_failed_state_shows_single_error_and_no_cards() {
        let html = render_state(&LoadState::Failed(
            "Could not load a.md (status 404)".to_string(),
        ));
        assert!(html.contains("Failed to load notes"));
        assert!(html.contains("a.md"));
        assert!(html.contains("404"));
        assert!(!html.contains(r#"<div class="note-block">"#));
    }

    #[test]
    fn test_failed_state_escapes_the_message() {
        let html = render_state(&LoadState::Failed("<script>boom</script>".to_string()));
        assert!(html.contains("&lt;script&gt;boom&lt;/script&gt;"));
        assert!(!html.contains("<script>boom"));
    }

    #[test]
    fn test_ready_state_renders_cards() {
        let board = NoteBoard::new(vec![parse_note("Hello\n2024-01-01\nworld\n")]);
        let html = render_state(&LoadState::Ready(board));
        assert!(html.contains(r#"<div class="note-block">"#));
        assert!(html.contains("Hello"));
    }
}
