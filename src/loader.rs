//! Concurrent loading of the configured note sources.
//!
//! All sources are fetched at once and joined all-or-nothing: one bad
//! source fails the whole batch and the board shows a single error message
//! instead of a partial collection. Results are recombined in source-list
//! order, never in completion order.

use crate::board::{LoadState, NoteBoard};
use crate::markdown::parse_note;
use crate::models::Note;
use crate::AppState;
use futures_util::future::try_join_all;
use reqwest::StatusCode;
use std::sync::Arc;
use url::Url;

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

// ============================================================================
// Errors
// ============================================================================

/// Why a load failed. Always names the offending source.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// The source path could not be resolved against the base URL
    BadSource { source: String, message: String },
    /// The server answered with a non-success status
    BadStatus { source: String, status: StatusCode },
    /// The request or body read failed in transit
    Transport { source: String, message: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::BadSource { source, message } => {
                write!(f, "Invalid source {}: {}", source, message)
            }
            LoadError::BadStatus { source, status } => {
                write!(f, "Could not load {} (status {})", source, status)
            }
            LoadError::Transport { source, message } => {
                write!(f, "Could not load {}: {}", source, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

// ============================================================================
// Fetching
// ============================================================================

/// Fetch one source, resolved against `base`, as text.
pub async fn fetch_source(
    client: &reqwest::Client,
    base: &Url,
    source: &str,
) -> Result<String, LoadError> {
    let url = base.join(source).map_err(|e| LoadError::BadSource {
        source: source.to_string(),
        message: e.to_string(),
    })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport {
            source: source.to_string(),
            message: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(LoadError::BadStatus {
            source: source.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|e| LoadError::Transport {
        source: source.to_string(),
        message: e.to_string(),
    })
}

/// Fetch every source concurrently and build the note collection.
///
/// Untitled notes are dropped. The collection keeps source-list order
/// unless [`crate::SORT_NOTES_BY_TIME`] is enabled.
pub async fn load_all_notes(
    client: &reqwest::Client,
    base: &Url,
    sources: &[&str],
) -> Result<Vec<Note>, LoadError> {
    let fetches = sources.iter().map(|source| fetch_source(client, base, source));
    let texts = try_join_all(fetches).await?;

    let mut notes: Vec<Note> = texts
        .iter()
        .map(|raw| parse_note(raw))
        .filter(|note| !note.is_untitled())
        .collect();

    if crate::SORT_NOTES_BY_TIME {
        sort_notes_by_time(&mut notes);
    }

    Ok(notes)
}

/// Order notes newest first by parsed time label. Labels that do not parse
/// sort after all dated notes; ties keep their source order.
pub fn sort_notes_by_time(notes: &mut [Note]) {
    notes.sort_by_key(|note| std::cmp::Reverse(note.parsed_time()));
}

// ============================================================================
// Startup Load
// ============================================================================

/// The one-shot load of the session: fetch everything, then swap the shared
/// state to the outcome. Requests that arrive mid-flight see the loading
/// placeholder.
pub async fn load_into(state: Arc<AppState>) {
    let client = reqwest::Client::new();
    let outcome = load_all_notes(&client, &state.base_url, crate::NOTE_FILES).await;

    let mut board = state.board.write().await;
    match outcome {
        Ok(notes) => *board = LoadState::Ready(NoteBoard::new(notes)),
        Err(e) => {
            eprintln!("Failed to load notes: {}", e);
            *board = LoadState::Failed(e.to_string());
        }
    }
}
