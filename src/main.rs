//! Markboard - a paginated board of Markdown notes.
//!
//! This is the main entry point for the board server. It binds the
//! listener, mounts the routes and the static notes directory, kicks off
//! the one-shot source load, and serves.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use url::Url;

use markboard::{handlers, loader, AppState, BIND_ADDR, NOTES_DIR, NOTE_FILES};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .expect("Failed to bind address");
    let addr = listener.local_addr().expect("Failed to read local address");

    let base_url = Url::parse(&format!("http://{}/", addr)).expect("Invalid base URL");
    let state = Arc::new(AppState::new(base_url));

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/page/{page}", get(handlers::select_page))
        .nest_service("/notes", ServeDir::new(NOTES_DIR))
        .with_state(state.clone());

    // The single load of the session. The listener is already bound, so
    // the fetches queue until serving starts; requests racing the load see
    // the loading placeholder.
    tokio::spawn(loader::load_into(state));

    println!("Markboard running at http://{}", addr);
    println!("Sources: {} configured", NOTE_FILES.len());

    axum::serve(listener, app).await.expect("Server error");
}
