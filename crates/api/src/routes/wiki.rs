//! Route definitions for the wiki page resource.
//!
//! Registered under `/wiki/page`. Method choices (notably GET for delete)
//! are part of the historical API contract.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wiki;
use crate::state::AppState;

/// Wiki page routes, registered as `/wiki/page`.
///
/// ```text
/// POST /create      create_page
/// POST /edit        edit_page
/// GET  /delete      delete_page
/// GET  /get         get_page
/// GET  /list        list_pages
/// GET  /changelog   changelog
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(wiki::create_page))
        .route("/edit", post(wiki::edit_page))
        .route("/delete", get(wiki::delete_page))
        .route("/get", get(wiki::get_page))
        .route("/list", get(wiki::list_pages))
        .route("/changelog", get(wiki::changelog))
}
