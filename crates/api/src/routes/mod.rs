pub mod account;
pub mod health;
pub mod wiki;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v2` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /wiki/page/create      create page (POST, editor token)
/// /wiki/page/edit        edit page (POST, editor token)
/// /wiki/page/delete      delete page (GET, editor token)
/// /wiki/page/get         fetch page, optional download link (GET)
/// /wiki/page/list        page metadata listing (GET)
/// /wiki/page/changelog   full changelog (GET)
///
/// /acc/create            register, returns token (POST)
/// /acc/login             login, returns token (POST)
/// /acc/check             token validity probe (POST)
/// /acc/info              account info by token (POST)
/// /acc/delete            delete account by token (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/wiki/page", wiki::router())
        .nest("/acc", account::router())
}

/// Root route: `/` has never been served and answers with the
/// not-implemented envelope.
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(handlers::not_implemented))
}
