//! Route definitions for the account resource.
//!
//! Registered under `/acc`. The check/info/delete endpoints take the raw
//! token string as the POST body.

use axum::routing::post;
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Account routes, registered as `/acc`.
///
/// ```text
/// POST /create   create
/// POST /login    login
/// POST /check    check
/// POST /info     info
/// POST /delete   delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(account::create))
        .route("/login", post(account::login))
        .route("/check", post(account::check))
        .route("/info", post(account::info))
        .route("/delete", post(account::delete))
}
