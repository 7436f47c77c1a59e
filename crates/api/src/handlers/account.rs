//! Handlers for the `/acc` resource (create, login, check, info, delete).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wikkit_core::error::CoreError;
use wikkit_core::token::generate_token;
use wikkit_db::models::account::{AccountResponse, CreateAccount};
use wikkit_db::repositories::AccountRepo;

use crate::auth::editor::lookup_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /acc/create` and `POST /acc/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token response returned by account creation and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v2/acc/create
///
/// Register a new account. The password is hashed with Argon2id, the bearer
/// token is a fresh random numeric string, and the insert is atomic: two
/// concurrent registrations of the same username cannot both succeed.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Credentials>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateAccount {
        username: input.username,
        password_hash,
        token: generate_token(),
    };

    let account = AccountRepo::create_if_absent(&state.pool, &create)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict("User already exsists!".into())))?;

    tracing::info!(username = %account.username, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: account.token,
        }),
    ))
}

/// POST /api/v2/acc/login
///
/// Authenticate with username + password. Returns the token issued at
/// account creation. Unknown usernames and wrong passwords fail with the
/// same message so the endpoint does not reveal which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<Credentials>,
) -> AppResult<Json<TokenResponse>> {
    let account = AccountRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid password!".into())))?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password!".into(),
        )));
    }

    tracing::info!(username = %account.username, "Account login");

    Ok(Json(TokenResponse {
        token: account.token,
    }))
}

/// POST /api/v2/acc/check
///
/// Lightweight session-validity probe: body is the raw token string, the
/// response is `true` iff some account holds it. Never errors on unknown
/// tokens.
pub async fn check(State(state): State<AppState>, body: String) -> AppResult<Json<bool>> {
    let token = body.trim();
    if token.is_empty() {
        return Ok(Json(false));
    }
    let exists = AccountRepo::find_by_token(&state.pool, token).await?.is_some();
    Ok(Json(exists))
}

/// POST /api/v2/acc/info
///
/// Resolve the raw token body to the owning account. The password hash is
/// never serialized.
pub async fn info(State(state): State<AppState>, body: String) -> AppResult<Json<AccountResponse>> {
    let account = lookup_token(&state.pool, Some(body.trim())).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// POST /api/v2/acc/delete
///
/// Delete the account owning the raw token body. Returns `true` on success.
pub async fn delete(State(state): State<AppState>, body: String) -> AppResult<Json<bool>> {
    let account = lookup_token(&state.pool, Some(body.trim())).await?;
    AccountRepo::delete_by_token(&state.pool, &account.token).await?;

    tracing::info!(username = %account.username, "Account deleted");

    Ok(Json(true))
}
