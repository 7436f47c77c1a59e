//! Token-based editor authorization.
//!
//! Page mutations carry the bearer token as a query parameter rather than an
//! `Authorization` header, so this is a plain async helper instead of an
//! extractor.

use sqlx::PgPool;
use wikkit_core::error::CoreError;
use wikkit_db::models::account::Account;
use wikkit_db::repositories::AccountRepo;

use crate::error::{AppError, AppResult};

/// Resolve a token to an account, requiring the editor flag.
///
/// Fails with `Unauthorized` when the token is absent or matches no
/// account, and `Forbidden` when the account is not an editor.
pub async fn require_editor(pool: &PgPool, token: Option<&str>) -> AppResult<Account> {
    let account = lookup_token(pool, token).await?;
    if !account.editor {
        return Err(AppError::Core(CoreError::Forbidden(
            "You cant edit this!".into(),
        )));
    }
    Ok(account)
}

/// Resolve a token to an account without the editor requirement.
pub async fn lookup_token(pool: &PgPool, token: Option<&str>) -> AppResult<Account> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Missing token!".into())))?;

    AccountRepo::find_by_token(pool, token)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid token!".into())))
}
