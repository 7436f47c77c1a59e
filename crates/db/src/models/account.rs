//! Account entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wikkit_core::types::{DbId, EpochMillis};

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    /// Opaque bearer credential, a random numeric string. Issued once at
    /// creation and returned unchanged by every successful login.
    pub token: String,
    /// Authorization flag: only editor accounts may create/edit/delete pages.
    pub editor: bool,
    pub created_ms: EpochMillis,
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub username: String,
    pub token: String,
    pub editor: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            token: account.token,
            editor: account.editor,
        }
    }
}

/// DTO for creating a new account.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub password_hash: String,
    pub token: String,
}
