//! Repository for the `accounts` table.

use sqlx::PgPool;
use wikkit_core::types::now_millis;

use crate::models::account::{Account, CreateAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, token, editor, created_ms";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account if the username is free.
    ///
    /// The uniqueness check and the insert are a single statement
    /// (`ON CONFLICT DO NOTHING`), so two concurrent registrations of the
    /// same username cannot both succeed. Returns `None` when the username
    /// is already taken.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateAccount,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (username, password_hash, token, editor, created_ms)
             VALUES ($1, $2, $3, FALSE, $4)
             ON CONFLICT (username) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.token)
            .bind(now_millis())
            .fetch_optional(pool)
            .await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE username = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by its bearer token.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE token = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// List all accounts ordered by creation time.
    pub async fn list(pool: &PgPool) -> Result<Vec<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY id");
        sqlx::query_as::<_, Account>(&query).fetch_all(pool).await
    }

    /// Delete an account by its token. Returns `true` if a row was removed.
    pub async fn delete_by_token(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
