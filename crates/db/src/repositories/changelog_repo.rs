//! Repository for the append-only `changelog` table.
//!
//! Entries are only ever inserted and listed; there is deliberately no
//! update or delete operation here.

use sqlx::PgPool;
use wikkit_core::types::now_millis;

use crate::models::changelog::ChangeEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, when_ms, what";

/// Provides append and list operations for the changelog.
pub struct ChangelogRepo;

impl ChangelogRepo {
    /// Append an entry timestamped with the current time.
    pub async fn append(pool: &PgPool, what: &str) -> Result<ChangeEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO changelog (when_ms, what)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChangeEntry>(&query)
            .bind(now_millis())
            .bind(what)
            .fetch_one(pool)
            .await
    }

    /// List all entries sorted ascending by timestamp.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChangeEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM changelog ORDER BY when_ms, id");
        sqlx::query_as::<_, ChangeEntry>(&query).fetch_all(pool).await
    }
}
