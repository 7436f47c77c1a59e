//! Changelog entry model.

use serde::Serialize;
use sqlx::FromRow;
use wikkit_core::types::{DbId, EpochMillis};

/// Changelog row from the `changelog` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChangeEntry {
    pub id: DbId,
    pub when_ms: EpochMillis,
    pub what: String,
}

/// Wire representation of a changelog entry: `{when, what}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEntryResponse {
    pub when: EpochMillis,
    pub what: String,
}

impl From<ChangeEntry> for ChangeEntryResponse {
    fn from(entry: ChangeEntry) -> Self {
        Self {
            when: entry.when_ms,
            what: entry.what,
        }
    }
}
