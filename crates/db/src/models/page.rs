//! Page entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wikkit_core::types::{DbId, EpochMillis};

/// Full page row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    pub text: String,
    pub created_ms: EpochMillis,
    pub edited_ms: EpochMillis,
}

/// Full page representation for API responses.
///
/// `page_id` travels as a decimal string: callers treat ids as opaque, and
/// the historical wire format was a numeric string.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub page_id: String,
    pub page_title: String,
    pub page_text: String,
    pub page_created: EpochMillis,
    pub page_edited: EpochMillis,
    /// Short link to the raw text on the external file-share service.
    /// Only present when the get endpoint is called with `download`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            page_id: page.id.to_string(),
            page_title: page.title,
            page_text: page.text,
            page_created: page.created_ms,
            page_edited: page.edited_ms,
            file_url: None,
        }
    }
}

/// Metadata-only representation used by the list endpoint (no text).
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub page_id: String,
    pub page_title: String,
    pub page_created: EpochMillis,
    pub page_edited: EpochMillis,
}

impl From<Page> for PageMeta {
    fn from(page: Page) -> Self {
        Self {
            page_id: page.id.to_string(),
            page_title: page.title,
            page_created: page.created_ms,
            page_edited: page.edited_ms,
        }
    }
}

/// DTO for creating a new page.
#[derive(Debug)]
pub struct CreatePage {
    pub title: String,
    pub text: String,
    pub created_ms: EpochMillis,
}

/// DTO for editing a page. `None` fields are left unchanged.
#[derive(Debug)]
pub struct UpdatePage {
    pub title: Option<String>,
    pub text: Option<String>,
    pub edited_ms: EpochMillis,
}
