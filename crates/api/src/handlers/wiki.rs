//! Handlers for the `/wiki/page` resource.
//!
//! Page create/edit/delete require an editor token (query parameter);
//! get/list/changelog are public. Titles and bodies arrive in transport
//! form (base64 over percent-encoded UTF-8, see `wikkit_core::transport`).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;
use wikkit_core::changelog::{page_created_message, page_deleted_message};
use wikkit_core::error::CoreError;
use wikkit_core::transport;
use wikkit_core::types::{now_millis, DbId};
use wikkit_db::models::changelog::ChangeEntryResponse;
use wikkit_db::models::page::{CreatePage, Page, PageMeta, PageResponse, UpdatePage};
use wikkit_db::repositories::{ChangelogRepo, PageRepo};

use crate::auth::editor::require_editor;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::upload;

/* --------------------------------------------------------------------------
Query param types
-------------------------------------------------------------------------- */

#[derive(Debug, serde::Deserialize)]
pub struct CreateParams {
    /// Transport-encoded page title.
    pub page_title: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct EditParams {
    pub page_id: Option<String>,
    /// Transport-encoded page title; absent or undecodable leaves the
    /// title unchanged.
    pub page_title: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct DeleteParams {
    pub page_id: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct GetParams {
    pub page_id: Option<String>,
    /// Presence of the flag requests a file-share link; its value is ignored.
    pub download: Option<String>,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Parse the `page_id` query parameter into a database id.
fn parse_page_id(raw: Option<&str>) -> AppResult<DbId> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Missing page_id!".into())))?;
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid page_id!".into())))
}

/// Fetch a page by id or fail with the historical not-found message.
async fn ensure_page(pool: &PgPool, id: DbId) -> AppResult<Page> {
    PageRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Not found!".into())))
}

/* --------------------------------------------------------------------------
Page CRUD
-------------------------------------------------------------------------- */

/// POST /api/v2/wiki/page/create?page_title=<b64>&token=<t>
///
/// Create a page from the transport-encoded title (query) and text (body).
/// Appends one changelog entry naming the new title.
pub async fn create_page(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
    body: String,
) -> AppResult<(StatusCode, Json<PageResponse>)> {
    let account = require_editor(&state.pool, params.token.as_deref()).await?;

    let title_raw = params
        .page_title
        .ok_or_else(|| AppError::Core(CoreError::Validation("Missing page_title!".into())))?;
    let title = transport::decode(&title_raw)?;
    let text = transport::decode(&body)?;

    let page = PageRepo::create(
        &state.pool,
        &CreatePage {
            title,
            text,
            created_ms: now_millis(),
        },
    )
    .await?;

    ChangelogRepo::append(&state.pool, &page_created_message(&page.title)).await?;

    tracing::info!(
        username = %account.username,
        page_id = page.id,
        title = %page.title,
        "Page created"
    );

    Ok((StatusCode::CREATED, Json(PageResponse::from(page))))
}

/// POST /api/v2/wiki/page/edit?page_id=<id>&page_title=<b64>?&token=<t>
///
/// Merge a new title and/or text into an existing page. Either field may be
/// absent or undecodable, in which case it is left as it was. Always bumps
/// `page_edited`.
pub async fn edit_page(
    State(state): State<AppState>,
    Query(params): Query<EditParams>,
    body: String,
) -> AppResult<Json<PageResponse>> {
    let account = require_editor(&state.pool, params.token.as_deref()).await?;

    let id = parse_page_id(params.page_id.as_deref())?;
    ensure_page(&state.pool, id).await?;

    let title = transport::decode_lenient(params.page_title.as_deref());
    let text = if body.is_empty() {
        None
    } else {
        transport::decode_lenient(Some(body.as_str()))
    };

    let update = UpdatePage {
        title,
        text,
        edited_ms: now_millis(),
    };

    let page = PageRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Not found!".into())))?;

    tracing::info!(
        username = %account.username,
        page_id = page.id,
        "Page edited"
    );

    Ok(Json(PageResponse::from(page)))
}

/// GET /api/v2/wiki/page/delete?page_id=<id>&token=<t>
///
/// Remove a page. The page is looked up first so the changelog entry can
/// name its title. Responds `{"success": true}`.
pub async fn delete_page(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Json<serde_json::Value>> {
    let account = require_editor(&state.pool, params.token.as_deref()).await?;

    let id = parse_page_id(params.page_id.as_deref())?;
    let page = ensure_page(&state.pool, id).await?;

    ChangelogRepo::append(&state.pool, &page_deleted_message(&page.title)).await?;
    PageRepo::delete(&state.pool, id).await?;

    tracing::info!(
        username = %account.username,
        page_id = id,
        title = %page.title,
        "Page deleted"
    );

    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/v2/wiki/page/get?page_id=<id>&download?
///
/// Fetch a page by id. With the `download` flag, the raw text is pushed to
/// the external file-share service and the response carries `file_url`.
pub async fn get_page(
    State(state): State<AppState>,
    Query(params): Query<GetParams>,
) -> AppResult<Json<PageResponse>> {
    let id = parse_page_id(params.page_id.as_deref())?;
    let page = ensure_page(&state.pool, id).await?;

    let mut response = PageResponse::from(page);

    if params.download.is_some() {
        let filename = format!("page-{}.txt", response.page_id);
        let link = upload::upload_text(
            &state.http,
            &state.config.fileshare_url,
            &filename,
            &response.page_text,
        )
        .await?;
        response.file_url = Some(link);
    }

    Ok(Json(response))
}

/// GET /api/v2/wiki/page/list
///
/// All pages' metadata (no text), creation order.
pub async fn list_pages(State(state): State<AppState>) -> AppResult<Json<Vec<PageMeta>>> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(pages.into_iter().map(PageMeta::from).collect()))
}

/// GET /api/v2/wiki/page/changelog
///
/// Every changelog entry, ascending by timestamp.
pub async fn changelog(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChangeEntryResponse>>> {
    let entries = ChangelogRepo::list(&state.pool).await?;
    Ok(Json(
        entries.into_iter().map(ChangeEntryResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_id() {
        assert_eq!(parse_page_id(Some("42")).unwrap(), 42);
        assert!(parse_page_id(None).is_err());
        assert!(parse_page_id(Some("")).is_err());
        assert!(parse_page_id(Some("abc")).is_err());
    }
}
