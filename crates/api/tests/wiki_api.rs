//! Integration tests for the wiki page endpoints' request validation: auth
//! and parameter errors are rejected before any database access, so these
//! run without infrastructure.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_text};
use wikkit_core::transport;

// ---------------------------------------------------------------------------
// Authorization: every mutation requires a token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_without_token_is_unauthorized() {
    let app = common::build_test_app();
    let title = transport::encode("Home");
    let response = post_text(
        app,
        &format!("/api/v2/wiki/page/create?page_title={title}"),
        &transport::encode("welcome"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing token!");
}

#[tokio::test]
async fn edit_without_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = post_text(app, "/api/v2/wiki/page/edit?page_id=1", "").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Missing token!");
}

#[tokio::test]
async fn delete_without_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = get(app, "/api/v2/wiki/page/delete?page_id=1").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Missing token!");
}

#[tokio::test]
async fn empty_token_counts_as_missing() {
    let app = common::build_test_app();
    let response = get(app, "/api/v2/wiki/page/delete?page_id=1&token=").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Missing token!");
}

// ---------------------------------------------------------------------------
// Parameter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_without_page_id_is_rejected() {
    let app = common::build_test_app();
    let response = get(app, "/api/v2/wiki/page/get").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing page_id!");
}

#[tokio::test]
async fn get_with_non_numeric_page_id_is_rejected() {
    let app = common::build_test_app();
    let response = get(app, "/api/v2/wiki/page/get?page_id=not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid page_id!");
}

// ---------------------------------------------------------------------------
// Method contract: delete is a GET, create/edit are POSTs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_get() {
    let app = common::build_test_app();
    let response = get(app, "/api/v2/wiki/page/create").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn delete_rejects_post() {
    let app = common::build_test_app();
    let response = post_text(app, "/api/v2/wiki/page/delete?page_id=1", "").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
