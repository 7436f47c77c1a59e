//! One-shot backup tool: dumps the accounts, pages, and changelog tables to
//! a local JSON file.
//!
//! Non-interactive, best-effort: no pagination, no retry, no scheduling. A
//! failing fetch aborts the whole snapshot rather than writing a partial
//! file.

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikkit_db::repositories::{AccountRepo, ChangelogRepo, PageRepo};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wikkit_backup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| std::env::args().nth(1))
        .expect("DATABASE_URL must be set (env var or first positional argument)");

    let output_path =
        std::env::var("BACKUP_PATH").unwrap_or_else(|_| "backup.json".to_string());

    let pool = wikkit_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    let accounts = AccountRepo::list(&pool)
        .await
        .expect("Failed to fetch accounts");
    let pages = PageRepo::list(&pool).await.expect("Failed to fetch pages");
    let changelog = ChangelogRepo::list(&pool)
        .await
        .expect("Failed to fetch changelog");

    tracing::info!(
        accounts = accounts.len(),
        pages = pages.len(),
        changelog = changelog.len(),
        "Snapshot fetched"
    );

    // Account rows are serialized field by field: the entity struct
    // deliberately does not implement Serialize so password hashes cannot
    // leak into API responses. A backup, however, must carry them.
    let backup = json!({
        "accounts": accounts
            .iter()
            .map(|a| json!({
                "id": a.id,
                "username": a.username,
                "password_hash": a.password_hash,
                "token": a.token,
                "editor": a.editor,
                "created_ms": a.created_ms,
            }))
            .collect::<Vec<_>>(),
        "pages": pages,
        "changelog": changelog,
    });

    let serialized = serde_json::to_string_pretty(&backup).expect("Failed to serialize backup");
    std::fs::write(&output_path, serialized).expect("Failed to write backup file");

    tracing::info!(path = %output_path, "Backup written");
}
