//! Request handlers, one module per API resource.

pub mod account;
pub mod wiki;

use crate::error::{AppError, AppResult};
use wikkit_core::error::CoreError;

/// Catch-all for routes that exist in the API surface but are not served.
///
/// The root path has always responded this way; it is kept as a sentinel so
/// probes against `/` get a well-formed error envelope.
pub async fn not_implemented() -> AppResult<()> {
    Err(AppError::Core(CoreError::NotImplemented(
        "Not implemented!".into(),
    )))
}
