//! Changelog entry text.
//!
//! The changelog is a free-text audit trail; these helpers keep the wording
//! identical across the create and delete paths (and their tests).

/// Entry appended when a page is created.
pub fn page_created_message(title: &str) -> String {
    format!("Page {title} created!")
}

/// Entry appended when a page is deleted.
pub fn page_deleted_message(title: &str) -> String {
    format!("Page {title} deleted!")
}
