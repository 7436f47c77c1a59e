//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod changelog_repo;
pub mod page_repo;

pub use account_repo::AccountRepo;
pub use changelog_repo::ChangelogRepo;
pub use page_repo::PageRepo;
