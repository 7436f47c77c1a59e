//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Response DTOs shaping the entity for the wire

pub mod account;
pub mod changelog;
pub mod page;
