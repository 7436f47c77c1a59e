//! Domain primitives shared by the API server, the db layer, and the
//! backup tool. This crate has no internal dependencies.

pub mod changelog;
pub mod error;
pub mod token;
pub mod transport;
pub mod types;
