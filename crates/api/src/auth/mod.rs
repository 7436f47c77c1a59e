//! Authentication building blocks: password hashing and the editor
//! authorization check.

pub mod editor;
pub mod password;
