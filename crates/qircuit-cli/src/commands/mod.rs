//! CLI command implementations.

pub mod classify;
pub mod common;
pub mod draw;
pub mod summary;
pub mod version;
