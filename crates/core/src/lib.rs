//! Core library for the task board
//!
//! This crate contains the board/list/task data model and the in-memory
//! relational store behind it, including:
//! - Entity types and typed patches
//! - Id allocation
//! - Fixture loading and saving
//! - Cascade-consistent repositories

pub mod board;
pub mod error;
pub mod id;
pub mod list;
pub mod store;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Trims a required name, rejecting it when nothing is left
pub(crate) fn require_name(kind: &str, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{} name cannot be empty", kind)));
    }
    Ok(trimmed.to_string())
}
