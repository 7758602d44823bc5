//! Board module
//!
//! A Board is the top-level container. It owns Lists, which own Tasks.

mod model;
mod repository;

pub use model::*;
pub use repository::BoardRepository;
