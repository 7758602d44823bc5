//! List module
//!
//! A List is a named, colored column inside a Board.

mod model;
mod repository;

pub use model::*;
pub use repository::ListRepository;
