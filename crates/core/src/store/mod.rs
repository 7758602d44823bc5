//! In-memory relational store
//!
//! `Database` holds the three collections and performs every operation
//! synchronously. `MemoryStore` wraps it behind a single write lock so that
//! cascades are never observed half-done, and reloads it from a fixture on
//! initialize/reset.

mod database;
mod fixture;
mod memory;

pub use database::{Database, StoreConfig};
pub use fixture::{EmbeddedFixture, Fixture, FixtureSource, InMemoryFixture, JsonFileFixture};
pub use memory::MemoryStore;
