//! Storage layer for focustrack.
//!
//! Sessions are persisted through a small string-valued key-value API backed
//! by SQLite.

mod database;
mod kv;
mod migrations;

pub use database::Database;
pub use kv::KeyValueStore;

#[cfg(test)]
pub use kv::MockKeyValueStore;
