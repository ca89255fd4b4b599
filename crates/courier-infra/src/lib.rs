//! Infrastructure layer for Courier.
//!
//! Contains implementations of the ports defined in `courier-core`: the CSV
//! record log, an in-memory record store, the single-writer queue that
//! serializes appends, and the in-memory user directory. Also loads configuration and resolves the data directory.

pub mod config;
pub mod filesystem;
pub mod store;
pub mod user;
