//! Business logic and repository trait definitions for Courier.
//!
//! This crate defines the "ports" (the record store trait) that the
//! infrastructure layer implements, plus conversation identity, the query
//! engine, and the messaging service. It depends only on `courier-types` --
//! never on `courier-infra` or any file/IO crate.

pub mod identity;
pub mod query;
pub mod repository;
pub mod service;
