//! Shared domain types for Courier.
//!
//! This crate contains the core domain types used across the Courier
//! messaging backend: Message, Conversation, the flat store Record, request
//! shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod conversation;
pub mod error;
pub mod message;
pub mod record;
pub mod user;
