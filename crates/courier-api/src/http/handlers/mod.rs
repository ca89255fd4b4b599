//! HTTP request handlers for the REST API.

pub mod conversation;
pub mod message;
pub mod user;
