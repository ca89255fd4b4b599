//! Request extractors for the REST handlers.

pub mod json;
pub mod query;
