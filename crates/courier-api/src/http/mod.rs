//! HTTP/REST API layer for Courier.
//!
//! Axum-based REST API under `/api/` with an envelope response format and
//! permissive CORS. No authentication.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
