//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (courier-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod record;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;
