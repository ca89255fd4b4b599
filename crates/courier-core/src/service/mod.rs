//! Business logic services (use cases).
//!
//! Services orchestrate record store calls and business rules. They depend
//! on traits (ports) -- never on concrete infrastructure implementations.

pub mod messaging;
pub mod user;
