//! aw-core: stable foundation for the wiring model.
//!
//! Contains:
//! - ids (stable compact IDs for elements, poles, wires and potentials)
//! - error (shared error type every wiring crate converts into)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AwError, AwResult};
pub use ids::*;
