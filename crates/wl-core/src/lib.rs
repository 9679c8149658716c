//! wl-core: stable foundation for waterlevel.
//!
//! Contains:
//! - ids (container identifiers)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WlError, WlResult};
pub use ids::*;
pub use numeric::*;
