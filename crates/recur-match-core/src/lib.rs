//! Shared building blocks for recurrence instance matching: error types,
//! scan bounds, and the `Instant` capability.

pub mod constants;
pub mod error;
pub mod instant;
pub mod limits;

pub use instant::Instant;
pub use limits::{ScanBound, ScanLimits};
