//! Shared types and unit constants for millisecond POSIX timestamps.

pub use crate::units::*;

pub mod units;
pub mod utils;

/// Milliseconds since the Unix epoch (1970-01-01T00:00:00Z).
///
/// Negative values are instants before the epoch.
pub type Timestamp = i64;

/// Milliseconds per unit of granularity. Valid factors are strictly positive.
pub type Factor = i64;
