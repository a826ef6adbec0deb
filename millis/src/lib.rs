//! Deterministic arithmetic over POSIX timestamps in milliseconds.
//!
//! Every operation works on plain `i64` millisecond values relative to the Unix epoch and uses
//! floor (toward negative infinity) semantics, so instants before 1970 round the same way as
//! instants after it:
//!
//! ```
//! use millis::{ceil, floor, MINUTE};
//!
//! assert_eq!(floor(-50_000, MINUTE), Ok(-60_000));
//! assert_eq!(ceil(-50_000, MINUTE), Ok(0));
//! ```
//!
//! Day boundaries are UTC-epoch-relative. Conversion to and from timezone-aware calendar values
//! lives in [`calendar`] and is the only part that consults a timezone database.

pub use millis_common::{Factor, Timestamp, DAY, HOUR, MINUTE, SECOND};

pub use crate::alignment::*;
pub use crate::boundaries::*;
pub use crate::calendar::{to_calendar, to_calendar_in, to_timestamp, ToTimestamp};
pub use crate::errors::Error;
pub use crate::rounding::*;
pub use crate::stepping::*;

pub mod alignment;
pub mod boundaries;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod logging;
pub mod rounding;
pub mod stepping;
