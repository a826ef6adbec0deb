use millis_common::{Factor, Timestamp};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A rounding factor was zero or negative.
    #[error("invalid factor: {0} (must be positive)")]
    InvalidFactor(Factor),
    /// A fractional unit count was not a number.
    #[error("invalid unit count: {0}")]
    InvalidCount(f64),
    /// The result does not fit in a signed 64-bit millisecond timestamp.
    #[error("timestamp arithmetic overflow")]
    Overflow,
    /// The timezone identifier is not in the timezone database.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
    /// The timestamp cannot be represented as a calendar value.
    #[error("timestamp out of calendar range: {0}")]
    OutOfRange(Timestamp),
}
