//! Time unit constants, in milliseconds.

use crate::Factor;

/// Milliseconds in one second.
pub const SECOND: Factor = 1_000;

/// Milliseconds in one minute.
pub const MINUTE: Factor = 60 * SECOND;

/// Milliseconds in one hour.
pub const HOUR: Factor = 60 * MINUTE;

/// Milliseconds in one day. Days are UTC-epoch-relative, every day is exactly this long.
pub const DAY: Factor = 24 * HOUR;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_values() {
        assert_eq!(SECOND, 1_000);
        assert_eq!(MINUTE, 60_000);
        assert_eq!(HOUR, 3_600_000);
        assert_eq!(DAY, 86_400_000);
    }
}
