//! Alignment checks and same-bucket comparisons.
//!
//! These are total over the whole `i64` range: with a positive unit, neither `rem_euclid` nor
//! `div_euclid` can overflow, and two timestamps share a floor boundary exactly when they share
//! a Euclidean quotient.

use millis_common::{Factor, Timestamp, DAY, HOUR, MINUTE, SECOND};

/// Whether `ts` has no millisecond component.
pub fn is_valid_second(ts: Timestamp) -> bool {
    is_aligned(ts, SECOND)
}

/// Whether `ts` falls exactly on a minute.
pub fn is_valid_minute(ts: Timestamp) -> bool {
    is_aligned(ts, MINUTE)
}

/// Whether `ts` falls exactly on an hour.
pub fn is_valid_hour(ts: Timestamp) -> bool {
    is_aligned(ts, HOUR)
}

/// Whether `ts` is midnight UTC.
pub fn is_valid_day(ts: Timestamp) -> bool {
    is_aligned(ts, DAY)
}

/// Whether both timestamps fall within the same second.
pub fn is_same_second(ts1: Timestamp, ts2: Timestamp) -> bool {
    same_bucket(ts1, ts2, SECOND)
}

/// Whether both timestamps fall within the same minute.
pub fn is_same_minute(ts1: Timestamp, ts2: Timestamp) -> bool {
    same_bucket(ts1, ts2, MINUTE)
}

/// Whether both timestamps fall within the same hour.
pub fn is_same_hour(ts1: Timestamp, ts2: Timestamp) -> bool {
    same_bucket(ts1, ts2, HOUR)
}

/// Whether both timestamps fall on the same UTC day.
///
/// For a local-time comparison, convert with [`crate::calendar`] first.
pub fn is_same_day(ts1: Timestamp, ts2: Timestamp) -> bool {
    same_bucket(ts1, ts2, DAY)
}

fn is_aligned(ts: Timestamp, unit: Factor) -> bool {
    ts.rem_euclid(unit) == 0
}

fn same_bucket(ts1: Timestamp, ts2: Timestamp, unit: Factor) -> bool {
    ts1.div_euclid(unit) == ts2.div_euclid(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_second() {
        assert!(is_valid_second(1_704_110_455_000));
        assert!(!is_valid_second(1_704_110_455_500));
        assert!(is_valid_second(-1_000));
        assert!(!is_valid_second(-999));
    }

    #[test]
    fn valid_minute() {
        assert!(is_valid_minute(1_704_110_400_000));
        assert!(!is_valid_minute(1_704_110_455_000));
        assert!(is_valid_minute(-60_000));
        assert!(!is_valid_minute(-50_000));
    }

    #[test]
    fn valid_hour() {
        assert!(is_valid_hour(1_704_110_400_000));
        assert!(!is_valid_hour(1_704_110_455_000));
        assert!(is_valid_hour(-3_600_000));
    }

    #[test]
    fn valid_day() {
        // 2024-01-01 00:00:00 and 12:00:55
        assert!(is_valid_day(1_704_067_200_000));
        assert!(!is_valid_day(1_704_110_455_000));
        assert!(is_valid_day(0));
        assert!(is_valid_day(-86_400_000));
        assert!(!is_valid_day(-43_200_000));
    }

    #[test]
    fn valid_at_range_ends() {
        assert!(!is_valid_second(i64::MIN));
        assert!(!is_valid_second(i64::MAX));
    }

    #[test]
    fn same_second() {
        assert!(is_same_second(1_704_110_455_100, 1_704_110_455_900));
        assert!(!is_same_second(1_704_110_455_900, 1_704_110_456_100));
    }

    #[test]
    fn same_minute() {
        assert!(is_same_minute(1_704_110_400_000, 1_704_110_459_000));
        assert!(!is_same_minute(1_704_110_459_000, 1_704_110_460_000));
    }

    #[test]
    fn same_hour() {
        assert!(is_same_hour(1_704_110_400_000, 1_704_113_999_000));
        assert!(!is_same_hour(1_704_113_999_000, 1_704_114_000_000));
    }

    #[test]
    fn same_day() {
        assert!(is_same_day(1_704_067_200_000, 1_704_153_599_000));
        assert!(!is_same_day(1_704_153_599_000, 1_704_153_600_000));
    }

    #[test]
    fn same_bucket_across_the_epoch() {
        //* Given
        // Truncating division would put -500 and 500 in the same second.
        let before = -500;
        let after = 500;

        //* Then
        assert!(!is_same_second(before, after));
        assert!(is_same_second(-1, -999));
        assert!(is_same_second(-1_000, -1));
        assert!(!is_same_day(-1, 0));
        assert!(is_same_day(i64::MIN, i64::MIN + 1));
    }
}
