//! Rounding and boundary invariants over seeded samples of timestamps and factors

use assert_matches::assert_matches;
use millis::{
    ceil, floor, is_same_day, is_same_hour, is_same_minute, is_same_second, is_valid_day,
    is_valid_hour, is_valid_minute, is_valid_second, last_day, last_hour, last_minute,
    last_second, next_day, next_hour, next_minute, next_second, Error, Factor, Timestamp, DAY,
    HOUR, MINUTE, SECOND,
};
use millis_common::utils::testing::{edge_timestamps, sample_factors, sample_timestamps, UNITS};

const SEED: u64 = 0x6d696c6c6973;

fn timestamps() -> Vec<Timestamp> {
    let mut values = edge_timestamps();
    values.extend(sample_timestamps(SEED, 2_000));
    values
}

type Boundary = fn(Timestamp) -> Result<Timestamp, Error>;
type Check = fn(Timestamp) -> bool;
type Pair = fn(Timestamp, Timestamp) -> bool;

/// Per-unit helpers paired with the factor they specialise.
fn unit_helpers() -> [(Factor, Boundary, Boundary, Check, Pair); 4] {
    [
        (SECOND, last_second, next_second, is_valid_second, is_same_second),
        (MINUTE, last_minute, next_minute, is_valid_minute, is_same_minute),
        (HOUR, last_hour, next_hour, is_valid_hour, is_same_hour),
        (DAY, last_day, next_day, is_valid_day, is_same_day),
    ]
}

/// `floor(ts, f) <= ts < floor(ts, f) + f`, and the result is a multiple of `f`.
#[test]
fn floor_brackets_timestamp() {
    for factor in sample_factors(SEED, 50) {
        for &ts in &timestamps() {
            assert_matches!(floor(ts, factor), Ok(floored) => {
                assert!(floored <= ts, "floor({ts}, {factor}) = {floored}");
                assert!(ts < floored + factor, "floor({ts}, {factor}) = {floored}");
                assert_eq!(floored.rem_euclid(factor), 0);
            });
        }
    }
}

/// `ceil(ts, f) - f < ts <= ceil(ts, f)`, and the result is a multiple of `f`.
#[test]
fn ceil_brackets_timestamp() {
    for factor in sample_factors(SEED, 50) {
        for &ts in &timestamps() {
            assert_matches!(ceil(ts, factor), Ok(ceiled) => {
                assert!(ceiled - factor < ts, "ceil({ts}, {factor}) = {ceiled}");
                assert!(ts <= ceiled, "ceil({ts}, {factor}) = {ceiled}");
                assert_eq!(ceiled.rem_euclid(factor), 0);
            });
        }
    }
}

#[test]
fn floor_and_ceil_are_idempotent() {
    for factor in sample_factors(SEED ^ 1, 20) {
        for &ts in &timestamps() {
            let floored = floor(ts, factor).unwrap();
            let ceiled = ceil(ts, factor).unwrap();
            assert_eq!(floor(floored, factor), Ok(floored));
            assert_eq!(ceil(ceiled, factor), Ok(ceiled));
        }
    }
}

/// Ceil is floor for aligned input and one factor above it otherwise.
#[test]
fn ceil_agrees_with_floor() {
    for factor in sample_factors(SEED ^ 2, 20) {
        for &ts in &timestamps() {
            let floored = floor(ts, factor).unwrap();
            let expected = if floored == ts { ts } else { floored + factor };
            assert_eq!(ceil(ts, factor), Ok(expected));
        }
    }
}

#[test]
fn last_and_next_straddle_the_containing_boundary() {
    for (unit, last, next, _, _) in unit_helpers() {
        for &ts in &timestamps() {
            //* Given
            let floored = floor(ts, unit).unwrap();

            //* When
            let before = last(ts).unwrap();
            let after = next(ts).unwrap();

            //* Then
            assert!(before < floored && floored <= ts);
            assert!(after > floored);
            assert_eq!(before, floored - unit);
            assert_eq!(after, floored + unit);

            //* And, on the boundary itself
            assert_eq!(next(floored).unwrap() - last(floored).unwrap(), 2 * unit);
        }
    }
}

#[test]
fn valid_iff_floor_is_identity() {
    for (unit, _, _, is_valid, _) in unit_helpers() {
        for &ts in &timestamps() {
            assert_eq!(is_valid(ts), floor(ts, unit) == Ok(ts), "ts = {ts}, unit = {unit}");
        }
    }
}

#[test]
fn same_iff_floors_match() {
    let values = timestamps();
    for (unit, _, _, _, is_same) in unit_helpers() {
        for pair in values.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(is_same(a, b), floor(a, unit) == floor(b, unit), "{a} vs {b}");
        }
        for &ts in &values {
            let floored = floor(ts, unit).unwrap();
            assert!(is_same(ts, floored));
            assert!(!is_same(ts, floored - 1));
            assert!(!is_same(ts, floored + unit));
        }
    }
}

#[test]
fn generic_floor_matches_unit_constants() {
    for unit in UNITS {
        assert_eq!(floor(-1, unit), Ok(-unit));
        assert_eq!(ceil(-1, unit), Ok(0));
        assert_eq!(floor(unit - 1, unit), Ok(0));
        assert_eq!(ceil(1, unit), Ok(unit));
    }
}
