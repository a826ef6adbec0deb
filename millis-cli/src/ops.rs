//! Command-line operations and their evaluation against the library.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Context as _};
use millis::{config::Config, Timestamp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
}

impl Unit {
    fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
        }
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" => Ok(Unit::Second),
            "minute" => Ok(Unit::Minute),
            "hour" => Ok(Unit::Hour),
            "day" => Ok(Unit::Day),
            _ => Err(anyhow!("unknown unit: {s}")),
        }
    }
}

/// An operation named on the command line, e.g. `floor`, `next_hour` or `is_same_day`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Floor,
    Ceil,
    Last(Unit),
    Next(Unit),
    IsValid(Unit),
    IsSame(Unit),
    Increment(Unit),
    Decrement(Unit),
    /// Convert to a calendar value in the configured timezone and back.
    Roundtrip,
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => return Ok(Operation::Floor),
            "ceil" => return Ok(Operation::Ceil),
            "roundtrip" => return Ok(Operation::Roundtrip),
            _ => (),
        }
        let (prefix, unit) = s
            .rsplit_once('_')
            .ok_or_else(|| anyhow!("unknown operation: {s}"))?;
        let unit = unit
            .parse::<Unit>()
            .with_context(|| format!("unknown operation: {s}"))?;
        match prefix {
            "last" => Ok(Operation::Last(unit)),
            "next" => Ok(Operation::Next(unit)),
            "is_valid" => Ok(Operation::IsValid(unit)),
            "is_same" => Ok(Operation::IsSame(unit)),
            "increment" => Ok(Operation::Increment(unit)),
            "decrement" => Ok(Operation::Decrement(unit)),
            _ => Err(anyhow!("unknown operation: {s}")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Floor => write!(f, "floor"),
            Operation::Ceil => write!(f, "ceil"),
            Operation::Roundtrip => write!(f, "roundtrip"),
            Operation::Last(unit) => write!(f, "last_{}", unit.name()),
            Operation::Next(unit) => write!(f, "next_{}", unit.name()),
            Operation::IsValid(unit) => write!(f, "is_valid_{}", unit.name()),
            Operation::IsSame(unit) => write!(f, "is_same_{}", unit.name()),
            Operation::Increment(unit) => write!(f, "increment_{}", unit.name()),
            Operation::Decrement(unit) => write!(f, "decrement_{}", unit.name()),
        }
    }
}

/// Result of an operation, printed as a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    Timestamp(Timestamp),
    Bool(bool),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Timestamp(ts) => write!(f, "{ts}"),
            Output::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Operation {
    /// Evaluate the operation over its command-line operands.
    pub fn eval(self, operands: &[String], config: &Config) -> anyhow::Result<Output> {
        let (required, optional) = match self {
            Operation::IsSame(_) => (2, 0),
            Operation::Floor
            | Operation::Ceil
            | Operation::Increment(_)
            | Operation::Decrement(_) => (1, 1),
            _ => (1, 0),
        };
        if operands.len() < required || operands.len() > required + optional {
            let expected = match optional {
                0 => required.to_string(),
                _ => format!("{required} or {}", required + optional),
            };
            bail!("{self} takes {expected} operands, got {}", operands.len());
        }

        let ts = operand::<Timestamp>(operands, 0, "timestamp")?;
        let output = match self {
            Operation::Floor => {
                let factor = optional_operand(operands, 1, "factor")?;
                Output::Timestamp(millis::floor(ts, factor.unwrap_or(config.default_factor))?)
            }
            Operation::Ceil => {
                let factor = optional_operand(operands, 1, "factor")?;
                Output::Timestamp(millis::ceil(ts, factor.unwrap_or(config.default_factor))?)
            }
            Operation::Last(unit) => Output::Timestamp(match unit {
                Unit::Second => millis::last_second(ts)?,
                Unit::Minute => millis::last_minute(ts)?,
                Unit::Hour => millis::last_hour(ts)?,
                Unit::Day => millis::last_day(ts)?,
            }),
            Operation::Next(unit) => Output::Timestamp(match unit {
                Unit::Second => millis::next_second(ts)?,
                Unit::Minute => millis::next_minute(ts)?,
                Unit::Hour => millis::next_hour(ts)?,
                Unit::Day => millis::next_day(ts)?,
            }),
            Operation::IsValid(unit) => Output::Bool(match unit {
                Unit::Second => millis::is_valid_second(ts),
                Unit::Minute => millis::is_valid_minute(ts),
                Unit::Hour => millis::is_valid_hour(ts),
                Unit::Day => millis::is_valid_day(ts),
            }),
            Operation::IsSame(unit) => {
                let other = operand::<Timestamp>(operands, 1, "timestamp")?;
                Output::Bool(match unit {
                    Unit::Second => millis::is_same_second(ts, other),
                    Unit::Minute => millis::is_same_minute(ts, other),
                    Unit::Hour => millis::is_same_hour(ts, other),
                    Unit::Day => millis::is_same_day(ts, other),
                })
            }
            Operation::Increment(unit) => {
                let n = optional_operand::<f64>(operands, 1, "count")?;
                Output::Timestamp(match (unit, n) {
                    (Unit::Second, None) => millis::increment_second(ts)?,
                    (Unit::Second, Some(n)) => millis::increment_second_by(ts, n)?,
                    (Unit::Minute, None) => millis::increment_minute(ts)?,
                    (Unit::Minute, Some(n)) => millis::increment_minute_by(ts, n)?,
                    (Unit::Hour, None) => millis::increment_hour(ts)?,
                    (Unit::Hour, Some(n)) => millis::increment_hour_by(ts, n)?,
                    (Unit::Day, None) => millis::increment_day(ts)?,
                    (Unit::Day, Some(n)) => millis::increment_day_by(ts, n)?,
                })
            }
            Operation::Decrement(unit) => {
                let n = optional_operand::<f64>(operands, 1, "count")?;
                Output::Timestamp(match (unit, n) {
                    (Unit::Second, None) => millis::decrement_second(ts)?,
                    (Unit::Second, Some(n)) => millis::decrement_second_by(ts, n)?,
                    (Unit::Minute, None) => millis::decrement_minute(ts)?,
                    (Unit::Minute, Some(n)) => millis::decrement_minute_by(ts, n)?,
                    (Unit::Hour, None) => millis::decrement_hour(ts)?,
                    (Unit::Hour, Some(n)) => millis::decrement_hour_by(ts, n)?,
                    (Unit::Day, None) => millis::decrement_day(ts)?,
                    (Unit::Day, Some(n)) => millis::decrement_day_by(ts, n)?,
                })
            }
            Operation::Roundtrip => {
                let calendar = millis::to_calendar_in(ts, &config.timezone)?;
                tracing::debug!(%calendar, timezone = %config.timezone);
                Output::Timestamp(millis::to_timestamp(&calendar))
            }
        };
        Ok(output)
    }
}

fn operand<T>(operands: &[String], index: usize, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = operands
        .get(index)
        .ok_or_else(|| anyhow!("missing {name}"))?;
    raw.parse()
        .with_context(|| format!("invalid {name}: {raw}"))
}

fn optional_operand<T>(operands: &[String], index: usize, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if index < operands.len() {
        operand(operands, index, name).map(Some)
    } else {
        Ok(None)
    }
}
