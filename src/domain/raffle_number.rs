//! Type-safe raffle number.
//!
//! [`RaffleNumber`] is a newtype wrapper around `i32`, the column type of
//! `reservas.numero`, so raffle numbers cannot be confused with counts or
//! indexes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

/// The input could not be read as a raffle number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number: {0:?}")]
pub struct InvalidNumber(pub String);

/// A number on the raffle board.
///
/// No range check is applied: any `i32` is a valid number, and the storage
/// uniqueness constraint is the only gate a registration goes through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema,
)]
#[serde(transparent)]
pub struct RaffleNumber(i32);

impl RaffleNumber {
    /// Wraps a raw integer.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Reads a number the way browsers submit it: leading whitespace and an
    /// optional sign, then the leading run of decimal digits. Anything after
    /// the digits is ignored, so `"10"`, `" 10 "` and `"10.5"` all yield 10.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNumber`] when no digits lead the input
    /// or the value does not fit in an `i32`.
    pub fn parse_lenient(input: &str) -> Result<Self, InvalidNumber> {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let digits = rest
            .get(..digits_len)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| InvalidNumber(input.to_string()))?;

        let magnitude: i64 = digits
            .parse()
            .map_err(|_| InvalidNumber(input.to_string()))?;
        let signed = if negative { -magnitude } else { magnitude };
        i32::try_from(signed)
            .map(Self)
            .map_err(|_| InvalidNumber(input.to_string()))
    }

    /// Reads a number from an arbitrary JSON value.
    ///
    /// Integers are taken as-is, floats are truncated toward zero and strings
    /// go through [`RaffleNumber::parse_lenient`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNumber`] for any other JSON type or an
    /// out-of-range value.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidNumber> {
        let invalid = || InvalidNumber(value.to_string());
        match value {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i32::try_from(i).map(Self).map_err(|_| invalid())
                } else {
                    let f = n.as_f64().ok_or_else(invalid)?.trunc();
                    if f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
                        #[allow(clippy::cast_possible_truncation)]
                        let truncated = f as i32;
                        Ok(Self(truncated))
                    } else {
                        Err(invalid())
                    }
                }
            }
            serde_json::Value::String(s) => Self::parse_lenient(s),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for RaffleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RaffleNumber {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| InvalidNumber(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lenient_parse_takes_leading_digits() {
        for (input, expected) in [("10", 10), (" 42", 42), ("10.9", 10), ("7abc", 7), ("-3", -3)] {
            let Ok(n) = RaffleNumber::parse_lenient(input) else {
                panic!("expected {input:?} to parse");
            };
            assert_eq!(n.get(), expected, "input {input:?}");
        }
    }

    #[test]
    fn lenient_parse_rejects_non_numeric() {
        for input in ["", "abc", "-", "+", ".5", "99999999999"] {
            assert!(
                RaffleNumber::parse_lenient(input).is_err(),
                "input {input:?} should fail"
            );
        }
    }

    #[test]
    fn from_json_accepts_numbers_and_strings() {
        assert_eq!(RaffleNumber::from_json(&json!(10)).ok(), Some(RaffleNumber::new(10)));
        assert_eq!(RaffleNumber::from_json(&json!("25")).ok(), Some(RaffleNumber::new(25)));
        assert_eq!(RaffleNumber::from_json(&json!(8.7)).ok(), Some(RaffleNumber::new(8)));
    }

    #[test]
    fn from_json_rejects_other_types() {
        assert!(RaffleNumber::from_json(&json!(null)).is_err());
        assert!(RaffleNumber::from_json(&json!(true)).is_err());
        assert!(RaffleNumber::from_json(&json!([1])).is_err());
        assert!(RaffleNumber::from_json(&json!(1e12)).is_err());
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("93".parse::<RaffleNumber>().ok(), Some(RaffleNumber::new(93)));
        assert_eq!(
            "93x".parse::<RaffleNumber>().err(),
            Some(InvalidNumber("93x".to_string()))
        );
    }

    #[test]
    fn serializes_as_plain_integer() {
        let Ok(json) = serde_json::to_string(&RaffleNumber::new(44)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "44");
    }

    #[test]
    fn orders_numerically() {
        let mut numbers = vec![RaffleNumber::new(73), RaffleNumber::new(-1), RaffleNumber::new(10)];
        numbers.sort();
        assert_eq!(
            numbers,
            vec![RaffleNumber::new(-1), RaffleNumber::new(10), RaffleNumber::new(73)]
        );
    }
}
