//! Zero-padded digit strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoletoError, Result};

/// A non-empty sequence of ASCII decimal digits, leading zeros preserved.
///
/// Every fixed-width slip field (agency, account, document number...) is a
/// `NumericString`. Parsing rejects anything that is not a digit, so
/// downstream check-digit code never sees coerced input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NumericString(String);

impl NumericString {
    /// Parse `value`, naming `field` in the error.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoletoError::InvalidNumeric {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Left-pad with `0` up to `width`. Longer values are kept intact.
    pub fn padded(&self, width: usize) -> NumericString {
        Self(format!("{:0>width$}", self.0))
    }
}

impl fmt::Display for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NumericString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NumericString {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse("value", s)
    }
}

impl TryFrom<String> for NumericString {
    type Error = BoletoError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse("value", &value)
    }
}

impl From<NumericString> for String {
    fn from(value: NumericString) -> Self {
        value.0
    }
}

impl From<u64> for NumericString {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for NumericString {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_digits() {
        let n: NumericString = "0042".parse().unwrap();
        assert_eq!(n.as_str(), "0042");
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!("".parse::<NumericString>().is_err());
        assert!("12 3".parse::<NumericString>().is_err());
        assert!("-5".parse::<NumericString>().is_err());
        assert!("１２".parse::<NumericString>().is_err());

        let err = NumericString::parse("agency", "12a").unwrap_err();
        assert_eq!(err.to_string(), "invalid numeric value for agency: \"12a\"");
    }

    #[test]
    fn test_padded() {
        let n = NumericString::from(913u32);
        assert_eq!(n.padded(8).as_str(), "00000913");
        assert_eq!(n.padded(2).as_str(), "913");
    }

    #[test]
    fn test_serde_round_trip_rejects_garbage() {
        let n: NumericString = serde_json::from_str("\"00123\"").unwrap();
        assert_eq!(n.as_str(), "00123");
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"00123\"");
        assert!(serde_json::from_str::<NumericString>("\"12.3\"").is_err());
    }
}
