//! Check-digit algorithms used by Brazilian bank slips.
//!
//! Every algorithm reduces a string of decimal digits to one check
//! character (or two, for the Banrisul control number). Input is never
//! coerced: empty or non-digit strings fail with
//! [`CheckDigitError::InvalidInput`].

pub mod control_number;
pub mod digits;
pub mod modulo10;
pub mod modulo11;
pub mod weights;

use std::fmt;

pub use control_number::{control_number, ControlNumber};
pub use digits::digit_sum;
pub use modulo10::modulo10;
pub use modulo11::{
    modulo11_factor_2_to_7, modulo11_factor_2_to_9, modulo11_factor_2_to_9_remainder_zero,
    modulo11_factor_9_to_2, modulo11_factor_9_to_2_remainder_x,
};
pub use weights::weighted_products;

use crate::error::CheckDigitError;

/// Result type for check-digit operations.
pub type Result<T> = std::result::Result<T, CheckDigitError>;

/// A single check character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    /// Bradesco escape for remainder 1 in the 2-to-7 family.
    P,
    /// Banco do Brasil escape for remainder 10 in the 9-to-2 family.
    X,
}

impl CheckDigit {
    /// The character written on the slip.
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::P => 'P',
            Self::X => 'X',
        }
    }

    /// Numeric value, if this is a plain digit.
    pub fn value(self) -> Option<u8> {
        match self {
            Self::Digit(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Single-character check-digit algorithms, selectable as data.
///
/// Bank layouts name the algorithm they need instead of calling the
/// function directly, so a layout reads as configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Weights `2,1`, digit sums of products, `10 - sum % 10`.
    Modulo10,
    /// Weights `2..=9`; remainders 0 and 1 map to `1`. Barcode digit.
    Modulo11Factor2To9,
    /// Weights `2..=9`; remainders 0 and 1 map to `0`.
    Modulo11Factor2To9RemainderZero,
    /// Weights `2..=7`; remainder 0 maps to `0`, remainder 1 to `P`.
    Modulo11Factor2To7,
    /// Weights `9..=2`; raw remainder, 10 maps to `X`.
    Modulo11Factor9To2RemainderX,
}

impl Algorithm {
    /// Compute the check digit of `number`.
    pub fn compute(self, number: &str) -> Result<CheckDigit> {
        match self {
            Self::Modulo10 => modulo10(number),
            Self::Modulo11Factor2To9 => modulo11_factor_2_to_9(number),
            Self::Modulo11Factor2To9RemainderZero => modulo11_factor_2_to_9_remainder_zero(number),
            Self::Modulo11Factor2To7 => modulo11_factor_2_to_7(number),
            Self::Modulo11Factor9To2RemainderX => modulo11_factor_9_to_2_remainder_x(number),
        }
    }
}

/// Parse `input` into its decimal digits, rejecting empty or non-digit input.
pub(crate) fn parse_digits(input: &str) -> Result<Vec<u32>> {
    if input.is_empty() {
        return Err(CheckDigitError::InvalidInput {
            input: input.to_string(),
        });
    }

    input
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(|| CheckDigitError::InvalidInput {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_display() {
        assert_eq!(CheckDigit::Digit(7).to_string(), "7");
        assert_eq!(CheckDigit::P.to_string(), "P");
        assert_eq!(CheckDigit::X.to_string(), "X");
        assert_eq!(CheckDigit::Digit(0).value(), Some(0));
        assert_eq!(CheckDigit::X.value(), None);
    }

    #[test]
    fn test_parse_digits_rejects_garbage() {
        assert!(parse_digits("").is_err());
        assert!(parse_digits("12a4").is_err());
        assert!(parse_digits(" 1").is_err());
        assert!(parse_digits("-1").is_err());
        assert_eq!(parse_digits("0409").unwrap(), vec![0, 4, 0, 9]);
    }

    #[test]
    fn test_algorithm_dispatch() {
        assert_eq!(Algorithm::Modulo10.compute("12345").unwrap(), CheckDigit::Digit(5));
        assert_eq!(
            Algorithm::Modulo11Factor2To7.compute("1900000000001").unwrap(),
            CheckDigit::P
        );
        assert_eq!(
            Algorithm::Modulo11Factor9To2RemainderX.compute("3973").unwrap(),
            CheckDigit::X
        );
        assert_eq!(
            Algorithm::Modulo11Factor2To9RemainderZero.compute("1088").unwrap(),
            CheckDigit::Digit(0)
        );
        assert_eq!(Algorithm::Modulo11Factor2To9.compute("1").unwrap(), CheckDigit::Digit(9));
    }
}
