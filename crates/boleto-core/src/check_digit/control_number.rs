//! Two-digit "Número de Controle" (Banrisul).

use std::fmt;

use super::modulo10::modulo10_value;
use super::weights::{weighted_remainder_11, FACTOR_2_TO_7};
use super::Result;

/// Two check digits: a Modulo 10 digit followed by a Modulo 11 (2-to-7) digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlNumber {
    pub first: u8,
    pub second: u8,
}

impl fmt::Display for ControlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Compute the control number of `number`.
///
/// The first digit is `modulo10(number)`. The second is the 2-to-7
/// Modulo 11 digit of `number` followed by the first digit. When that
/// reduction leaves remainder 1 the second digit would be invalid: the
/// first digit is incremented (9 wraps to 0) and the second digit is
/// recomputed over the corrected first digit.
pub fn control_number(number: &str) -> Result<ControlNumber> {
    let mut first = modulo10_value(number)?;

    let mut remainder = second_digit_remainder(number, first)?;
    if remainder == 1 {
        first = (first + 1) % 10;
        remainder = second_digit_remainder(number, first)?;
    }

    // Incrementing the rightmost digit moves the weighted sum by 2 or -18,
    // so the corrected remainder is never 1 again.
    let second = match remainder {
        0 => 0,
        r => (11 - r) as u8,
    };

    Ok(ControlNumber { first, second })
}

fn second_digit_remainder(number: &str, first: u8) -> Result<u32> {
    weighted_remainder_11(&format!("{number}{first}"), &FACTOR_2_TO_7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nc(number: &str) -> String {
        control_number(number).unwrap().to_string()
    }

    #[test]
    fn test_simple_calculation() {
        assert_eq!(nc("00009274"), "22");
        assert_eq!(nc("0000001"), "83");
    }

    #[test]
    fn test_second_digit_invalid_increments_first() {
        assert_eq!(nc("00009194"), "38");
    }

    #[test]
    fn test_first_digit_wraps_from_nine() {
        assert_eq!(nc("411"), "06");
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(nc("5"), "90");
    }

    #[test]
    fn test_invalid_input() {
        assert!(control_number("").is_err());
        assert!(control_number("00A").is_err());
    }
}
