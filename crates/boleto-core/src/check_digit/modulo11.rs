//! Modulo 11 check digits.
//!
//! All variants sum the weighted products of the digits and reduce the
//! total modulo 11. They differ in the weight cycle and in how the
//! ambiguous remainders are written.

use super::weights::{weighted_remainder_11, FACTOR_2_TO_7, FACTOR_2_TO_9, FACTOR_9_TO_2};
use super::{CheckDigit, Result};

/// Modulo 11, weights `2..=9`, used for the barcode digit at position 5.
///
/// Remainders 0 and 1 produce `1`; any other remainder produces
/// `11 - remainder`. The digit is therefore never `0`.
pub fn modulo11_factor_2_to_9(number: &str) -> Result<CheckDigit> {
    let remainder = weighted_remainder_11(number, &FACTOR_2_TO_9)?;

    let digit = match remainder {
        0 | 1 => 1,
        r => 11 - r,
    };

    Ok(CheckDigit::Digit(digit as u8))
}

/// Modulo 11, weights `2..=9`, used for "nosso número" digits.
///
/// Remainders 0 and 1 produce `0`; any other remainder produces
/// `11 - remainder`.
pub fn modulo11_factor_2_to_9_remainder_zero(number: &str) -> Result<CheckDigit> {
    let remainder = weighted_remainder_11(number, &FACTOR_2_TO_9)?;

    let digit = match remainder {
        0 | 1 => 0,
        r => 11 - r,
    };

    Ok(CheckDigit::Digit(digit as u8))
}

/// Modulo 11, weights `2..=7` (Bradesco).
///
/// Remainder 0 produces `0`, remainder 1 produces `P`, otherwise
/// `11 - remainder`.
pub fn modulo11_factor_2_to_7(number: &str) -> Result<CheckDigit> {
    let remainder = weighted_remainder_11(number, &FACTOR_2_TO_7)?;

    Ok(match remainder {
        0 => CheckDigit::Digit(0),
        1 => CheckDigit::P,
        r => CheckDigit::Digit((11 - r) as u8),
    })
}

/// Modulo 11, weights `9..=2`, returning the raw remainder (`0..=10`).
pub fn modulo11_factor_9_to_2(number: &str) -> Result<u8> {
    Ok(weighted_remainder_11(number, &FACTOR_9_TO_2)? as u8)
}

/// Modulo 11, weights `9..=2`, with remainder 10 written as `X`.
pub fn modulo11_factor_9_to_2_remainder_x(number: &str) -> Result<CheckDigit> {
    Ok(match modulo11_factor_9_to_2(number)? {
        10 => CheckDigit::X,
        r => CheckDigit::Digit(r),
    })
}
