//! Modulo 10 check digit.

use super::digits::digit_sum;
use super::weights::{weighted_products, FACTOR_2_1};
use super::{CheckDigit, Result};

/// Modulo 10 with weights `2,1`.
///
/// Each weighted product contributes the sum of its own digits. The check
/// digit is `10 - total % 10`, with `10` written as `0`. The result is
/// always a single decimal digit.
pub fn modulo10(number: &str) -> Result<CheckDigit> {
    modulo10_value(number).map(CheckDigit::Digit)
}

pub(crate) fn modulo10_value(number: &str) -> Result<u8> {
    let total: u32 = weighted_products(number, &FACTOR_2_1)?
        .into_iter()
        .map(digit_sum)
        .sum();

    let digit = match 10 - total % 10 {
        10 => 0,
        d => d,
    };

    Ok(digit as u8)
}
