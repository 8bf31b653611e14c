//! Linha digitável: the typeable form of the barcode.
//!
//! ```text
//! AAABC.CCCCX DDDDD.DDDDDY EEEEE.EEEEEZ K UUUUVVVVVVVVVV
//! ```
//!
//! The first three groups carry the barcode minus its check digit, each
//! followed by a modulo 10 digit. `K` is the barcode check digit, `U` the
//! expiration factor and `V` the amount.

use lazy_static::lazy_static;
use regex::Regex;

use crate::barcode::{Barcode, BARCODE_LEN};
use crate::check_digit::modulo10::modulo10_value;
use crate::error::{BoletoError, Result};

/// Length of a formatted linha digitável.
pub const DIGITABLE_LINE_LEN: usize = 54;

lazy_static! {
    // Separators are optional so that a line typed as 47 bare digits parses too
    static ref DIGITABLE_LINE: Regex = Regex::new(
        r"^([0-9]{5})\.?([0-9]{5}) ?([0-9]{5})\.?([0-9]{6}) ?([0-9]{5})\.?([0-9]{6}) ?([0-9]) ?([0-9]{14})$"
    ).unwrap();
}

/// Format a barcode as a linha digitável.
///
/// Total over all inputs: anything that is not 44 ASCII digits yields an
/// empty string.
pub fn digitable_line(barcode: &str) -> String {
    if barcode.len() != BARCODE_LEN || !barcode.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    format_fields(barcode).unwrap_or_default()
}

fn format_fields(barcode: &str) -> Option<String> {
    let first = with_check_digit(&format!("{}{}", &barcode[0..4], &barcode[19..24]))?;
    let second = with_check_digit(&barcode[24..34])?;
    let third = with_check_digit(&barcode[34..44])?;

    Some(format!(
        "{}.{} {}.{} {}.{} {} {}",
        &first[..5],
        &first[5..],
        &second[..5],
        &second[5..],
        &third[..5],
        &third[5..],
        &barcode[4..5],
        &barcode[5..19],
    ))
}

fn with_check_digit(field: &str) -> Option<String> {
    let digit = modulo10_value(field).ok()?;
    Some(format!("{field}{digit}"))
}

/// Recover the barcode from a linha digitável.
///
/// Dots and spaces are optional. The three field check digits are
/// verified; the barcode check digit is copied through unchecked, as the
/// line carries no redundancy for it.
pub fn barcode_from_digitable_line(line: &str) -> Result<Barcode> {
    let caps = DIGITABLE_LINE
        .captures(line.trim())
        .ok_or_else(|| BoletoError::InvalidDigitableLine(format!("malformed line {line:?}")))?;

    let first = format!("{}{}", &caps[1], &caps[2]);
    let second = format!("{}{}", &caps[3], &caps[4]);
    let third = format!("{}{}", &caps[5], &caps[6]);

    for (index, field) in [&first, &second, &third].into_iter().enumerate() {
        let (digits, check) = field.split_at(field.len() - 1);
        let expected = modulo10_value(digits)?;
        if check != expected.to_string() {
            return Err(BoletoError::InvalidDigitableLine(format!(
                "field {} check digit is {check}, expected {expected}",
                index + 1
            )));
        }
    }

    let barcode = format!(
        "{}{}{}{}{}{}",
        &first[0..4],
        &caps[7],
        &caps[8],
        &first[4..9],
        &second[0..10],
        &third[0..10],
    );

    Barcode::from_digits(&barcode)
}
