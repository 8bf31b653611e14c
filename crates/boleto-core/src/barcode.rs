//! The 44-digit FEBRABAN barcode.
//!
//! | positions | width | content |
//! |-----------|-------|---------|
//! | 1-3       | 3     | bank code |
//! | 4         | 1     | currency code |
//! | 5         | 1     | check digit |
//! | 6-9       | 4     | expiration factor |
//! | 10-19     | 10    | amount in cents |
//! | 20-44     | 25    | bank free field |

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::banks::{BankProfile, FreeField, SlipContext, FREE_FIELD_LEN};
use crate::check_digit::modulo11_factor_2_to_9;
use crate::error::{BoletoError, Result};
use crate::expiration::ExpirationFactor;
use crate::models::config::BoletoConfig;
use crate::models::numeric::NumericString;

/// Barcode length.
pub const BARCODE_LEN: usize = 44;

/// Width of the amount field.
pub const AMOUNT_LEN: usize = 10;

/// Largest amount the 10-digit field can hold.
const MAX_CENTS: u64 = 9_999_999_999;

/// Position of the check digit (0-based).
const CHECK_DIGIT_POS: usize = 4;

/// A validated 44-digit barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    /// Parse a barcode, checking its length, digits and check digit.
    pub fn parse(value: &str) -> Result<Self> {
        let barcode = Self::from_digits(value)?;
        let value = barcode.as_str();

        let expected =
            barcode_check_digit(&value[..CHECK_DIGIT_POS], &value[CHECK_DIGIT_POS + 1..])?;
        let found = barcode.check_digit();
        if found != expected {
            return Err(BoletoError::InvalidBarcode(format!(
                "check digit is {found}, expected {expected}"
            )));
        }

        Ok(barcode)
    }

    /// Accept any 44 digits, leaving the position-5 check digit as read.
    pub fn from_digits(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.len() != BARCODE_LEN {
            return Err(BoletoError::InvalidBarcode(format!(
                "expected {BARCODE_LEN} digits, got {}",
                value.len()
            )));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoletoError::InvalidBarcode(format!(
                "non-digit characters in {value:?}"
            )));
        }

        Ok(Self(value.to_string()))
    }

    /// Whether the position-5 digit matches the other 43 digits.
    pub fn has_valid_check_digit(&self) -> bool {
        let value = self.as_str();
        barcode_check_digit(&value[..CHECK_DIGIT_POS], &value[CHECK_DIGIT_POS + 1..])
            .is_ok_and(|expected| expected == self.check_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bank_code(&self) -> &str {
        &self.0[0..3]
    }

    pub fn currency_code(&self) -> &str {
        &self.0[3..4]
    }

    pub fn check_digit(&self) -> &str {
        &self.0[4..5]
    }

    pub fn expiration_factor(&self) -> &str {
        &self.0[5..9]
    }

    /// The raw 10-digit amount field.
    pub fn amount_digits(&self) -> &str {
        &self.0[9..19]
    }

    /// Amount in reais. Zero means the payer fills the amount in.
    pub fn amount(&self) -> Decimal {
        let cents: i64 = self.amount_digits().parse().unwrap_or_default();
        Decimal::new(cents, 2)
    }

    pub fn free_field(&self) -> &str {
        &self.0[19..]
    }

    /// The linha digitável of this barcode.
    pub fn digitable_line(&self) -> String {
        crate::digitable_line::digitable_line(&self.0)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check digit over the 43 digits surrounding position 5.
fn barcode_check_digit(head: &str, tail: &str) -> Result<String> {
    Ok(modulo11_factor_2_to_9(&format!("{head}{tail}"))?.to_string())
}

/// Format `amount` as ten digits of cents.
///
/// Fractions of a cent are truncated, never rounded: `10.999` is
/// `0000001099`. Negative amounts, amounts above `max` and amounts too
/// large for ten digits are rejected.
pub fn format_amount(amount: Decimal, max: Decimal) -> Result<NumericString> {
    if (amount.is_sign_negative() && !amount.is_zero()) || amount > max {
        return Err(BoletoError::AmountOutOfRange(amount));
    }

    let cents = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.trunc().to_u64())
        .filter(|&cents| cents <= MAX_CENTS)
        .ok_or(BoletoError::AmountOutOfRange(amount))?;

    Ok(NumericString::from(cents).padded(AMOUNT_LEN))
}

/// Assemble a barcode from its parts.
///
/// An absent amount is written as zeros, meaning the payer fills it in.
pub fn assemble(
    bank_code: &str,
    factor: ExpirationFactor,
    amount: Option<Decimal>,
    free_field: &FreeField,
    config: &BoletoConfig,
) -> Result<Barcode> {
    let amount = match amount {
        Some(amount) => format_amount(amount, config.max_amount)?,
        None => NumericString::from(0u32).padded(AMOUNT_LEN),
    };

    if free_field.as_str().len() != FREE_FIELD_LEN {
        return Err(BoletoError::InvalidBarcode(format!(
            "free field has {} digits",
            free_field.as_str().len()
        )));
    }

    let head = format!("{bank_code}{}", config.currency_code);
    let tail = format!("{factor}{amount}{free_field}");
    let digit = barcode_check_digit(&head, &tail)?;
    let barcode = format!("{head}{digit}{tail}");

    if barcode.len() != BARCODE_LEN {
        return Err(BoletoError::InvalidBarcode(format!(
            "assembled {} digits from bank code {bank_code:?}",
            barcode.len()
        )));
    }

    Ok(Barcode(barcode))
}

/// Build the barcode of a slip issued by `bank`.
///
/// Fails with [`BoletoError::IncompleteRecord`] when the due date is
/// missing; a shorter barcode is never produced.
pub fn build_barcode(
    bank: &dyn BankProfile,
    slip: &SlipContext,
    config: &BoletoConfig,
) -> Result<Barcode> {
    let due_date = slip.due_date()?;
    let factor = ExpirationFactor::from_due_date(due_date, &config.expiration)?;
    let free_field = bank.barcode_free_field(slip)?;

    debug!(
        bank = bank.name(),
        %due_date,
        %factor,
        free_field = free_field.as_str(),
        "Assembling barcode"
    );

    let barcode = assemble(bank.bank_code(), factor, slip.amount, &free_field, config)?;
    debug!(barcode = barcode.as_str(), "Barcode assembled");
    Ok(barcode)
}
