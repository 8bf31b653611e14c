//! Composition of the 25-digit bank-specific barcode suffix ("campo livre").

use std::fmt;

use crate::check_digit::{control_number, Algorithm};
use crate::error::{BoletoError, Result};
use crate::models::numeric::NumericString;

/// Width of the free field.
pub const FREE_FIELD_LEN: usize = 25;

/// The 25 digits a bank places at barcode positions 20-44.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FreeField(String);

impl FreeField {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FreeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FreeField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds a free field from fixed-width fields, literals and check digits.
///
/// A bank layout is a chain of calls on this builder, e.g. Bradesco:
///
/// ```
/// # use boleto_core::banks::FreeFieldBuilder;
/// # fn main() -> boleto_core::Result<()> {
/// let field = FreeFieldBuilder::new("Bradesco")
///     .digits("1172")
///     .digits("06")
///     .digits("00075896452")
///     .digits("0403005")
///     .digits("0")
///     .finish()?;
/// assert_eq!(field.as_str(), "1172060007589645204030050");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FreeFieldBuilder {
    bank: &'static str,
    content: String,
}

impl FreeFieldBuilder {
    pub fn new(bank: &'static str) -> Self {
        Self {
            bank,
            content: String::with_capacity(FREE_FIELD_LEN),
        }
    }

    /// Append an already padded field.
    pub fn field(mut self, value: &NumericString) -> Self {
        self.content.push_str(value.as_str());
        self
    }

    /// Append literal digits.
    pub fn digits(mut self, literal: &str) -> Self {
        self.content.push_str(literal);
        self
    }

    /// Append the check digit of everything accumulated so far.
    pub fn check(self, algorithm: Algorithm) -> Result<Self> {
        let digit = algorithm.compute(&self.content)?;
        Ok(self.digits(&digit.to_string()))
    }

    /// Append the check digit of `number`.
    pub fn check_over(self, algorithm: Algorithm, number: &str) -> Result<Self> {
        let digit = algorithm.compute(number)?;
        Ok(self.digits(&digit.to_string()))
    }

    /// Append the two-digit control number of everything accumulated so far.
    pub fn control_number(self) -> Result<Self> {
        let control = control_number(&self.content)?;
        Ok(self.digits(&control.to_string()))
    }

    /// Content accumulated so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Finish the field, checking it is exactly 25 digits.
    pub fn finish(self) -> Result<FreeField> {
        if !self.content.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoletoError::InvalidNumeric {
                field: format!("{} free field", self.bank),
                value: self.content,
            });
        }
        if self.content.len() != FREE_FIELD_LEN {
            return Err(BoletoError::FreeFieldLength {
                bank: self.bank.to_string(),
                length: self.content.len(),
            });
        }
        Ok(FreeField(self.content))
    }
}
