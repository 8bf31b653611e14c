//! Bank profiles.
//!
//! Each supported bank is a value object holding that bank's identifying
//! fields. All of them answer the same [`BankProfile`] contract; the only
//! thing that really differs between banks is which fields feed which
//! check-digit algorithm, and in what order they are laid out in the
//! 25-digit free field. Layouts are written as [`FreeFieldBuilder`] chains.

pub mod banco_do_brasil;
pub mod banrisul;
pub mod bradesco;
pub mod caixa;
pub mod free_field;
pub mod hsbc;
pub mod itau;
pub mod real;
pub mod santander;
pub mod sicoob;
pub mod sicredi;

pub use banco_do_brasil::BancoDoBrasil;
pub use banrisul::Banrisul;
pub use bradesco::Bradesco;
pub use caixa::Caixa;
pub use free_field::{FreeField, FreeFieldBuilder, FREE_FIELD_LEN};
pub use hsbc::Hsbc;
pub use itau::Itau;
pub use real::Real;
pub use santander::Santander;
pub use sicoob::Sicoob;
pub use sicredi::Sicredi;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BoletoError, Result};
use crate::models::numeric::NumericString;

/// Slip data some bank layouts depend on besides their own fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlipContext {
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Date the slip was issued; its year is part of some "nosso número".
    pub document_date: Option<NaiveDate>,
    /// Slip amount; absent for payer-filled amounts.
    pub amount: Option<Decimal>,
}

impl SlipContext {
    pub fn due_date(&self) -> Result<NaiveDate> {
        self.due_date
            .ok_or_else(|| BoletoError::IncompleteRecord("due_date".to_string()))
    }

    /// Two-digit issue year taken from the document date.
    pub fn issue_year(&self) -> Result<NumericString> {
        let date = self
            .document_date
            .ok_or_else(|| BoletoError::IncompleteRecord("document_date".to_string()))?;
        NumericString::parse("document_date", &format!("{:02}", date.year().rem_euclid(100)))
    }
}

/// Operations every bank exposes.
pub trait BankProfile {
    /// Human-readable bank name.
    fn name(&self) -> &'static str;

    /// Three-digit FEBRABAN bank code.
    fn bank_code(&self) -> &'static str;

    /// Fixed check character of the bank code, if the bank prints one.
    fn bank_code_check_digit(&self) -> Option<char>;

    /// Bank code as printed in the slip header, e.g. `237-2`.
    fn formatted_bank_code(&self) -> String {
        match self.bank_code_check_digit() {
            Some(digit) => format!("{}-{}", self.bank_code(), digit),
            None => self.bank_code().to_string(),
        }
    }

    /// The "agência / código do cedente" field printed on the slip.
    fn agency_and_assignee_display(&self) -> Result<String>;

    /// The "nosso número" with its check digit(s).
    fn our_number(&self, slip: &SlipContext) -> Result<String>;

    /// The 25-digit barcode suffix.
    fn barcode_free_field(&self, slip: &SlipContext) -> Result<FreeField>;

    /// The wallet (carteira) code, padded to the bank's width.
    fn wallet(&self) -> Option<NumericString>;

    /// The wallet as printed on the slip.
    fn wallet_display(&self) -> Option<String> {
        self.wallet().map(|w| w.to_string())
    }
}

/// Supported banks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bank {
    BancoDoBrasil(BancoDoBrasil),
    Banrisul(Banrisul),
    Bradesco(Bradesco),
    Caixa(Caixa),
    Hsbc(Hsbc),
    Itau(Itau),
    Real(Real),
    Santander(Santander),
    Sicoob(Sicoob),
    Sicredi(Sicredi),
}

impl Bank {
    /// The profile behind this variant.
    pub fn profile(&self) -> &dyn BankProfile {
        match self {
            Self::BancoDoBrasil(bank) => bank,
            Self::Banrisul(bank) => bank,
            Self::Bradesco(bank) => bank,
            Self::Caixa(bank) => bank,
            Self::Hsbc(bank) => bank,
            Self::Itau(bank) => bank,
            Self::Real(bank) => bank,
            Self::Santander(bank) => bank,
            Self::Sicoob(bank) => bank,
            Self::Sicredi(bank) => bank,
        }
    }
}

impl BankProfile for Bank {
    fn name(&self) -> &'static str {
        self.profile().name()
    }

    fn bank_code(&self) -> &'static str {
        self.profile().bank_code()
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        self.profile().bank_code_check_digit()
    }

    fn formatted_bank_code(&self) -> String {
        self.profile().formatted_bank_code()
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        self.profile().agency_and_assignee_display()
    }

    fn our_number(&self, slip: &SlipContext) -> Result<String> {
        self.profile().our_number(slip)
    }

    fn barcode_free_field(&self, slip: &SlipContext) -> Result<FreeField> {
        self.profile().barcode_free_field(slip)
    }

    fn wallet(&self) -> Option<NumericString> {
        self.profile().wallet()
    }

    fn wallet_display(&self) -> Option<String> {
        self.profile().wallet_display()
    }
}

/// Pad an optional field to `width`.
pub(crate) fn padded(value: &Option<NumericString>, width: usize) -> Option<NumericString> {
    value.as_ref().map(|v| v.padded(width))
}

/// Pad a field the layout cannot do without.
pub(crate) fn required(
    value: &Option<NumericString>,
    field: &str,
    width: usize,
) -> Result<NumericString> {
    padded(value, width).ok_or_else(|| BoletoError::IncompleteRecord(field.to_string()))
}

/// Fail unless `wallet` is one of `supported`.
pub(crate) fn ensure_wallet(
    bank: &'static str,
    wallet: &NumericString,
    supported: &[&str],
) -> Result<()> {
    if supported.contains(&wallet.as_str()) {
        Ok(())
    } else {
        Err(BoletoError::UnsupportedWallet {
            bank: bank.to_string(),
            wallet: wallet.to_string(),
        })
    }
}
