//! Santander (033).

use serde::{Deserialize, Serialize};

use super::{ensure_wallet, padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::{modulo11_factor_2_to_9_remainder_zero, Algorithm};
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Santander";

/// Wallets with a barcode layout.
pub const SUPPORTED_WALLETS: [&str; 3] = ["101", "102", "121"];

/// Registered-collection wallets.
const REGISTERED_WALLETS: [&str; 2] = ["101", "121"];

/// Santander slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Santander {
    pub agency: Option<NumericString>,
    /// Assignee code (código do cedente), up to 7 digits.
    pub assignee_code: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 12 digits.
    pub document_number: Option<NumericString>,
    /// IOF rate digit, only used by insurance companies. Defaults to `0`.
    pub iof: Option<NumericString>,
}

impl Santander {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn assignee_code(&self) -> Option<NumericString> {
        padded(&self.assignee_code, 7)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 12)
    }

    pub fn iof(&self) -> NumericString {
        self.iof.clone().unwrap_or_else(|| NumericString::from(0u32))
    }
}

impl BankProfile for Santander {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "033"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('7')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let assignee = required(&self.assignee_code, "assignee_code", 7)?;
        Ok(format!("{agency} / {assignee}"))
    }

    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        let document = required(&self.document_number, "document_number", 12)?;
        let digit = modulo11_factor_2_to_9_remainder_zero(document.as_str())?;
        Ok(format!("{document}-{digit}"))
    }

    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        let wallet = required(&self.wallet, "wallet", 3)?;
        ensure_wallet(NAME, &wallet, &SUPPORTED_WALLETS)?;
        let assignee = required(&self.assignee_code, "assignee_code", 7)?;
        let document = required(&self.document_number, "document_number", 12)?;

        FreeFieldBuilder::new(NAME)
            .digits("9")
            .field(&assignee)
            .field(&document)
            .check_over(Algorithm::Modulo11Factor2To9RemainderZero, document.as_str())?
            .field(&self.iof().padded(1))
            .field(&wallet)
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 3)
    }

    fn wallet_display(&self) -> Option<String> {
        let wallet = self.wallet()?;
        Some(if REGISTERED_WALLETS.contains(&wallet.as_str()) {
            "COBRANÇA SIMPLES ECR".to_string()
        } else {
            "COBRANÇA SIMPLES CSR".to_string()
        })
    }
}
