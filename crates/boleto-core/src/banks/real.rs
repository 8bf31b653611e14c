//! Banco Real (356).

use serde::{Deserialize, Serialize};

use super::{ensure_wallet, padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::modulo10;
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Real";

pub const SUPPORTED_WALLETS: [&str; 6] = ["00", "20", "31", "42", "47", "85"];

/// Banco Real slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Real {
    pub agency: Option<NumericString>,
    /// Account, up to 7 digits.
    pub account: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 13 digits.
    pub document_number: Option<NumericString>,
}

impl Real {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn account(&self) -> Option<NumericString> {
        padded(&self.account, 7)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 13)
    }

    /// "Dígitão": modulo 10 over document, agency and account. A missing
    /// document counts as zeros.
    pub fn collection_digit(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let account = required(&self.account, "account", 7)?;
        let document = self
            .document_number()
            .unwrap_or_else(|| NumericString::from(0u32).padded(13));
        Ok(modulo10(&format!("{document}{agency}{account}"))?.to_string())
    }
}

impl BankProfile for Real {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "356"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('5')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let account = required(&self.account, "account", 7)?;
        Ok(format!("{agency}/{account}/{}", self.collection_digit()?))
    }

    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        Ok(required(&self.document_number, "document_number", 13)?.to_string())
    }

    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        if let Some(wallet) = self.wallet() {
            ensure_wallet(NAME, &wallet, &SUPPORTED_WALLETS)?;
        }
        let document = required(&self.document_number, "document_number", 13)?;

        FreeFieldBuilder::new(NAME)
            .field(&required(&self.agency, "agency", 4)?)
            .field(&required(&self.account, "account", 7)?)
            .digits(&self.collection_digit()?)
            .field(&document)
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 2)
    }
}
