//! Bradesco (237).

use serde::{Deserialize, Serialize};

use super::{padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::modulo11_factor_2_to_7;
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Bradesco";

/// Bradesco slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bradesco {
    pub agency: Option<NumericString>,
    pub agency_digit: Option<NumericString>,
    pub account: Option<NumericString>,
    pub account_digit: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 11 digits.
    pub document_number: Option<NumericString>,
}

impl Bradesco {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn account(&self) -> Option<NumericString> {
        padded(&self.account, 7)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 11)
    }
}

impl BankProfile for Bradesco {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "237"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('2')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let account = required(&self.account, "account", 7)?;
        let agency_digit = self.agency_digit.as_ref().map(|d| d.as_str()).unwrap_or_default();
        let account_digit = self.account_digit.as_ref().map(|d| d.as_str()).unwrap_or_default();
        Ok(format!("{agency}-{agency_digit} / {account}-{account_digit}"))
    }

    /// `wallet/document-DV`, DV being modulo 11 (2 to 7) over wallet and document.
    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        let wallet = required(&self.wallet, "wallet", 2)?;
        let document = required(&self.document_number, "document_number", 11)?;
        let digit = modulo11_factor_2_to_7(&format!("{wallet}{document}"))?;
        Ok(format!("{wallet}/{document}-{digit}"))
    }

    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        FreeFieldBuilder::new(NAME)
            .field(&required(&self.agency, "agency", 4)?)
            .field(&required(&self.wallet, "wallet", 2)?)
            .field(&required(&self.document_number, "document_number", 11)?)
            .field(&required(&self.account, "account", 7)?)
            .digits("0")
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 2)
    }

    fn wallet_display(&self) -> Option<String> {
        let wallet = self.wallet()?;
        Some(match wallet.as_str() {
            "21" => "21 – Cobrança Interna Com Registro".to_string(),
            "22" => "22 – Cobrança Interna sem registro".to_string(),
            other => other.to_string(),
        })
    }
}
