//! Caixa Econômica Federal (104), SIGCB layout.

use serde::{Deserialize, Serialize};

use super::{ensure_wallet, padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::{modulo11_factor_2_to_9_remainder_zero, Algorithm};
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Caixa";

/// `14` is registered collection, `24` unregistered.
pub const SUPPORTED_WALLETS: [&str; 2] = ["14", "24"];

/// Caixa slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caixa {
    pub agency: Option<NumericString>,
    /// Assignee code, up to 6 digits.
    pub assignee_code: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 15 digits.
    pub document_number: Option<NumericString>,
}

impl Caixa {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn assignee_code(&self) -> Option<NumericString> {
        padded(&self.assignee_code, 6)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 15)
    }

    /// Wallet followed by the document number, 17 digits.
    fn our_number_digits(&self) -> Result<String> {
        let wallet = required(&self.wallet, "wallet", 2)?;
        let document = required(&self.document_number, "document_number", 15)?;
        Ok(format!("{wallet}{document}"))
    }
}

impl BankProfile for Caixa {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "104"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('0')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let assignee = required(&self.assignee_code, "assignee_code", 6)?;
        let digit = modulo11_factor_2_to_9_remainder_zero(assignee.as_str())?;
        Ok(format!("{agency} / {assignee}-{digit}"))
    }

    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        let number = self.our_number_digits()?;
        let digit = modulo11_factor_2_to_9_remainder_zero(&number)?;
        Ok(format!("{number}-{digit}"))
    }

    /// Assignee and its DV, then the our number interleaved with the two
    /// wallet digits, sealed by modulo 11 (2 to 9) over all of it.
    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        let wallet = required(&self.wallet, "wallet", 2)?;
        ensure_wallet(NAME, &wallet, &SUPPORTED_WALLETS)?;
        let assignee = required(&self.assignee_code, "assignee_code", 6)?;
        let number = self.our_number_digits()?;
        let (wallet_type, wallet_issuer) = wallet.as_str().split_at(1);

        FreeFieldBuilder::new(NAME)
            .field(&assignee)
            .check_over(Algorithm::Modulo11Factor2To9RemainderZero, assignee.as_str())?
            .digits(&number[2..5])
            .digits(wallet_type)
            .digits(&number[5..8])
            .digits(wallet_issuer)
            .digits(&number[8..])
            .check(Algorithm::Modulo11Factor2To9RemainderZero)?
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 2)
    }

    fn wallet_display(&self) -> Option<String> {
        let wallet = self.wallet()?;
        Some(if wallet.as_str() == "14" { "RG" } else { "SR" }.to_string())
    }
}
