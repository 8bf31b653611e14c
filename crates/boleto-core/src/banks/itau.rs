//! Itaú (341).
//!
//! Most wallets place the account in the free field. The special wallets
//! (107, 122, 142, 143, 196, 198) carry the client's own number ("seu
//! número") and assignee code instead.

use serde::{Deserialize, Serialize};

use super::{padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::{modulo10, Algorithm};
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Itaú";

/// Wallets whose free field carries "seu número" and the assignee code.
pub const SPECIAL_WALLETS: [&str; 6] = ["107", "122", "142", "143", "196", "198"];

/// Wallets whose our-number DAC covers only wallet and document.
pub const SHORT_DAC_WALLETS: [&str; 5] = ["126", "131", "146", "150", "168"];

/// Itaú slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itau {
    pub agency: Option<NumericString>,
    /// Account, up to 5 digits.
    pub account: Option<NumericString>,
    pub account_digit: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 8 digits.
    pub document_number: Option<NumericString>,
    /// Assignee code, special wallets only.
    pub assignee_code: Option<NumericString>,
    /// Client-side number ("seu número"), special wallets only.
    pub your_number: Option<NumericString>,
}

impl Itau {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn account(&self) -> Option<NumericString> {
        padded(&self.account, 5)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 8)
    }

    pub fn assignee_code(&self) -> Option<NumericString> {
        padded(&self.assignee_code, 5)
    }

    pub fn your_number(&self) -> Option<NumericString> {
        padded(&self.your_number, 7)
    }

    pub fn is_special_wallet(&self) -> bool {
        self.wallet()
            .is_some_and(|w| SPECIAL_WALLETS.contains(&w.as_str()))
    }

    /// DAC of the our number.
    fn our_number_digit(&self) -> Result<String> {
        let wallet = required(&self.wallet, "wallet", 3)?;
        let document = required(&self.document_number, "document_number", 8)?;

        let digit = if SHORT_DAC_WALLETS.contains(&wallet.as_str()) {
            modulo10(&format!("{wallet}{document}"))?
        } else {
            let agency = required(&self.agency, "agency", 4)?;
            let account = required(&self.account, "account", 5)?;
            modulo10(&format!("{agency}{account}{wallet}{document}"))?
        };
        Ok(digit.to_string())
    }
}

impl BankProfile for Itau {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "341"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('7')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let account = required(&self.account, "account", 5)?;
        let digit = self.account_digit.as_ref().map(|d| d.as_str()).unwrap_or_default();
        Ok(format!("{agency} / {account}-{digit}"))
    }

    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        let wallet = required(&self.wallet, "wallet", 3)?;
        let document = required(&self.document_number, "document_number", 8)?;
        Ok(format!("{wallet}/{document}-{}", self.our_number_digit()?))
    }

    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        let wallet = required(&self.wallet, "wallet", 3)?;
        let document = required(&self.document_number, "document_number", 8)?;

        if self.is_special_wallet() {
            return FreeFieldBuilder::new(NAME)
                .field(&wallet)
                .field(&document)
                .field(&required(&self.your_number, "your_number", 7)?)
                .field(&required(&self.assignee_code, "assignee_code", 5)?)
                .check(Algorithm::Modulo10)?
                .digits("0")
                .finish();
        }

        FreeFieldBuilder::new(NAME)
            .field(&wallet)
            .field(&document)
            .digits(&self.our_number_digit()?)
            .field(&required(&self.agency, "agency", 4)?)
            .field(&required(&self.account, "account", 5)?)
            .field(&required(&self.account_digit, "account_digit", 1)?)
            .digits("000")
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 3)
    }
}
