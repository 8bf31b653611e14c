//! Banrisul (041).
//!
//! Banrisul seals its free field with the two-digit control number
//! ("número de controle") instead of a single check digit.

use serde::{Deserialize, Serialize};

use super::{ensure_wallet, padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::control_number;
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Banrisul";

pub const SUPPORTED_WALLETS: [&str; 2] = ["00", "08"];

/// Banrisul slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banrisul {
    /// Agency, up to 3 digits.
    pub agency: Option<NumericString>,
    /// Assignee code, up to 7 digits.
    pub assignee_code: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 8 digits.
    pub document_number: Option<NumericString>,
}

impl Banrisul {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 3)
    }

    pub fn assignee_code(&self) -> Option<NumericString> {
        padded(&self.assignee_code, 7)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 8)
    }
}

impl BankProfile for Banrisul {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "041"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('8')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 3)?;
        let assignee = required(&self.assignee_code, "assignee_code", 7)?;
        Ok(format!(
            "{agency}.{} {assignee}.{}",
            control_number(agency.as_str())?,
            control_number(assignee.as_str())?
        ))
    }

    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        let document = required(&self.document_number, "document_number", 8)?;
        Ok(format!("{document}.{}", control_number(document.as_str())?))
    }

    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        if let Some(wallet) = self.wallet() {
            ensure_wallet(NAME, &wallet, &SUPPORTED_WALLETS)?;
        }

        // "2" is electronic collection, "1" the fixed constant that follows it
        FreeFieldBuilder::new(NAME)
            .digits("21")
            .field(&required(&self.agency, "agency", 3)?)
            .field(&required(&self.assignee_code, "assignee_code", 7)?)
            .field(&required(&self.document_number, "document_number", 8)?)
            .digits("041")
            .control_number()?
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 2)
    }
}
