//! Sicredi (748).

use serde::{Deserialize, Serialize};

use super::{ensure_wallet, padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::{modulo11_factor_2_to_9_remainder_zero, Algorithm};
use crate::error::{BoletoError, Result};
use crate::models::numeric::NumericString;

const NAME: &str = "Sicredi";

pub const SUPPORTED_WALLETS: [&str; 2] = ["11", "31"];

/// Valid "byte de identificação" values; `1` is reserved for the cooperative.
pub const SUPPORTED_BYTE_IDS: [&str; 8] = ["2", "3", "4", "5", "6", "7", "8", "9"];

/// Printed in the wallet box regardless of the wallet code.
const WALLET_LABEL: &str = "1";

/// Sicredi slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sicredi {
    pub agency: Option<NumericString>,
    /// Cooperative post ("posto"), up to 2 digits.
    pub post: Option<NumericString>,
    /// Account, up to 5 digits.
    pub account: Option<NumericString>,
    /// Identification byte, one digit from 2 to 9.
    pub byte_id: Option<NumericString>,
    pub wallet: Option<NumericString>,
    /// Document number, up to 5 digits.
    pub document_number: Option<NumericString>,
}

impl Sicredi {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn post(&self) -> Option<NumericString> {
        padded(&self.post, 2)
    }

    pub fn account(&self) -> Option<NumericString> {
        padded(&self.account, 5)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 5)
    }

    fn byte_id(&self) -> Result<NumericString> {
        let byte_id = required(&self.byte_id, "byte_id", 1)?;
        if !SUPPORTED_BYTE_IDS.contains(&byte_id.as_str()) {
            return Err(BoletoError::InvalidNumeric {
                field: "byte_id".to_string(),
                value: byte_id.to_string(),
            });
        }
        Ok(byte_id)
    }

    /// Year, byte id, document and DV as they appear in the barcode.
    fn our_number_parts(
        &self,
        slip: &SlipContext,
    ) -> Result<(NumericString, NumericString, NumericString, String)> {
        let year = slip.issue_year()?;
        let byte_id = self.byte_id()?;
        let document = required(&self.document_number, "document_number", 5)?;
        let agency = required(&self.agency, "agency", 4)?;
        let post = required(&self.post, "post", 2)?;
        let account = required(&self.account, "account", 5)?;

        let digit = modulo11_factor_2_to_9_remainder_zero(&format!(
            "{agency}{post}{account}{year}{byte_id}{document}"
        ))?;
        Ok((year, byte_id, document, digit.to_string()))
    }
}

impl BankProfile for Sicredi {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "748"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('X')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let post = required(&self.post, "post", 2)?;
        let account = required(&self.account, "account", 5)?;
        Ok(format!("{agency}.{post}.{account}"))
    }

    /// `yy/bDDDDD-D`: issue year, byte id, document and DV.
    fn our_number(&self, slip: &SlipContext) -> Result<String> {
        let (year, byte_id, document, digit) = self.our_number_parts(slip)?;
        Ok(format!("{year}/{byte_id}{document}-{digit}"))
    }

    /// The wallet leads the field, so it is required: 11 and 31 encode
    /// different collection types.
    fn barcode_free_field(&self, slip: &SlipContext) -> Result<FreeField> {
        let wallet = required(&self.wallet, "wallet", 2)?;
        ensure_wallet(NAME, &wallet, &SUPPORTED_WALLETS)?;
        let (year, byte_id, document, digit) = self.our_number_parts(slip)?;
        // "1" when the amount is printed on the slip
        let amount_flag = if slip.amount.is_some() { "1" } else { "0" };

        FreeFieldBuilder::new(NAME)
            .field(&wallet)
            .field(&year)
            .field(&byte_id)
            .field(&document)
            .digits(&digit)
            .field(&required(&self.agency, "agency", 4)?)
            .field(&required(&self.post, "post", 2)?)
            .field(&required(&self.account, "account", 5)?)
            .digits(amount_flag)
            .digits("0")
            .check(Algorithm::Modulo11Factor2To9RemainderZero)?
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 2)
    }

    fn wallet_display(&self) -> Option<String> {
        Some(WALLET_LABEL.to_string())
    }
}
