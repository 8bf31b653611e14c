//! Banco do Brasil (001).
//!
//! The length of the assignee code ("convênio") selects the layout:
//!
//! | convênio | document | free field |
//! |----------|----------|------------|
//! | 4 digits | 7        | convênio, document, agency, account, wallet |
//! | 6 digits | 5        | convênio, document, agency, account, wallet |
//! | 6 digits | 17       | convênio, document, `21` (wallets 16 and 18) |
//! | 7 digits | 10       | `000000`, convênio, document, wallet |
//! | 8 digits | 9        | `000000`, convênio, document, wallet |

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{ensure_wallet, padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::modulo11_factor_9_to_2_remainder_x;
use crate::error::{BoletoError, Result};
use crate::models::numeric::NumericString;

const NAME: &str = "Banco do Brasil";

/// Wallets allowed with a 6-digit convênio and a 17-digit document.
pub const EXTENDED_DOCUMENT_WALLETS: [&str; 2] = ["16", "18"];

/// Collection mode written after a 17-digit document.
const EXTENDED_COLLECTION_MODE: &str = "21";

const EXTENDED_DOCUMENT_LEN: usize = 17;

/// Free field layout chosen from the convênio length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// 4 or 6-digit convênio with agency and account.
    Short { document_width: usize },
    /// 6-digit convênio with a 17-digit document.
    ExtendedDocument,
    /// 7 or 8-digit convênio, zero-prefixed.
    Long { document_width: usize },
}

impl Layout {
    pub fn document_width(self) -> usize {
        match self {
            Self::Short { document_width } | Self::Long { document_width } => document_width,
            Self::ExtendedDocument => EXTENDED_DOCUMENT_LEN,
        }
    }

    /// Whether the our number carries a check digit.
    pub fn has_our_number_digit(self) -> bool {
        !matches!(self, Self::Long { .. })
    }
}

/// Banco do Brasil slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BancoDoBrasil {
    pub agency: Option<NumericString>,
    pub agency_digit: Option<NumericString>,
    /// Account, up to 8 digits.
    pub account: Option<NumericString>,
    pub account_digit: Option<NumericString>,
    /// Convênio, exactly 4, 6, 7 or 8 digits.
    pub assignee_code: Option<NumericString>,
    pub wallet: Option<NumericString>,
    pub document_number: Option<NumericString>,
}

impl BancoDoBrasil {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn account(&self) -> Option<NumericString> {
        padded(&self.account, 8)
    }

    /// The layout the convênio, wallet and document select.
    pub fn layout(&self) -> Result<Layout> {
        let assignee = self
            .assignee_code
            .as_ref()
            .ok_or_else(|| BoletoError::IncompleteRecord("assignee_code".to_string()))?;
        let extended_document = self
            .document_number
            .as_ref()
            .is_some_and(|d| d.len() == EXTENDED_DOCUMENT_LEN);

        let layout = match assignee.len() {
            6 if extended_document => {
                let wallet = required(&self.wallet, "wallet", 2)?;
                ensure_wallet(NAME, &wallet, &EXTENDED_DOCUMENT_WALLETS)?;
                Layout::ExtendedDocument
            }
            4 => Layout::Short { document_width: 7 },
            6 => Layout::Short { document_width: 5 },
            7 => Layout::Long { document_width: 10 },
            8 => Layout::Long { document_width: 9 },
            length => {
                return Err(BoletoError::UnsupportedAssigneeCode {
                    bank: NAME.to_string(),
                    length,
                });
            }
        };

        trace!(?layout, assignee_len = assignee.len(), "Banco do Brasil layout");
        Ok(layout)
    }

    /// Document number padded to the width of the current layout.
    pub fn document_number(&self) -> Result<NumericString> {
        let width = self.layout()?.document_width();
        required(&self.document_number, "document_number", width)
    }
}

impl BankProfile for BancoDoBrasil {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "001"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('9')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let account = required(&self.account, "account", 8)?;
        let agency_digit = self.agency_digit.as_ref().map(|d| d.as_str()).unwrap_or_default();
        let account_digit = self.account_digit.as_ref().map(|d| d.as_str()).unwrap_or_default();
        Ok(format!("{agency}-{agency_digit} / {account}-{account_digit}"))
    }

    /// Convênio and document, followed by a modulo 11 (9 to 2) digit for
    /// 4 and 6-digit convênios.
    fn our_number(&self, _slip: &SlipContext) -> Result<String> {
        let layout = self.layout()?;
        let assignee = required(&self.assignee_code, "assignee_code", 0)?;
        let number = format!("{assignee}{}", self.document_number()?);

        if layout.has_our_number_digit() {
            let digit = modulo11_factor_9_to_2_remainder_x(&number)?;
            Ok(format!("{number}-{digit}"))
        } else {
            Ok(number)
        }
    }

    fn barcode_free_field(&self, _slip: &SlipContext) -> Result<FreeField> {
        let layout = self.layout()?;
        let assignee = required(&self.assignee_code, "assignee_code", 0)?;
        let document = self.document_number()?;

        let builder = match layout {
            Layout::ExtendedDocument => FreeFieldBuilder::new(NAME)
                .field(&assignee)
                .field(&document)
                .digits(EXTENDED_COLLECTION_MODE),
            Layout::Short { .. } => FreeFieldBuilder::new(NAME)
                .field(&assignee)
                .field(&document)
                .field(&required(&self.agency, "agency", 4)?)
                .field(&required(&self.account, "account", 8)?)
                .field(&required(&self.wallet, "wallet", 2)?),
            Layout::Long { .. } => FreeFieldBuilder::new(NAME)
                .digits("000000")
                .field(&assignee)
                .field(&document)
                .field(&required(&self.wallet, "wallet", 2)?),
        };

        builder.finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        padded(&self.wallet, 2)
    }
}
