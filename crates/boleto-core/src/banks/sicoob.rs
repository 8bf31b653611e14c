//! Sicoob (756).

use serde::{Deserialize, Serialize};

use super::{padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::error::Result;
use crate::models::numeric::NumericString;

const NAME: &str = "Sicoob";

/// Simple collection with registration.
const COLLECTION_MODE: &str = "01";

/// Installment number; slips are always single installment.
const INSTALLMENT: &str = "001";

/// Sicoob slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sicoob {
    pub agency: Option<NumericString>,
    /// Assignee code, up to 7 digits.
    pub assignee_code: Option<NumericString>,
    /// Document number, up to 6 digits.
    pub document_number: Option<NumericString>,
}

impl Sicoob {
    pub fn agency(&self) -> Option<NumericString> {
        padded(&self.agency, 4)
    }

    pub fn assignee_code(&self) -> Option<NumericString> {
        padded(&self.assignee_code, 7)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 6)
    }
}

impl BankProfile for Sicoob {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "756"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        Some('0')
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        let agency = required(&self.agency, "agency", 4)?;
        let assignee = required(&self.assignee_code, "assignee_code", 7)?;
        Ok(format!("{agency} / {assignee}"))
    }

    /// Issue year followed by the document number.
    fn our_number(&self, slip: &SlipContext) -> Result<String> {
        let year = slip.issue_year()?;
        let document = required(&self.document_number, "document_number", 6)?;
        Ok(format!("{year}{document}"))
    }

    fn barcode_free_field(&self, slip: &SlipContext) -> Result<FreeField> {
        FreeFieldBuilder::new(NAME)
            .digits("1")
            .field(&required(&self.agency, "agency", 4)?)
            .digits(COLLECTION_MODE)
            .field(&required(&self.assignee_code, "assignee_code", 7)?)
            .digits(&self.our_number(slip)?)
            .digits(INSTALLMENT)
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        Some(NumericString::from(1u32))
    }
}
