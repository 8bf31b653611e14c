//! HSBC (399), unregistered collection (CNR).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{padded, required, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
use crate::check_digit::modulo11_factor_9_to_2;
use crate::error::{BoletoError, Result};
use crate::models::numeric::NumericString;

const NAME: &str = "HSBC";

/// Product code of CNR collection, also used as the wallet.
const CNR_PRODUCT: &str = "2";

/// "Tipo identificador" 4: our number checked against assignee and due date.
const IDENTIFIER_TYPE: &str = "4";

/// HSBC slip fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsbc {
    /// Assignee code, up to 7 digits.
    pub assignee_code: Option<NumericString>,
    /// Document number, up to 13 digits.
    pub document_number: Option<NumericString>,
}

impl Hsbc {
    pub fn assignee_code(&self) -> Option<NumericString> {
        padded(&self.assignee_code, 7)
    }

    pub fn document_number(&self) -> Option<NumericString> {
        padded(&self.document_number, 13)
    }
}

/// Modulo 11 (9 to 2) remainder with 10 written as `0`.
fn cnr_digit(number: &str) -> Result<u8> {
    Ok(modulo11_factor_9_to_2(number)? % 10)
}

/// Due date as day of year (3 digits) plus the last digit of the year.
fn julian_due_date(date: NaiveDate) -> String {
    format!("{:03}{}", date.ordinal(), date.year().rem_euclid(10))
}

impl BankProfile for Hsbc {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bank_code(&self) -> &'static str {
        "399"
    }

    fn bank_code_check_digit(&self) -> Option<char> {
        None
    }

    fn agency_and_assignee_display(&self) -> Result<String> {
        Ok(required(&self.assignee_code, "assignee_code", 7)?.to_string())
    }

    /// Document, first DV, identifier type `4` and a second DV that also
    /// covers the assignee code and the due date.
    fn our_number(&self, slip: &SlipContext) -> Result<String> {
        let document = required(&self.document_number, "document_number", 13)?;
        let assignee = required(&self.assignee_code, "assignee_code", 7)?;
        let due_date = slip.due_date()?;

        let first = cnr_digit(document.as_str())?;
        let prefix = format!("{document}{first}{IDENTIFIER_TYPE}");

        let due = due_date.format("%d%m%y").to_string();
        let terms: [&str; 3] = [&prefix, assignee.as_str(), &due];
        let sum = terms.iter().try_fold(0u64, |sum, term| {
            term.parse::<u64>()
                .ok()
                .and_then(|value| sum.checked_add(value))
                .ok_or_else(|| BoletoError::InvalidNumeric {
                    field: "document_number".to_string(),
                    value: term.to_string(),
                })
        })?;

        let second = cnr_digit(&sum.to_string())?;
        Ok(format!("{prefix}{second}"))
    }

    fn barcode_free_field(&self, slip: &SlipContext) -> Result<FreeField> {
        let due_date = slip.due_date()?;

        FreeFieldBuilder::new(NAME)
            .field(&required(&self.assignee_code, "assignee_code", 7)?)
            .field(&required(&self.document_number, "document_number", 13)?)
            .digits(&julian_due_date(due_date))
            .digits(CNR_PRODUCT)
            .finish()
    }

    fn wallet(&self) -> Option<NumericString> {
        Some(NumericString::from(2u32))
    }

    fn wallet_display(&self) -> Option<String> {
        Some("CNR".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn n(s: &str) -> Option<NumericString> {
        Some(s.parse().unwrap())
    }

    fn slip(due: &str) -> SlipContext {
        SlipContext {
            due_date: NaiveDate::parse_from_str(due, "%Y-%m-%d").ok(),
            ..Default::default()
        }
    }

    #[test]
    fn test_julian_due_date() {
        assert_eq!(julian_due_date(NaiveDate::from_ymd_opt(2024, 2, 18).unwrap()), "0494");
        assert_eq!(julian_due_date(NaiveDate::from_ymd_opt(2008, 12, 31).unwrap()), "3668");
    }

    #[test]
    fn test_our_number() {
        let bank = Hsbc {
            assignee_code: n("7984135"),
            document_number: n("4716881775613"),
        };
        assert_eq!(bank.our_number(&slip("2009-05-22")).unwrap(), "4716881775613440");
    }

    #[test]
    fn test_our_number_needs_due_date() {
        let bank = Hsbc {
            assignee_code: n("7984135"),
            document_number: n("4716881775613"),
        };
        assert!(bank.our_number(&SlipContext::default()).is_err());
    }

    #[test]
    fn test_free_field() {
        let bank = Hsbc {
            assignee_code: n("3485910"),
            document_number: n("43862"),
        };
        let field = bank.barcode_free_field(&slip("2024-02-18")).unwrap();
        assert_eq!(field.as_str(), "3485910000000004386204942");
    }

    #[test]
    fn test_fixed_wallet() {
        let bank = Hsbc::default();
        assert_eq!(bank.wallet().unwrap().as_str(), "2");
        assert_eq!(bank.wallet_display().unwrap(), "CNR");
    }

    #[test]
    fn test_agency_and_assignee_display() {
        let bank = Hsbc {
            assignee_code: n("98135"),
            ..Default::default()
        };
        assert_eq!(bank.agency_and_assignee_display().unwrap(), "0098135");
    }
}
