//! Record validation run before a slip is computed.
//!
//! Validators are advisory: they list what is wrong with a record in
//! human-readable form. The codec itself still fails with typed errors.

use rust_decimal::Decimal;

use crate::banks::BankProfile;
use crate::models::boleto::Boleto;
use crate::models::config::BoletoConfig;

/// Trait for slip record validators.
pub trait RecordValidator {
    /// Every issue found in `boleto`; empty when the record is valid.
    fn validate(&self, boleto: &Boleto) -> Vec<String>;
}

/// Checks the common fields every slip must carry, the amount limit and
/// that the bank fields form a valid free field.
#[derive(Debug, Clone)]
pub struct PresenceValidator {
    max_amount: Decimal,
}

impl PresenceValidator {
    pub fn new() -> Self {
        Self::from_config(&BoletoConfig::default())
    }

    pub fn from_config(config: &BoletoConfig) -> Self {
        Self {
            max_amount: config.max_amount,
        }
    }
}

impl Default for PresenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordValidator for PresenceValidator {
    fn validate(&self, boleto: &Boleto) -> Vec<String> {
        let mut issues = Vec::new();

        match boleto.amount {
            None => issues.push("Missing amount".to_string()),
            Some(amount) if amount.is_sign_negative() && !amount.is_zero() => {
                issues.push(format!("Amount ({amount}) is negative"));
            }
            Some(amount) if amount > self.max_amount => {
                issues.push(format!(
                    "Amount ({amount}) exceeds the maximum of {}",
                    self.max_amount
                ));
            }
            Some(_) => {}
        }

        if boleto.due_date.is_none() {
            issues.push("Missing due date".to_string());
        }

        if boleto.payee.is_empty() {
            issues.push("Missing payee name".to_string());
        }

        if boleto.payer.is_empty() {
            issues.push("Missing payer name".to_string());
        }

        if boleto.payer.document.is_none() {
            issues.push("Missing payer document".to_string());
        }

        // Without a due date the layout error would only repeat the one above
        if boleto.due_date.is_some() {
            if let Err(e) = boleto.bank.barcode_free_field(&boleto.context()) {
                issues.push(format!("{}: {e}", boleto.bank.name()));
            }
        }

        issues
    }
}
