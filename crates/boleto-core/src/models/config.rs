//! Configuration structures for slip generation.

use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BoletoError, Result};

/// Main configuration for slip generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoletoConfig {
    /// Currency code written at barcode position 4 ("9" is Real).
    pub currency_code: String,

    /// Currency species printed on the slip.
    pub species: String,

    /// Document species ("DM" is duplicata mercantil).
    pub document_species: String,

    /// Payment place printed on the slip.
    pub payment_place: String,

    /// Whether the payer acknowledges the debt ("aceite").
    pub acceptance: bool,

    /// Largest amount a slip may carry.
    pub max_amount: Decimal,

    /// Expiration factor configuration.
    pub expiration: ExpirationConfig,
}

impl Default for BoletoConfig {
    fn default() -> Self {
        Self {
            currency_code: "9".to_string(),
            species: "R$".to_string(),
            document_species: "DM".to_string(),
            payment_place: "PAGÁVEL EM QUALQUER BANCO ATÉ O VENCIMENTO".to_string(),
            acceptance: true,
            max_amount: Decimal::new(9_999_999_999, 2),
            expiration: ExpirationConfig::default(),
        }
    }
}

/// How due dates are turned into 4-digit expiration factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpirationConfig {
    /// Day zero of the factor.
    pub base_date: NaiveDate,

    /// What to do once the day count no longer fits in 4 digits.
    pub overflow: ExpirationOverflow,
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        Self {
            base_date: NaiveDate::from_ymd_opt(1997, 10, 7).unwrap_or_default(),
            overflow: ExpirationOverflow::default(),
        }
    }
}

/// Policy for day counts past 9999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationOverflow {
    /// Restart at 1000 and cycle over 9000 values (FEBRABAN, from 2025-02-22).
    #[default]
    Rollover,
    /// Refuse the due date.
    Reject,
}

impl BoletoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| BoletoError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| BoletoError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the barcode cannot carry.
    pub fn check(&self) -> Result<()> {
        if self.currency_code.len() != 1 || !self.currency_code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(BoletoError::Config(format!(
                "currency_code must be a single digit, got {:?}",
                self.currency_code
            )));
        }

        if self.max_amount.is_sign_negative() || self.max_amount > Decimal::new(9_999_999_999, 2) {
            return Err(BoletoError::Config(format!(
                "max_amount must be between 0 and 99999999.99, got {}",
                self.max_amount
            )));
        }

        Ok(())
    }
}
