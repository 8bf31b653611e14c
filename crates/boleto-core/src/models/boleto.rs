//! Slip record and its rendered summary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::banks::{Bank, BankProfile, SlipContext};
use crate::barcode::{build_barcode, Barcode};
use crate::error::Result;
use crate::models::config::BoletoConfig;

/// A bank slip: the common record plus the issuing bank's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boleto {
    /// Issuing bank and its bank-specific fields.
    pub bank: Bank,

    /// Amount due. Absent when the payer fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Payment due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Date the slip was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,

    /// Payee (cedente / beneficiário).
    #[serde(default)]
    pub payee: Party,

    /// Payer (sacado / pagador).
    #[serde(default)]
    pub payer: Party,

    /// Free-text instructions to the cashier.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
}

/// Payee or payer of a slip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Full legal name.
    pub name: String,

    /// CPF or CNPJ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Party {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl Boleto {
    /// Create a slip for `bank` with every common field empty.
    pub fn new(bank: Bank) -> Self {
        Self {
            bank,
            amount: None,
            due_date: None,
            document_date: None,
            payee: Party::default(),
            payer: Party::default(),
            instructions: Vec::new(),
        }
    }

    /// The slip data bank layouts read.
    pub fn context(&self) -> SlipContext {
        SlipContext {
            due_date: self.due_date,
            document_date: self.document_date,
            amount: self.amount,
        }
    }

    pub fn barcode(&self, config: &BoletoConfig) -> Result<Barcode> {
        build_barcode(&self.bank, &self.context(), config)
    }

    pub fn digitable_line(&self, config: &BoletoConfig) -> Result<String> {
        Ok(self.barcode(config)?.digitable_line())
    }

    pub fn our_number(&self) -> Result<String> {
        self.bank.our_number(&self.context())
    }

    /// Everything a rendering layer needs to print the slip.
    pub fn summary(&self, config: &BoletoConfig) -> Result<SlipSummary> {
        let barcode = self.barcode(config)?;
        debug!(bank = self.bank.name(), "Building slip summary");

        Ok(SlipSummary {
            bank_name: self.bank.name().to_string(),
            bank_code: self.bank.formatted_bank_code(),
            our_number: self.our_number()?,
            agency_and_assignee: self.bank.agency_and_assignee_display()?,
            wallet: self.bank.wallet_display(),
            species: config.species.clone(),
            document_species: config.document_species.clone(),
            acceptance: config.acceptance,
            payment_place: config.payment_place.clone(),
            amount: self.amount,
            due_date: self.due_date,
            document_date: self.document_date,
            payee: self.payee.name.clone(),
            payee_document: self.payee.document.clone(),
            payee_address: self.payee.address.clone(),
            payer: self.payer.name.clone(),
            payer_document: self.payer.document.clone(),
            payer_address: self.payer.address.clone(),
            instructions: self.instructions.clone(),
            digitable_line: barcode.digitable_line(),
            barcode: barcode.to_string(),
        })
    }
}

/// Serializable view of a computed slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlipSummary {
    pub bank_name: String,

    /// Bank code as printed, e.g. `237-2`.
    pub bank_code: String,

    pub our_number: String,

    pub agency_and_assignee: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,

    pub species: String,

    pub document_species: String,

    pub acceptance: bool,

    pub payment_place: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,

    pub payee: String,

    /// Payee CPF or CNPJ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_document: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_address: Option<String>,

    pub payer: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_document: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_address: Option<String>,

    /// Cashier instructions, in print order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,

    pub barcode: String,

    pub digitable_line: String,
}
