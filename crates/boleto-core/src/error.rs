//! Error types for the boleto-core library.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the boleto library.
#[derive(Error, Debug)]
pub enum BoletoError {
    /// Check-digit computation error.
    #[error("check digit error: {0}")]
    CheckDigit(#[from] CheckDigitError),

    /// A field value is not a sequence of decimal digits.
    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumeric { field: String, value: String },

    /// A field required to compute the slip is absent.
    #[error("incomplete record: missing {0}")]
    IncompleteRecord(String),

    /// The bank has no layout for this wallet (carteira).
    #[error("{bank} does not support wallet {wallet:?}")]
    UnsupportedWallet { bank: String, wallet: String },

    /// The bank has no layout for an assignee code of this length.
    #[error("{bank} does not support a {length}-digit assignee code")]
    UnsupportedAssigneeCode { bank: String, length: usize },

    /// The amount cannot be encoded in the 10-digit barcode field.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(Decimal),

    /// The due date cannot be encoded as a 4-digit expiration factor.
    #[error("due date {date} out of range ({days} days from base date)")]
    ExpirationOutOfRange { date: NaiveDate, days: i64 },

    /// A bank layout produced a free field of the wrong width.
    #[error("{bank} free field has {length} digits, expected 25")]
    FreeFieldLength { bank: String, length: usize },

    /// The input is not a valid 44-digit barcode.
    #[error("invalid barcode: {0}")]
    InvalidBarcode(String),

    /// The input is not a valid linha digitável.
    #[error("invalid digitable line: {0}")]
    InvalidDigitableLine(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the check-digit algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckDigitError {
    /// Input was empty or contained a non-digit character.
    #[error("input must be a non-empty string of digits, got {input:?}")]
    InvalidInput { input: String },
}

/// Result type for the boleto library.
pub type Result<T> = std::result::Result<T, BoletoError>;
