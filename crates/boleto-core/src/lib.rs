//! Core library for Brazilian bank slips (boletos bancários).
//!
//! This crate provides:
//! - Check-digit algorithms (modulo 10, modulo 11 variants, control number)
//! - Expiration factor computation with FEBRABAN rollover
//! - Bank profiles for ten banks and their 25-digit free fields
//! - 44-digit barcode assembly and parsing
//! - Linha digitável formatting and parsing
//!
//! Every operation is a pure function over immutable inputs.

pub mod banks;
pub mod barcode;
pub mod check_digit;
pub mod digitable_line;
pub mod error;
pub mod expiration;
pub mod models;
pub mod validation;

pub use banks::{Bank, BankProfile, FreeField, FreeFieldBuilder, SlipContext};
pub use barcode::{assemble, build_barcode, format_amount, Barcode};
pub use check_digit::{Algorithm, CheckDigit, ControlNumber};
pub use digitable_line::{barcode_from_digitable_line, digitable_line};
pub use error::{BoletoError, CheckDigitError, Result};
pub use expiration::{expiration_factor, ExpirationFactor};
pub use models::{
    Boleto, BoletoConfig, ExpirationConfig, ExpirationOverflow, NumericString, Party, SlipSummary,
};
pub use validation::{PresenceValidator, RecordValidator};
