//! Data models: slip record, configuration and digit strings.

pub mod boleto;
pub mod config;
pub mod numeric;

pub use boleto::{Boleto, Party, SlipSummary};
pub use config::{BoletoConfig, ExpirationConfig, ExpirationOverflow};
pub use numeric::NumericString;
