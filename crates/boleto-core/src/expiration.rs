//! Expiration factor ("fator de vencimento").

use std::fmt;

use chrono::NaiveDate;

use crate::error::{BoletoError, Result};
use crate::models::config::{ExpirationConfig, ExpirationOverflow};

/// Largest day count that fits the 4-digit field.
const MAX_FACTOR: i64 = 9999;

/// First factor of every rollover cycle.
const ROLLOVER_START: i64 = 1000;

/// A 4-digit day count between the base date and a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpirationFactor(u16);

impl ExpirationFactor {
    /// Compute the factor of `due_date`.
    ///
    /// Dates before the base date are rejected. Day counts above 9999 are
    /// handled according to `config.overflow`: `Rollover` restarts at 1000
    /// (2025-02-22 is factor 1000), `Reject` fails.
    pub fn from_due_date(due_date: NaiveDate, config: &ExpirationConfig) -> Result<Self> {
        let days = (due_date - config.base_date).num_days();

        let factor = match days {
            d if d < 0 => {
                return Err(BoletoError::ExpirationOutOfRange { date: due_date, days });
            }
            d if d <= MAX_FACTOR => d,
            d => match config.overflow {
                ExpirationOverflow::Rollover => {
                    let cycle = MAX_FACTOR - ROLLOVER_START + 1;
                    ROLLOVER_START + (d - MAX_FACTOR - 1) % cycle
                }
                ExpirationOverflow::Reject => {
                    return Err(BoletoError::ExpirationOutOfRange { date: due_date, days });
                }
            },
        };

        Ok(Self(factor as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ExpirationFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Expiration factor of `due_date` with the default base date and policy.
pub fn expiration_factor(due_date: NaiveDate) -> Result<ExpirationFactor> {
    ExpirationFactor::from_due_date(due_date, &ExpirationConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn factor(s: &str) -> String {
        expiration_factor(date(s)).unwrap().to_string()
    }

    #[test]
    fn test_pads_to_four_digits() {
        assert_eq!(factor("1997-10-08"), "0001");
        assert_eq!(factor("1997-10-07"), "0000");
    }

    #[test]
    fn test_documentation_dates() {
        assert_eq!(factor("2012-12-02"), "5535");
        assert_eq!(factor("2000-07-04"), "1001");
        assert_eq!(factor("2002-05-01"), "1667");
        assert_eq!(factor("2011-05-25"), "4978");
        assert_eq!(factor("2010-10-02"), "4743");
        assert_eq!(factor("2013-02-01"), "5596");
        assert_eq!(factor("2020-02-01"), "8152");
        assert_eq!(factor("2025-02-21"), "9999");
    }

    #[test]
    fn test_rollover_after_9999() {
        assert_eq!(factor("2025-02-22"), "1000");
        assert_eq!(factor("2025-02-23"), "1001");
        // 9000 days after the first rollover the cycle restarts again
        let next_cycle = date("2025-02-22") + chrono::Duration::days(9000);
        assert_eq!(expiration_factor(next_cycle).unwrap().value(), 1000);
        assert_eq!(
            expiration_factor(next_cycle - chrono::Duration::days(1)).unwrap().value(),
            9999
        );
    }

    #[test]
    fn test_reject_policy() {
        let config = ExpirationConfig {
            overflow: ExpirationOverflow::Reject,
            ..Default::default()
        };
        assert!(ExpirationFactor::from_due_date(date("2025-02-21"), &config).is_ok());
        assert!(matches!(
            ExpirationFactor::from_due_date(date("2025-02-22"), &config),
            Err(BoletoError::ExpirationOutOfRange { days: 10000, .. })
        ));
    }

    #[test]
    fn test_before_base_date() {
        assert!(matches!(
            expiration_factor(date("1997-10-06")),
            Err(BoletoError::ExpirationOutOfRange { days: -1, .. })
        ));
    }

    #[test]
    fn test_custom_base_date() {
        let config = ExpirationConfig {
            base_date: date("2000-01-01"),
            ..Default::default()
        };
        let f = ExpirationFactor::from_due_date(date("2000-01-11"), &config).unwrap();
        assert_eq!(f.to_string(), "0010");
    }
}
