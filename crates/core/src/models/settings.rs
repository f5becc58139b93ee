use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Largest number of fraction digits accepted for amount display.
pub const MAX_FRACTION_DIGITS: u32 = 8;

/// Display settings for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// ISO currency code prices are entered in (e.g., "PHP", "USD").
    pub currency_code: String,

    /// Symbol prefixed to formatted amounts (e.g., "₱").
    pub currency_symbol: String,

    /// Fraction digits shown for amounts.
    pub fraction_digits: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_code: "PHP".to_string(),
            currency_symbol: "\u{20B1}".to_string(),
            fraction_digits: 2,
        }
    }
}

impl Settings {
    /// Check that the currency code is 3 ASCII letters, the symbol is
    /// non-empty, and the fraction digits are within range.
    pub fn validate(&self) -> Result<(), CoreError> {
        let code = &self.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CoreError::InvalidSetting(format!(
                "Invalid currency code '{code}': expected 3 uppercase letters (e.g., PHP)"
            )));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(CoreError::InvalidSetting(
                "Currency symbol must not be empty".into(),
            ));
        }
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(CoreError::InvalidSetting(format!(
                "Fraction digits {} exceeds maximum of {MAX_FRACTION_DIGITS}",
                self.fraction_digits
            )));
        }
        Ok(())
    }

    /// Format an amount as symbol + number, rounded half away from zero.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        format!(
            "{}{:.*}",
            self.currency_symbol, self.fraction_digits as usize, rounded
        )
    }
}
