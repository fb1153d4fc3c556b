use std::fmt;

use serde::{Deserialize, Serialize};

/// The currency assumed when none is given
pub const DEFAULT_CURRENCY: &str = "GBP";

const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// An amount of money, held as a whole number of minor units (pence for GBP)
///
/// Matches the shape the banking API uses on the wire:
/// `{"currency": "GBP", "minorUnits": 950}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    currency: String,
    minor_units: i64,
}

impl Money {
    /// Create an amount from a currency code and a count of minor units
    pub fn new(currency: impl Into<String>, minor_units: i64) -> Self {
        Self {
            currency: currency.into(),
            minor_units,
        }
    }

    /// Create an amount in the default currency from a major-unit value.
    ///
    /// The scaled value is truncated toward zero, so `1.999` becomes 199
    /// minor units.
    #[must_use]
    pub fn from_major_units(value: f64) -> Self {
        Self::from_major_units_in(DEFAULT_CURRENCY, value)
    }

    /// Create an amount in the given currency from a major-unit value,
    /// truncating toward zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_major_units_in(currency: impl Into<String>, value: f64) -> Self {
        Self::new(currency, (value * MINOR_UNITS_PER_MAJOR) as i64)
    }

    /// Create an amount in the default currency from a major-unit value,
    /// rounding to the nearest minor unit.
    ///
    /// Only meant for displaying float totals. Amounts that are sent to the
    /// bank go through [`Money::from_major_units`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_major_units_rounded(value: f64) -> Self {
        Self::new(
            DEFAULT_CURRENCY,
            (value * MINOR_UNITS_PER_MAJOR).round() as i64,
        )
    }

    /// The ISO 4217 currency code
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The amount in minor units
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// The amount in major units (pounds for GBP)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_major_units(&self) -> f64 {
        self.minor_units as f64 / MINOR_UNITS_PER_MAJOR
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY, 0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rusty_money::iso::find(&self.currency) {
            Some(currency) => write!(
                f,
                "{}",
                rusty_money::Money::from_minor(self.minor_units, currency)
            ),
            None => write!(f, "{:.2} {}", self.to_major_units(), self.currency),
        }
    }
}
