//! Supported currencies and the fixed ruble exchange rates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::LimitError, utils::round_places};

/// Rubles per US dollar.
pub const USD_RATE: f64 = 77.98;
/// Rubles per euro.
pub const EUR_RATE: f64 = 92.07;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// Lowercase code accepted on input.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    /// Label used when printing amounts.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
        }
    }

    /// Rubles per unit of this currency.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Rub => 1.0,
            Currency::Usd => USD_RATE,
            Currency::Eur => EUR_RATE,
        }
    }

    /// Converts a ruble amount into this currency, rounded to cents.
    pub fn convert(self, rubles: f64) -> f64 {
        round_places(rubles / self.rate(), 2)
    }
}

impl FromStr for Currency {
    type Err = LimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| LimitError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
