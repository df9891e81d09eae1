use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Sar,
    // declared for the South African market, never offered by the estimator
    Zar,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Sar => "SAR",
            Self::Zar => "ZAR",
        }
    }

    /// Currencies the estimator lets a visitor pick between.
    pub fn selectable() -> &'static [Currency] {
        &[Currency::Usd, Currency::Sar]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "SAR" => Ok(Self::Sar),
            "ZAR" => Ok(Self::Zar),
            _ => Err(invalid_input_error()),
        }
    }
}

/// Rate card used by the fare estimator. Supplied once and only ever read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub base_fare: Decimal,
    pub per_km: Decimal,
    pub waiting_time_rate: Decimal,
    pub airport_surcharge: Decimal,
    pub currency: Currency,
}

impl PricingConfig {
    pub fn new(
        base_fare: Decimal,
        per_km: Decimal,
        waiting_time_rate: Decimal,
        airport_surcharge: Decimal,
        currency: Currency,
    ) -> Result<Self, Error> {
        let rates = [base_fare, per_km, waiting_time_rate, airport_surcharge];
        if rates.iter().any(|rate| *rate < Decimal::ZERO) {
            return Err(invalid_input_error());
        }

        Ok(Self {
            base_fare,
            per_km,
            waiting_time_rate,
            airport_surcharge,
            currency,
        })
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_fare: Decimal::new(250, 2),
            per_km: Decimal::new(90, 2),
            waiting_time_rate: Decimal::new(40, 2),
            airport_surcharge: Decimal::new(500, 2),
            currency: Currency::Usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_card() {
        let config = PricingConfig::default();

        assert_eq!(config.base_fare.to_string(), "2.50");
        assert_eq!(config.per_km.to_string(), "0.90");
        assert_eq!(config.waiting_time_rate.to_string(), "0.40");
        assert_eq!(config.airport_surcharge.to_string(), "5.00");
        assert_eq!(config.currency, Currency::Usd);
    }

    #[test]
    fn rejects_negative_rates() {
        let result = PricingConfig::new(
            Decimal::new(-1, 0),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Currency::Usd,
        );

        assert!(result.is_err());
    }

    #[test]
    fn zar_is_parsed_but_not_selectable() {
        assert_eq!("zar".parse::<Currency>().unwrap(), Currency::Zar);
        assert!(!Currency::selectable().contains(&Currency::Zar));
    }

    #[test]
    fn currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Sar).unwrap(), "\"SAR\"");
    }
}
