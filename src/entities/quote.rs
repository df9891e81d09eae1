use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::entities::Currency;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareQuoteInput {
    pub distance_km: Decimal,
    pub waiting_minutes: Decimal,
    pub is_airport_transfer: bool,
    pub currency: Currency,
}

impl FareQuoteInput {
    pub fn new(
        distance_km: Decimal,
        waiting_minutes: Decimal,
        is_airport_transfer: bool,
        currency: Currency,
    ) -> Self {
        Self {
            distance_km: clamp(distance_km),
            waiting_minutes: clamp(waiting_minutes),
            is_airport_transfer,
            currency,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareQuote {
    pub amount: Decimal,
    pub currency: Currency,
}

impl FareQuote {
    /// Rounds half-up to cents and pins the scale so "34" renders as "34.00".
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);

        Self { amount, currency }
    }
}

impl fmt::Display for FareQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// Coerces a raw form entry into a non-negative amount. Anything unparsable counts as zero,
/// numbers too large for a `Decimal` count as `Decimal::MAX`.
pub fn coerce_amount(raw: &str) -> Decimal {
    let raw = raw.trim();

    match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        Ok(parsed) => clamp(parsed),
        Err(_) => raw.parse::<f64>().map_or(Decimal::ZERO, coerce_f64),
    }
}

fn coerce_f64(value: f64) -> Decimal {
    if value.is_nan() || value <= 0.0 {
        return Decimal::ZERO;
    }

    Decimal::from_f64(value).unwrap_or(Decimal::MAX)
}

fn clamp(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
