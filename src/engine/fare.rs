use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    entities::{coerce_amount, Currency, FareQuote, FareQuoteInput, PricingConfig},
    error::{invalid_input_error, Error},
};

/// Evaluates the rate card for one trip. Pure, so it can run on every keystroke.
/// Every term is non-negative, so overflow saturates at `Decimal::MAX`.
pub fn compute_fare(config: &PricingConfig, input: &FareQuoteInput) -> FareQuote {
    let mut total = config.base_fare;
    total = add(total, mul(input.distance_km, config.per_km));
    total = add(total, mul(input.waiting_minutes, config.waiting_time_rate));

    if input.is_airport_transfer {
        total = add(total, config.airport_surcharge);
    }

    FareQuote::new(total, input.currency)
}

fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

/// State behind the fare estimator widget. Raw entries are coerced as they arrive,
/// the currency is a display label only.
#[derive(Clone, Debug)]
pub struct FareEstimator {
    config: Arc<PricingConfig>,
    distance_km: Decimal,
    waiting_minutes: Decimal,
    is_airport_transfer: bool,
    currency: Currency,
}

impl FareEstimator {
    pub fn new(config: Arc<PricingConfig>) -> Self {
        let currency = config.currency;

        Self {
            config,
            distance_km: Decimal::ZERO,
            waiting_minutes: Decimal::ZERO,
            is_airport_transfer: false,
            currency,
        }
    }

    pub fn set_distance(&mut self, raw: &str) {
        self.distance_km = coerce_amount(raw);
    }

    pub fn set_waiting(&mut self, raw: &str) {
        self.waiting_minutes = coerce_amount(raw);
    }

    pub fn set_airport_transfer(&mut self, is_airport_transfer: bool) {
        self.is_airport_transfer = is_airport_transfer;
    }

    pub fn select_currency(&mut self, currency: Currency) -> Result<(), Error> {
        if !Currency::selectable().contains(&currency) {
            return Err(invalid_input_error());
        }

        tracing::debug!("estimator currency switched to {}", currency);
        self.currency = currency;
        Ok(())
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn input(&self) -> FareQuoteInput {
        FareQuoteInput::new(
            self.distance_km,
            self.waiting_minutes,
            self.is_airport_transfer,
            self.currency,
        )
    }

    pub fn quote(&self) -> FareQuote {
        compute_fare(&self.config, &self.input())
    }

    /// Text next to the airport checkbox, e.g. "+USD 5.00".
    pub fn surcharge_label(&self) -> String {
        format!(
            "+{}",
            FareQuote::new(self.config.airport_surcharge, self.currency)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(distance: i64, waiting: i64, airport: bool) -> FareQuoteInput {
        FareQuoteInput::new(
            Decimal::new(distance, 0),
            Decimal::new(waiting, 0),
            airport,
            Currency::Usd,
        )
    }

    #[test]
    fn worked_example() {
        let quote = compute_fare(&PricingConfig::default(), &input(25, 10, true));

        assert_eq!(quote.amount, Decimal::new(3400, 2));
        assert_eq!(quote.to_string(), "USD 34.00");
    }

    #[test]
    fn empty_trip_costs_base_fare() {
        let config = PricingConfig::default();
        let quote = compute_fare(&config, &input(0, 0, false));

        assert_eq!(quote.amount, config.base_fare);
    }

    #[test]
    fn airport_adds_exactly_the_surcharge() {
        let config = PricingConfig::default();

        for (distance, waiting) in [(0, 0), (3, 7), (40, 25), (120, 0)] {
            let with = compute_fare(&config, &input(distance, waiting, true));
            let without = compute_fare(&config, &input(distance, waiting, false));

            assert_eq!(with.amount - without.amount, config.airport_surcharge);
        }
    }

    #[test]
    fn monotonic_in_distance_and_waiting() {
        let config = PricingConfig::default();

        let mut previous = compute_fare(&config, &input(0, 5, false)).amount;
        for distance in 1..60 {
            let next = compute_fare(&config, &input(distance, 5, false)).amount;
            assert!(next >= previous);
            previous = next;
        }

        let mut previous = compute_fare(&config, &input(12, 0, true)).amount;
        for waiting in 1..60 {
            let next = compute_fare(&config, &input(12, waiting, true)).amount;
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn estimator_coerces_bad_entries() {
        let mut estimator = FareEstimator::new(Arc::new(PricingConfig::default()));
        estimator.set_distance("-12");
        estimator.set_waiting("soon");

        assert_eq!(estimator.quote().to_string(), "USD 2.50");
    }

    #[test]
    fn huge_entries_saturate_instead_of_overflowing() {
        let mut estimator = FareEstimator::new(Arc::new(PricingConfig::default()));
        estimator.set_distance("79228162514264337593543950335");
        estimator.set_waiting("79228162514264337593543950335");
        estimator.set_airport_transfer(true);

        assert!(estimator.quote().amount > Decimal::from(u64::MAX));

        estimator.set_distance("1e100");
        estimator.set_waiting("0");
        assert!(estimator.quote().amount > Decimal::from(u64::MAX));
    }

    #[test]
    fn field_order_does_not_matter() {
        let config = Arc::new(PricingConfig::default());

        let mut first = FareEstimator::new(config.clone());
        first.set_distance("25");
        first.set_waiting("10");
        first.set_airport_transfer(true);

        let mut second = FareEstimator::new(config);
        second.set_airport_transfer(true);
        second.set_waiting("10");
        second.set_distance("25");

        assert_eq!(first.quote(), second.quote());
        assert_eq!(first.quote(), first.quote());
    }

    #[test]
    fn currency_switch_only_changes_label() {
        let mut estimator = FareEstimator::new(Arc::new(PricingConfig::default()));
        estimator.set_distance("25");
        estimator.set_waiting("10");
        estimator.set_airport_transfer(true);

        let usd = estimator.quote();
        estimator.select_currency(Currency::Sar).unwrap();
        let sar = estimator.quote();

        assert_eq!(usd.amount, sar.amount);
        assert_eq!(sar.to_string(), "SAR 34.00");
        assert_eq!(estimator.surcharge_label(), "+SAR 5.00");
    }

    #[test]
    fn zar_cannot_be_selected() {
        let mut estimator = FareEstimator::new(Arc::new(PricingConfig::default()));

        assert!(estimator.select_currency(Currency::Zar).is_err());
        assert_eq!(estimator.currency(), Currency::Usd);
    }
}
