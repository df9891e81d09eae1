use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    api::DynReservationAPI,
    entities::{Currency, PricingConfig},
    error::{config_error, Error},
    external::{HttpReservations, SimulatedReservations},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub reservations_api_base: Option<String>,
    pub simulated_delay: Duration,
    pub currency: Currency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reservations_api_base: None,
            simulated_delay: SimulatedReservations::DEFAULT_DELAY,
            currency: Currency::Usd,
        }
    }
}

impl Config {
    /// Reads `RESERVATIONS_API_BASE`, `BOOKING_SIMULATED_DELAY_MS` and `PRICING_CURRENCY`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.reservations_api_base = lookup("RESERVATIONS_API_BASE")
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty());

        if let Some(raw) = lookup("BOOKING_SIMULATED_DELAY_MS") {
            let millis: u64 = raw.trim().parse().map_err(config_error)?;
            config.simulated_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("PRICING_CURRENCY") {
            config.currency = raw.parse()?;
        }

        Ok(config)
    }

    pub fn pricing(&self) -> PricingConfig {
        PricingConfig::default().with_currency(self.currency)
    }

    pub fn reservations(&self) -> DynReservationAPI {
        match &self.reservations_api_base {
            Some(base) => {
                tracing::info!("submitting bookings to {}", base);
                Arc::new(HttpReservations::new(base.clone()))
            }
            None => {
                tracing::info!(
                    "no reservations endpoint configured, simulating with {:?} latency",
                    self.simulated_delay
                );
                Arc::new(SimulatedReservations::new(self.simulated_delay))
            }
        }
    }
}
