use std::time::Duration;

use async_trait::async_trait;

use crate::{
    api::ReservationAPI,
    entities::{BookingRequest, Confirmation},
    error::Error,
};

/// Stand-in for a reservations backend: waits a fixed latency, then accepts everything.
#[derive(Clone, Debug)]
pub struct SimulatedReservations {
    delay: Duration,
}

impl SimulatedReservations {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedReservations {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl ReservationAPI for SimulatedReservations {
    #[tracing::instrument(skip(self, request))]
    async fn submit_booking(&self, request: BookingRequest) -> Result<Confirmation, Error> {
        tokio::time::sleep(self.delay).await;

        let confirmation = Confirmation::new();
        tracing::info!(
            "booking received for {} ({}), reference {}",
            request.full_name,
            request.vehicle_type,
            confirmation.reference
        );

        Ok(confirmation)
    }
}
