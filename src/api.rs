use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{BookingRequest, Confirmation};
use crate::error::Error;

/// Remote side of the booking flow: accepts a completed request and either confirms it or
/// reports why it was refused.
#[async_trait]
pub trait ReservationAPI {
    async fn submit_booking(&self, request: BookingRequest) -> Result<Confirmation, Error>;
}

pub type DynReservationAPI = Arc<dyn ReservationAPI + Send + Sync>;
