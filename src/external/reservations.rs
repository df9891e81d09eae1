use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    api::ReservationAPI,
    entities::{BookingRequest, Confirmation},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Rejection {
    error: String,
}

/// Posts bookings to a reservations service as JSON.
#[derive(Clone, Debug)]
pub struct HttpReservations {
    client: reqwest::Client,
    api_base: String,
}

impl HttpReservations {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/reservations", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ReservationAPI for HttpReservations {
    #[tracing::instrument(skip(self, request), fields(vehicle = %request.vehicle_type))]
    async fn submit_booking(&self, request: BookingRequest) -> Result<Confirmation, Error> {
        let res = self.client.post(self.endpoint()).json(&request).send().await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            let mut err = invalid_input_error();
            if let Ok(rejection) = res.json::<Rejection>().await {
                err.message = rejection.error;
            }

            tracing::warn!("reservation rejected with status {}", status_code);
            return Err(err);
        } else if !(200..300).contains(&status_code) {
            tracing::warn!("reservation service answered {}", status_code);
            return Err(upstream_error());
        }

        let confirmation: Confirmation = res.json().await?;

        Ok(confirmation)
    }
}
