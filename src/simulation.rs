use crate::{
    entities::{BookingStatus, Field, PaymentMethod},
    error::{unexpected_error, Error},
    ui::{LandingPage, Section},
};

/// Scripted visitor used by the demo binary.
#[derive(Clone, Debug)]
pub struct Visitor {
    pub distance: String,
    pub waiting: String,
    pub airport: bool,
    pub vehicle: Option<String>,
    pub details: Vec<(Field, String)>,
    pub payment_method: PaymentMethod,
}

impl Default for Visitor {
    fn default() -> Self {
        let details = [
            (Field::FullName, "Jane Roe"),
            (Field::Phone, "+1 555 0100"),
            (Field::Email, "jane@example.com"),
            (Field::PickupAddress, "International Airport, Terminal 1"),
            (Field::DestinationAddress, "Harbour Hotel"),
            (Field::Date, "2026-11-02"),
            (Field::Time, "08:30"),
            (Field::FlightNumber, "XY123"),
        ];

        Self {
            distance: "25".into(),
            waiting: "10".into(),
            airport: true,
            vehicle: None,
            details: details
                .iter()
                .map(|(field, value)| (*field, value.to_string()))
                .collect(),
            payment_method: PaymentMethod::Card,
        }
    }
}

pub struct Simulation {
    page: LandingPage,
}

impl Simulation {
    pub fn new(page: LandingPage) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &LandingPage {
        &self.page
    }

    /// Walks one visitor from the fare estimator through to a submitted booking and returns
    /// where the booking flow ended up.
    #[tracing::instrument(skip_all)]
    pub async fn run(&mut self, visitor: &Visitor) -> Result<BookingStatus, Error> {
        self.page.cookie_banner.accept();
        self.page.navbar.on_scroll(640.0);
        self.page.navbar.scroll_to(Section::Pricing);

        self.page.estimator.set_distance(&visitor.distance);
        self.page.estimator.set_waiting(&visitor.waiting);
        self.page.estimator.set_airport_transfer(visitor.airport);
        tracing::info!("estimated fare: {}", self.page.estimator.quote());

        match &visitor.vehicle {
            Some(vehicle) => self.page.book_vehicle(vehicle).await?,
            None => self.page.get_exact_quote().await,
        };

        let booking = self.page.booking();
        for (field, value) in &visitor.details {
            booking.edit(*field, value.clone()).await?;
        }
        booking.set_payment_method(visitor.payment_method).await?;
        booking.set_consent(true).await?;

        let completion = booking.submit().await?;
        tracing::info!("booking submitted, waiting for confirmation");

        if completion.await.is_err() {
            return Err(unexpected_error());
        }

        let status = booking.status().await.ok_or_else(unexpected_error)?;
        tracing::info!("booking flow finished as {}", status.name());

        booking.close().await;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::entities::{Fleet, PricingConfig};
    use crate::external::SimulatedReservations;

    fn simulation() -> Simulation {
        Simulation::new(LandingPage::new(
            PricingConfig::default(),
            Fleet::default(),
            Arc::new(SimulatedReservations::default()),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn default_visitor_books_successfully() {
        let mut simulation = simulation();

        let status = simulation.run(&Visitor::default()).await.unwrap();

        assert_eq!(status.name(), "success");
        assert_eq!(simulation.page().estimator.quote().to_string(), "USD 34.00");
        assert!(!simulation.page().is_scroll_locked());
        assert!(!simulation.page().booking().is_open().await);
    }

    #[tokio::test(start_paused = true)]
    async fn incomplete_visitor_is_stopped_by_validation() {
        let mut simulation = simulation();
        let mut visitor = Visitor::default();
        visitor.details.retain(|(field, _)| *field != Field::Date);

        let err = simulation.run(&visitor).await.unwrap_err();

        assert_eq!(err.code, 102);
        assert_eq!(
            simulation.page().booking().status().await,
            Some(BookingStatus::Idle)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn visitor_can_pick_a_vehicle() {
        let mut simulation = simulation();
        let visitor = Visitor {
            vehicle: Some("van".into()),
            ..Visitor::default()
        };

        assert_eq!(simulation.run(&visitor).await.unwrap().name(), "success");
    }
}
