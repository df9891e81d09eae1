mod cookie_banner;
mod navbar;
mod viewport;

pub use cookie_banner::{CookieBanner, CookieChoice};
pub use navbar::{Navbar, Section};
pub use viewport::{ScrollLock, Viewport};

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::DynReservationAPI,
    engine::{BookingIntake, FareEstimator},
    entities::{Fleet, PricingConfig},
    error::{unknown_vehicle_error, Error},
};

/// Landing page state. Each widget owns its own flags; the page only wires them together.
pub struct LandingPage {
    pub navbar: Navbar,
    pub cookie_banner: CookieBanner,
    pub estimator: FareEstimator,
    booking: BookingIntake,
    viewport: Viewport,
}

impl LandingPage {
    pub fn new(pricing: PricingConfig, fleet: Fleet, reservations: DynReservationAPI) -> Self {
        let viewport = Viewport::new();

        Self {
            navbar: Navbar::new(),
            cookie_banner: CookieBanner::new(),
            estimator: FareEstimator::new(Arc::new(pricing)),
            booking: BookingIntake::new(Arc::new(fleet), reservations, viewport.clone()),
            viewport,
        }
    }

    pub fn booking(&self) -> &BookingIntake {
        &self.booking
    }

    pub fn fleet(&self) -> &Fleet {
        self.booking.fleet()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.viewport.is_scroll_locked()
    }

    /// "Book a Ride" in the navbar and hero.
    pub async fn book_ride(&self) -> Uuid {
        self.booking.open(None).await
    }

    /// "Get Exact Quote" on the fare estimator.
    pub async fn get_exact_quote(&self) -> Uuid {
        self.booking.open(None).await
    }

    /// "Book This Car" on a fleet card.
    pub async fn book_vehicle(&self, vehicle_id: &str) -> Result<Uuid, Error> {
        if !self.fleet().contains(vehicle_id) {
            return Err(unknown_vehicle_error(vehicle_id));
        }

        Ok(self.booking.open(Some(vehicle_id.into())).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BookingStatus;
    use crate::external::SimulatedReservations;

    fn page() -> LandingPage {
        LandingPage::new(
            PricingConfig::default(),
            Fleet::default(),
            Arc::new(SimulatedReservations::default()),
        )
    }

    #[test]
    fn booking_shares_the_page_fleet() {
        let page = page();

        let instance = tokio_test::block_on(page.book_ride());
        let snapshot = tokio_test::block_on(page.booking().snapshot()).unwrap();

        assert_eq!(snapshot.instance, instance);
        assert!(page.fleet().contains(&snapshot.draft.vehicle_type));
    }

    #[tokio::test(start_paused = true)]
    async fn fleet_card_preselects_vehicle() {
        let page = page();

        page.book_vehicle("exec").await.unwrap();

        let snapshot = page.booking().snapshot().await.unwrap();
        assert_eq!(snapshot.draft.vehicle_type, "exec");
        assert_eq!(snapshot.status, BookingStatus::Idle);
        assert!(page.is_scroll_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_fleet_card_does_not_open() {
        let page = page();

        assert_eq!(page.book_vehicle("hovercraft").await.unwrap_err().code, 104);
        assert!(!page.booking().is_open().await);
        assert!(!page.is_scroll_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn exact_quote_opens_default_booking() {
        let mut page = page();
        page.estimator.set_distance("25");

        page.get_exact_quote().await;

        let snapshot = page.booking().snapshot().await.unwrap();
        assert_eq!(snapshot.draft.vehicle_type, Fleet::DEFAULT_VEHICLE_ID);
        assert_eq!(page.estimator.quote().to_string(), "USD 25.00");
    }

    #[tokio::test(start_paused = true)]
    async fn widgets_keep_independent_state() {
        let mut page = page();

        page.navbar.toggle_menu();
        page.cookie_banner.accept();
        page.book_ride().await;
        page.booking().close().await;

        assert!(page.navbar.is_menu_open());
        assert!(!page.cookie_banner.is_visible());
        assert!(!page.is_scroll_locked());
    }
}
