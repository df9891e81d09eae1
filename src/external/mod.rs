mod reservations;
mod simulated;

pub use reservations::HttpReservations;
pub use simulated::SimulatedReservations;
