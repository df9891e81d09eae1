mod fare;
mod intake;

pub use fare::{compute_fare, FareEstimator};
pub use intake::{BookingIntake, FlowSnapshot};
