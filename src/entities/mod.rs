mod booking;
mod pricing;
mod quote;
mod vehicle;

pub use booking::{BookingRequest, Confirmation, Field, PaymentMethod, Status as BookingStatus};
pub use pricing::{Currency, PricingConfig};
pub use quote::{coerce_amount, FareQuote, FareQuoteInput};
pub use vehicle::{Category, Fleet, Vehicle};
