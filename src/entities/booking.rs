use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Fleet;
use crate::error::{
    consent_required_error, invalid_input_error, missing_fields_error, unknown_vehicle_error,
    Error,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    ApplePay,
    GooglePay,
    #[serde(rename = "EFT")]
    Eft,
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Card" => Ok(Self::Card),
            "Cash" => Ok(Self::Cash),
            "ApplePay" => Ok(Self::ApplePay),
            "GooglePay" => Ok(Self::GooglePay),
            "EFT" => Ok(Self::Eft),
            _ => Err(invalid_input_error()),
        }
    }
}

/// Text inputs of the booking form, named as they are on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    PickupAddress,
    DestinationAddress,
    Date,
    Time,
    VehicleType,
    FlightNumber,
    PromoCode,
    SpecialInstructions,
}

impl Field {
    pub const REQUIRED: [Field; 8] = [
        Field::FullName,
        Field::Phone,
        Field::Email,
        Field::PickupAddress,
        Field::DestinationAddress,
        Field::Date,
        Field::Time,
        Field::VehicleType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PickupAddress => "pickupAddress",
            Self::DestinationAddress => "destinationAddress",
            Self::Date => "date",
            Self::Time => "time",
            Self::VehicleType => "vehicleType",
            Self::FlightNumber => "flightNumber",
            Self::PromoCode => "promoCode",
            Self::SpecialInstructions => "specialInstructions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "pickupAddress" => Ok(Self::PickupAddress),
            "destinationAddress" => Ok(Self::DestinationAddress),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "vehicleType" => Ok(Self::VehicleType),
            "flightNumber" => Ok(Self::FlightNumber),
            "promoCode" => Ok(Self::PromoCode),
            "specialInstructions" => Ok(Self::SpecialInstructions),
            _ => Err(invalid_input_error()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub pickup_address: String,
    pub destination_address: String,
    pub date: String,
    pub time: String,
    pub vehicle_type: String,
    pub flight_number: Option<String>,
    pub payment_method: PaymentMethod,
    pub promo_code: Option<String>,
    pub special_instructions: Option<String>,
    pub consent: bool,
}

impl BookingRequest {
    pub fn new(vehicle_type: Option<String>) -> Self {
        Self {
            vehicle_type: vehicle_type.unwrap_or_else(|| Fleet::DEFAULT_VEHICLE_ID.into()),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::PickupAddress => Some(&self.pickup_address),
            Field::DestinationAddress => Some(&self.destination_address),
            Field::Date => Some(&self.date),
            Field::Time => Some(&self.time),
            Field::VehicleType => Some(&self.vehicle_type),
            Field::FlightNumber => self.flight_number.as_deref(),
            Field::PromoCode => self.promo_code.as_deref(),
            Field::SpecialInstructions => self.special_instructions.as_deref(),
        }
    }

    /// Writes one field. Blank optional fields are stored as absent.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let optional = |value: String| {
            if value.trim().is_empty() {
                None
            } else {
                Some(value)
            }
        };

        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::PickupAddress => self.pickup_address = value,
            Field::DestinationAddress => self.destination_address = value,
            Field::Date => self.date = value,
            Field::Time => self.time = value,
            Field::VehicleType => self.vehicle_type = value,
            Field::FlightNumber => self.flight_number = optional(value),
            Field::PromoCode => self.promo_code = optional(value),
            Field::SpecialInstructions => self.special_instructions = optional(value),
        }
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .iter()
            .copied()
            .filter(|&field| self.get(field).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// Client-side constraint check run before every submission attempt.
    pub fn validate(&self, fleet: &Fleet) -> Result<(), Error> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }

        if !fleet.contains(&self.vehicle_type) {
            return Err(unknown_vehicle_error(&self.vehicle_type));
        }

        if !self.consent {
            return Err(consent_required_error());
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl Confirmation {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for Confirmation {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Idle,
    Submitting,
    Success { confirmation: Confirmation },
    Error { reason: String },
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::Submitting => "submitting".into(),
            Self::Success { confirmation: _ } => "success".into(),
            Self::Error { reason: _ } => "error".into(),
        }
    }

    pub fn accepts_submission(&self) -> bool {
        match self {
            Self::Idle | Self::Error { reason: _ } => true,
            _ => false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            Self::Submitting => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> BookingRequest {
        let mut request = BookingRequest::new(None);
        request.set(Field::FullName, "Jane Roe");
        request.set(Field::Email, "jane@example.com");
        request.set(Field::Phone, "+1 555 0100");
        request.set(Field::PickupAddress, "Terminal 1");
        request.set(Field::DestinationAddress, "Harbour Hotel");
        request.set(Field::Date, "2026-11-02");
        request.set(Field::Time, "08:30");
        request.consent = true;
        request
    }

    #[test]
    fn new_request_defaults_to_economy() {
        let request = BookingRequest::new(None);

        assert_eq!(request.vehicle_type, "economy");
        assert_eq!(request.payment_method, PaymentMethod::Card);
        assert!(!request.consent);
    }

    #[test]
    fn complete_request_validates() {
        assert!(complete_request().validate(&Fleet::default()).is_ok());
    }

    #[test]
    fn reports_every_missing_field() {
        let mut request = complete_request();
        request.set(Field::Email, "   ");
        request.set(Field::Time, "");

        assert_eq!(request.missing_fields(), vec![Field::Email, Field::Time]);

        let err = request.validate(&Fleet::default()).unwrap_err();
        assert_eq!(err.code, 102);
        assert!(err.message.contains("email"));
        assert!(err.message.contains("time"));
    }

    #[test]
    fn consent_is_required() {
        let mut request = complete_request();
        request.consent = false;

        assert_eq!(request.validate(&Fleet::default()).unwrap_err().code, 103);
    }

    #[test]
    fn vehicle_must_exist_in_fleet() {
        let mut request = complete_request();
        request.set(Field::VehicleType, "limousine");

        assert_eq!(request.validate(&Fleet::default()).unwrap_err().code, 104);
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let mut request = complete_request();
        request.set(Field::FlightNumber, "XY123");
        request.set(Field::PromoCode, " ");

        assert_eq!(request.get(Field::FlightNumber), Some("XY123"));
        assert_eq!(request.promo_code, None);
    }

    #[test]
    fn serializes_with_form_field_names() {
        let value = serde_json::to_value(complete_request()).unwrap();

        assert_eq!(value["fullName"], "Jane Roe");
        assert_eq!(value["vehicleType"], "economy");
        assert_eq!(value["paymentMethod"], "Card");
        assert_eq!(value["consent"], true);
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in Field::REQUIRED {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert!("nickname".parse::<Field>().is_err());
    }

    #[test]
    fn eft_uses_upper_case_wire_name() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Eft).unwrap(), "\"EFT\"");
        assert_eq!("EFT".parse::<PaymentMethod>().unwrap(), PaymentMethod::Eft);
    }
}
