use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    CheckedIn,
    Cancelled,
    /// Any other label; the backend stores status as free text.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::CheckedIn => "CHECKED_IN",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Ticket tier offered at purchase time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FareClass {
    #[default]
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

impl FareClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FareClass::Economy => "Economy",
            FareClass::PremiumEconomy => "Premium Economy",
            FareClass::Business => "Business",
            FareClass::First => "First",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking row. The backend joins passenger columns into flight-scoped
/// listings; those extra fields are ignored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub booking_id: i64,
    pub passenger_id: i64,
    pub flight_id: i64,
    #[serde(default)]
    pub booking_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub seat_number: Option<String>,
    // Free text on the wire: roster edits may store any tier label.
    #[serde(default)]
    pub fare_class: Option<String>,
    pub status: BookingStatus,
}

/// Body for `POST /bookings/`. The backend stamps the date and sets `CONFIRMED`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    pub passenger_id: i64,
    pub flight_id: i64,
    pub seat_number: Option<String>,
    pub fare_class: Option<FareClass>,
}

/// Partial body for `PUT /bookings/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}
