use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of a flight as the backend spells it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FlightStatus {
    #[default]
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    Cancelled,
    Boarding,
    Departed,
    Arrived,
    #[serde(other)]
    Unknown,
}

impl FlightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::Unknown => "Unknown",
        }
    }

    /// Badge colour for the status; unknown values get the neutral grey.
    pub fn color(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "#10b981",
            FlightStatus::Delayed => "#f59e0b",
            FlightStatus::Cancelled => "#ef4444",
            FlightStatus::Boarding => "#3b82f6",
            FlightStatus::Departed => "#8b5cf6",
            FlightStatus::Arrived | FlightStatus::Unknown => "#6b7280",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub flight_id: i64,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(with = "timestamp")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub arrival_time: NaiveDateTime,
    pub status: FlightStatus,
}

/// Body for both `POST /flights/` and `PUT /flights/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightDraft {
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(with = "timestamp")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub arrival_time: NaiveDateTime,
    #[serde(default)]
    pub status: FlightStatus,
}

impl FlightDraft {
    /// Trims the flight number and uppercases both airport codes.
    pub fn normalized(&self) -> Self {
        Self {
            flight_number: self.flight_number.trim().to_string(),
            departure_airport: self.departure_airport.trim().to_uppercase(),
            arrival_airport: self.arrival_airport.trim().to_uppercase(),
            ..self.clone()
        }
    }
}

impl From<&Flight> for FlightDraft {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            departure_airport: flight.departure_airport.clone(),
            arrival_airport: flight.arrival_airport.clone(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            status: flight.status,
        }
    }
}

/// Naive ISO-8601 timestamps. Accepts the minute precision that
/// `datetime-local` inputs produce as well as full seconds.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const ACCEPTED: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        ACCEPTED
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}
