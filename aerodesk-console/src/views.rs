use aerodesk_core::iata;
use aerodesk_shared::models::flight::timestamp;
use aerodesk_shared::{Flight, FlightStatus};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One flight card as both consoles render it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlightRow {
    pub flight_id: i64,
    pub flight_number: String,
    pub airline: Option<&'static str>,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(with = "timestamp")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub arrival_time: NaiveDateTime,
    pub status: FlightStatus,
    pub status_color: &'static str,
}

impl From<&Flight> for FlightRow {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_id: flight.flight_id,
            flight_number: flight.flight_number.clone(),
            airline: iata::airline_from_flight_number(&flight.flight_number),
            departure_airport: flight.departure_airport.clone(),
            arrival_airport: flight.arrival_airport.clone(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            status: flight.status,
            status_color: flight.status.color(),
        }
    }
}

/// Persistent error banner on listing pages.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub message: String,
    pub hint: String,
}

impl Banner {
    pub fn connection(message: &str, hint: &str) -> Self {
        Self {
            title: "Connection Error",
            message: message.to_string(),
            hint: hint.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_flight_row_carries_airline_and_colour() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let flight = Flight {
            flight_id: 4,
            flight_number: "LH400".to_string(),
            departure_airport: "FRA".to_string(),
            arrival_airport: "JFK".to_string(),
            departure_time: day.and_hms_opt(10, 0, 0).unwrap(),
            arrival_time: day.and_hms_opt(13, 0, 0).unwrap(),
            status: FlightStatus::Delayed,
        };

        let row = FlightRow::from(&flight);
        assert_eq!(row.airline, Some("Lufthansa"));
        assert_eq!(row.status_color, "#f59e0b");

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["status"], "Delayed");
        assert_eq!(json["departure_time"], "2025-03-01T10:00:00");
    }
}
