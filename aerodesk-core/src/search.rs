use aerodesk_shared::Flight;
use serde::{Deserialize, Serialize};

use crate::iata;

/// Exact-match airport constraints sent to `GET /flights/`.
/// Codes are stored trimmed and uppercased; an empty side means no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightFilter {
    #[serde(default)]
    pub departure_airport: String,
    #[serde(default)]
    pub arrival_airport: String,
}

impl FlightFilter {
    pub fn from_inputs(departure: &str, arrival: &str) -> Self {
        Self {
            departure_airport: departure.trim().to_uppercase(),
            arrival_airport: arrival.trim().to_uppercase(),
        }
    }

    pub fn normalized(&self) -> Self {
        Self::from_inputs(&self.departure_airport, &self.arrival_airport)
    }

    pub fn is_empty(&self) -> bool {
        self.departure_airport.is_empty() && self.arrival_airport.is_empty()
    }

    /// Query parameters for the non-empty sides only.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if !self.departure_airport.is_empty() {
            pairs.push(("departure_airport", self.departure_airport.as_str()));
        }
        if !self.arrival_airport.is_empty() {
            pairs.push(("arrival_airport", self.arrival_airport.as_str()));
        }
        pairs
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        (self.departure_airport.is_empty() || flight.departure_airport == self.departure_airport)
            && (self.arrival_airport.is_empty() || flight.arrival_airport == self.arrival_airport)
    }
}

/// Free-text match over flight number, both airport codes and the numeric id.
pub fn matches_search(flight: &Flight, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let q = term.to_lowercase();
    flight.flight_number.to_lowercase().contains(&q)
        || flight.departure_airport.to_lowercase().contains(&q)
        || flight.arrival_airport.to_lowercase().contains(&q)
        || flight.flight_id.to_string().contains(&q)
}

/// Narrows an already-fetched list. Never touches the network.
pub fn search_flights<'a>(flights: &'a [Flight], term: &str) -> Vec<&'a Flight> {
    flights.iter().filter(|f| matches_search(f, term)).collect()
}

/// Airline filter accepting a two-letter code or a full/partial airline name.
pub fn matches_airline(flight: &Flight, query: &str) -> bool {
    let wanted = iata::normalize_airline_query(query);
    if wanted.is_empty() {
        return true;
    }
    let airline = iata::airline_from_flight_number(&flight.flight_number);
    match airline {
        Some(name) => name.to_lowercase().contains(&wanted.to_lowercase()),
        None => false,
    }
}
