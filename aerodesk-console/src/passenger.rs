use aerodesk_core::repository::Backend;
use aerodesk_core::search::{matches_airline, matches_search};
use aerodesk_core::FlightFilter;
use aerodesk_shared::Flight;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::views::FlightRow;
use crate::CONNECTION_ERROR;

/// Passenger flight finder: backend-filtered schedule, narrowed further by a
/// local free-text search and an optional airline filter.
pub struct PassengerFront {
    backend: Arc<dyn Backend>,
    pub flights: Vec<Flight>,
    pub filters: FlightFilter,
    pub search_term: String,
    pub airline: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PassengerView {
    pub filters: FlightFilter,
    pub search_term: String,
    pub airline: String,
    pub flights: Vec<FlightRow>,
    /// Size of the fetched list before local narrowing.
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl PassengerFront {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            flights: Vec::new(),
            filters: FlightFilter::default(),
            search_term: String::new(),
            airline: String::new(),
            loading: true,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.backend.list_flights(&self.filters).await {
            Ok(flights) => {
                self.flights = flights;
                self.error = None;
            }
            Err(e) => {
                error!("Flight list failed: {}", e);
                self.error = Some(CONNECTION_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn apply_filters(&mut self, departure: &str, arrival: &str) {
        self.filters = FlightFilter::from_inputs(departure, arrival);
        self.load().await;
    }

    pub async fn clear_filters(&mut self) {
        self.filters = FlightFilter::default();
        self.load().await;
    }

    /// Local only; the next render narrows the fetched list.
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn set_airline(&mut self, query: &str) {
        self.airline = query.to_string();
    }

    pub fn visible_flights(&self) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| matches_search(f, &self.search_term))
            .filter(|f| matches_airline(f, &self.airline))
            .collect()
    }

    pub fn view(&self) -> PassengerView {
        PassengerView {
            filters: self.filters.clone(),
            search_term: self.search_term.clone(),
            airline: self.airline.clone(),
            flights: self.visible_flights().into_iter().map(FlightRow::from).collect(),
            total: self.flights.len(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodesk_core::repository::Operation;
    use aerodesk_shared::FlightStatus;
    use aerodesk_store::InMemoryBackend;
    use chrono::NaiveDate;

    fn flight(id: i64, number: &str, dep: &str, arr: &str) -> Flight {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        Flight {
            flight_id: id,
            flight_number: number.to_string(),
            departure_airport: dep.to_string(),
            arrival_airport: arr.to_string(),
            departure_time: day.and_hms_opt(8, 0, 0).unwrap(),
            arrival_time: day.and_hms_opt(11, 0, 0).unwrap(),
            status: FlightStatus::OnTime,
        }
    }

    fn backend() -> Arc<InMemoryBackend> {
        Arc::new(InMemoryBackend::new().with_flights(vec![
            flight(1, "AA100", "JFK", "LAX"),
            flight(2, "BA117", "LHR", "JFK"),
            flight(3, "UA9", "ORD", "DEN"),
        ]))
    }

    #[tokio::test]
    async fn test_departure_filter_scenario() {
        let backend = backend();
        let mut front = PassengerFront::new(backend.clone());

        front.apply_filters("JFK", "").await;
        let ids: Vec<i64> = front.visible_flights().iter().map(|f| f.flight_id).collect();
        assert_eq!(ids, vec![1]);

        front.apply_filters("SFO", "").await;
        assert!(front.visible_flights().is_empty());
        assert!(front.error.is_none());
    }

    #[tokio::test]
    async fn test_search_never_calls_backend() {
        let backend = backend();
        let mut front = PassengerFront::new(backend.clone());
        front.load().await;
        backend.clear_calls();

        front.set_search("jfk");
        let ids: Vec<i64> = front.visible_flights().iter().map(|f| f.flight_id).collect();
        assert_eq!(ids, vec![1, 2]);

        front.set_search("3");
        assert_eq!(front.visible_flights()[0].flight_id, 3);

        front.set_search("");
        assert_eq!(front.visible_flights().len(), 3);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_airline_filter_combines_with_search() {
        let backend = backend();
        let mut front = PassengerFront::new(backend.clone());
        front.load().await;

        front.set_airline("British Airways");
        front.set_search("jfk");
        let view = front.view();
        assert_eq!(view.total, 3);
        assert_eq!(view.flights.len(), 1);
        assert_eq!(view.flights[0].flight_number, "BA117");
    }

    #[tokio::test]
    async fn test_failed_fetch_sets_banner() {
        let backend = backend();
        backend.fail_on(Operation::FetchFlights);
        let mut front = PassengerFront::new(backend.clone());

        front.load().await;

        assert!(!front.loading);
        assert_eq!(front.error.as_deref(), Some(CONNECTION_ERROR));
    }
}
