use aerodesk_core::forms::{validate_airport, validate_flight};
use aerodesk_core::repository::Backend;
use aerodesk_core::{CoreResult, FlightFilter};
use aerodesk_shared::{Airport, Flight, FlightDraft, Passenger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::views::FlightRow;
use crate::{DeleteOutcome, CONNECTION_ERROR};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Flights,
    Airports,
}

/// Staff dashboard state: flight schedule, airports and the passenger list
/// used to join rosters. Every mutation refetches the list it touched.
pub struct AdminDashboard {
    backend: Arc<dyn Backend>,
    pub flights: Vec<Flight>,
    pub airports: Vec<Airport>,
    pub passengers: Vec<Passenger>,
    pub filters: FlightFilter,
    pub active_tab: AdminTab,
    pub loading: bool,
    /// Connection banner; only flight fetches set it.
    pub error: Option<String>,
}

/// Serializable snapshot of the dashboard.
#[derive(Debug, Serialize)]
pub struct AdminView {
    pub active_tab: AdminTab,
    pub filters: FlightFilter,
    pub flights: Vec<FlightRow>,
    pub airports: Vec<Airport>,
    pub passenger_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl AdminDashboard {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            flights: Vec::new(),
            airports: Vec::new(),
            passengers: Vec::new(),
            filters: FlightFilter::default(),
            active_tab: AdminTab::default(),
            loading: true,
            error: None,
        }
    }

    /// Initial page load: flights, airports and passengers are fetched
    /// concurrently and the dashboard renders once all three settle.
    pub async fn load(&mut self) {
        self.loading = true;
        let (flights, airports, passengers) = tokio::join!(
            self.backend.list_flights(&self.filters),
            self.backend.list_airports(),
            self.backend.list_passengers(),
        );

        match flights {
            Ok(flights) => {
                self.flights = flights;
                self.error = None;
            }
            Err(e) => {
                error!("Dashboard flight load failed: {}", e);
                self.error = Some(CONNECTION_ERROR.to_string());
            }
        }
        match airports {
            Ok(airports) => self.airports = airports,
            Err(e) => error!("Dashboard airport load failed: {}", e),
        }
        match passengers {
            Ok(passengers) => self.passengers = passengers,
            Err(e) => error!("Dashboard passenger load failed: {}", e),
        }
        self.loading = false;
    }

    pub async fn refresh_flights(&mut self) {
        match self.backend.list_flights(&self.filters).await {
            Ok(flights) => {
                self.flights = flights;
                self.error = None;
            }
            Err(e) => {
                error!("Flight refresh failed: {}", e);
                self.error = Some(CONNECTION_ERROR.to_string());
            }
        }
    }

    pub async fn refresh_airports(&mut self) {
        match self.backend.list_airports().await {
            Ok(airports) => self.airports = airports,
            Err(e) => error!("Airport refresh failed: {}", e),
        }
    }

    pub async fn refresh_passengers(&mut self) {
        match self.backend.list_passengers().await {
            Ok(passengers) => self.passengers = passengers,
            Err(e) => error!("Passenger refresh failed: {}", e),
        }
    }

    /// Normalizes the raw inputs and refetches the schedule with them.
    pub async fn apply_filters(&mut self, departure: &str, arrival: &str) {
        self.filters = FlightFilter::from_inputs(departure, arrival);
        self.refresh_flights().await;
    }

    pub async fn clear_filters(&mut self) {
        self.filters = FlightFilter::default();
        self.refresh_flights().await;
    }

    pub async fn create_flight(&mut self, draft: &FlightDraft) -> CoreResult<()> {
        validate_flight(draft)?;
        let draft = draft.normalized();
        self.backend.create_flight(&draft).await?;
        info!(flight_number = %draft.flight_number, "Flight created");
        self.refresh_flights().await;
        Ok(())
    }

    pub async fn update_flight(&mut self, flight_id: i64, draft: &FlightDraft) -> CoreResult<()> {
        validate_flight(draft)?;
        let draft = draft.normalized();
        self.backend.update_flight(flight_id, &draft).await?;
        info!(flight_id, "Flight updated");
        self.refresh_flights().await;
        Ok(())
    }

    /// Deletes only when the user confirmed the prompt.
    pub async fn delete_flight(&mut self, flight_id: i64, confirmed: bool) -> CoreResult<DeleteOutcome> {
        if !confirmed {
            return Ok(DeleteOutcome::Declined);
        }
        self.backend.delete_flight(flight_id).await?;
        info!(flight_id, "Flight deleted");
        self.refresh_flights().await;
        Ok(DeleteOutcome::Deleted)
    }

    pub async fn create_airport(&mut self, airport: &Airport) -> CoreResult<()> {
        validate_airport(airport)?;
        let airport = airport.normalized();
        self.backend.create_airport(&airport).await?;
        info!(airport_code = %airport.airport_code, "Airport added");
        self.refresh_airports().await;
        Ok(())
    }

    pub fn view(&self) -> AdminView {
        AdminView {
            active_tab: self.active_tab,
            filters: self.filters.clone(),
            flights: self.flights.iter().map(FlightRow::from).collect(),
            airports: self.airports.clone(),
            passenger_count: self.passengers.len(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}
