use aerodesk_core::repository::{
    AirportRepository, BookingRepository, FlightRepository, Operation, PassengerRepository,
};
use aerodesk_core::{CoreError, CoreResult, FlightFilter};
use aerodesk_shared::{
    Airport, Booking, BookingDraft, BookingStatus, BookingUpdate, Flight, FlightDraft, Passenger,
    PassengerDraft, PassengerUpdate,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// In-memory stand-in for the REST backend, used by tests.
///
/// Mirrors the backend's observable behaviour (exact-match flight filters,
/// `CONFIRMED` on new bookings, informational create responses) and records
/// every call so tests can assert which requests a flow made.
#[derive(Default)]
pub struct InMemoryBackend {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    flights: Vec<Flight>,
    airports: Vec<Airport>,
    passengers: Vec<Passenger>,
    bookings: Vec<Booking>,
    calls: Vec<Operation>,
    failing: HashSet<Operation>,
    report_created_ids: bool,
    hide_new_passengers: bool,
    hidden_passengers: Vec<Passenger>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_flights(self, flights: Vec<Flight>) -> Self {
        self.state().flights = flights;
        self
    }

    pub fn with_airports(self, airports: Vec<Airport>) -> Self {
        self.state().airports = airports;
        self
    }

    pub fn with_passengers(self, passengers: Vec<Passenger>) -> Self {
        self.state().passengers = passengers;
        self
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        self.state().bookings = bookings;
        self
    }

    /// Makes every subsequent call of `op` fail with an HTTP 500.
    pub fn fail_on(&self, op: Operation) {
        self.state().failing.insert(op);
    }

    /// Include `passenger_id` in the create-passenger response.
    pub fn report_created_ids(&self, enabled: bool) {
        self.state().report_created_ids = enabled;
    }

    /// Simulates a backend whose passenger list lags behind writes:
    /// created passengers never show up in later listings.
    pub fn hide_new_passengers(&self, enabled: bool) {
        self.state().hide_new_passengers = enabled;
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.state().calls.clone()
    }

    pub fn count(&self, op: Operation) -> usize {
        self.state().calls.iter().filter(|c| **c == op).count()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn flights(&self) -> Vec<Flight> {
        self.state().flights.clone()
    }

    pub fn airports(&self) -> Vec<Airport> {
        self.state().airports.clone()
    }

    pub fn passengers(&self) -> Vec<Passenger> {
        let state = self.state();
        state
            .passengers
            .iter()
            .chain(state.hidden_passengers.iter())
            .cloned()
            .collect()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.state().bookings.clone()
    }

    /// Records the call and returns the state, or the injected failure.
    fn begin(&self, op: Operation) -> CoreResult<MutexGuard<'_, MemoryState>> {
        let mut state = self.state();
        state.calls.push(op);
        if state.failing.contains(&op) {
            return Err(CoreError::request_failed(op, "HTTP 500: Internal Server Error"));
        }
        Ok(state)
    }
}

fn not_found(op: Operation, what: &str) -> CoreError {
    CoreError::request_failed(op, format!("HTTP 404: {} not found", what))
}

#[async_trait]
impl FlightRepository for InMemoryBackend {
    async fn list_flights(&self, filter: &FlightFilter) -> CoreResult<Vec<Flight>> {
        let state = self.begin(Operation::FetchFlights)?;
        Ok(state
            .flights
            .iter()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect())
    }

    async fn get_flight(&self, flight_id: i64) -> CoreResult<Flight> {
        let state = self.begin(Operation::FetchFlight)?;
        state
            .flights
            .iter()
            .find(|f| f.flight_id == flight_id)
            .cloned()
            .ok_or_else(|| not_found(Operation::FetchFlight, "Flight"))
    }

    async fn create_flight(&self, draft: &FlightDraft) -> CoreResult<()> {
        let mut state = self.begin(Operation::CreateFlight)?;
        let flight_id = state.flights.iter().map(|f| f.flight_id).max().unwrap_or(0) + 1;
        state.flights.push(Flight {
            flight_id,
            flight_number: draft.flight_number.clone(),
            departure_airport: draft.departure_airport.clone(),
            arrival_airport: draft.arrival_airport.clone(),
            departure_time: draft.departure_time,
            arrival_time: draft.arrival_time,
            status: draft.status,
        });
        Ok(())
    }

    async fn update_flight(&self, flight_id: i64, draft: &FlightDraft) -> CoreResult<()> {
        let mut state = self.begin(Operation::UpdateFlight)?;
        let flight = state
            .flights
            .iter_mut()
            .find(|f| f.flight_id == flight_id)
            .ok_or_else(|| not_found(Operation::UpdateFlight, "Flight"))?;
        flight.flight_number = draft.flight_number.clone();
        flight.departure_airport = draft.departure_airport.clone();
        flight.arrival_airport = draft.arrival_airport.clone();
        flight.departure_time = draft.departure_time;
        flight.arrival_time = draft.arrival_time;
        flight.status = draft.status;
        Ok(())
    }

    async fn delete_flight(&self, flight_id: i64) -> CoreResult<()> {
        let mut state = self.begin(Operation::DeleteFlight)?;
        state.flights.retain(|f| f.flight_id != flight_id);
        Ok(())
    }
}

#[async_trait]
impl AirportRepository for InMemoryBackend {
    async fn list_airports(&self) -> CoreResult<Vec<Airport>> {
        let state = self.begin(Operation::FetchAirports)?;
        Ok(state.airports.clone())
    }

    async fn create_airport(&self, airport: &Airport) -> CoreResult<()> {
        let mut state = self.begin(Operation::CreateAirport)?;
        state.airports.push(airport.clone());
        Ok(())
    }
}

#[async_trait]
impl PassengerRepository for InMemoryBackend {
    async fn list_passengers(&self) -> CoreResult<Vec<Passenger>> {
        let state = self.begin(Operation::FetchPassengers)?;
        Ok(state.passengers.clone())
    }

    async fn create_passenger(&self, draft: &PassengerDraft) -> CoreResult<Option<i64>> {
        let mut state = self.begin(Operation::CreatePassenger)?;
        let passenger_id = state
            .passengers
            .iter()
            .chain(state.hidden_passengers.iter())
            .map(|p| p.passenger_id)
            .max()
            .unwrap_or(0)
            + 1;
        let passenger = Passenger {
            passenger_id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
        };
        if state.hide_new_passengers {
            state.hidden_passengers.push(passenger);
        } else {
            state.passengers.push(passenger);
        }
        Ok(state.report_created_ids.then_some(passenger_id))
    }

    async fn update_passenger(
        &self,
        passenger_id: i64,
        update: &PassengerUpdate,
    ) -> CoreResult<()> {
        let mut state = self.begin(Operation::UpdatePassenger)?;
        let passenger = state
            .passengers
            .iter_mut()
            .find(|p| p.passenger_id == passenger_id)
            .ok_or_else(|| not_found(Operation::UpdatePassenger, "Passenger"))?;
        if let Some(first_name) = &update.first_name {
            passenger.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            passenger.last_name = last_name.clone();
        }
        if update.email.is_some() {
            passenger.email = update.email.clone();
        }
        if update.phone.is_some() {
            passenger.phone = update.phone.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBackend {
    async fn list_bookings(&self, flight_id: Option<i64>) -> CoreResult<Vec<Booking>> {
        let state = self.begin(Operation::FetchBookings)?;
        Ok(state
            .bookings
            .iter()
            .filter(|b| flight_id.map_or(true, |id| b.flight_id == id))
            .cloned()
            .collect())
    }

    async fn create_booking(&self, draft: &BookingDraft) -> CoreResult<()> {
        let mut state = self.begin(Operation::CreateBooking)?;
        let booking_id = state.bookings.iter().map(|b| b.booking_id).max().unwrap_or(0) + 1;
        state.bookings.push(Booking {
            booking_id,
            passenger_id: draft.passenger_id,
            flight_id: draft.flight_id,
            booking_date: None,
            seat_number: draft.seat_number.clone(),
            fare_class: draft.fare_class.map(|f| f.as_str().to_string()),
            status: BookingStatus::Confirmed,
        });
        Ok(())
    }

    async fn update_booking(&self, booking_id: i64, update: &BookingUpdate) -> CoreResult<()> {
        let mut state = self.begin(Operation::UpdateBooking)?;
        let booking = state
            .bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| not_found(Operation::UpdateBooking, "Booking"))?;
        if update.seat_number.is_some() {
            booking.seat_number = update.seat_number.clone();
        }
        if update.fare_class.is_some() {
            booking.fare_class = update.fare_class.clone();
        }
        if let Some(status) = update.status {
            booking.status = status;
        }
        Ok(())
    }

    async fn delete_booking(&self, booking_id: i64) -> CoreResult<()> {
        let mut state = self.begin(Operation::DeleteBooking)?;
        let before = state.bookings.len();
        state.bookings.retain(|b| b.booking_id != booking_id);
        if state.bookings.len() == before {
            return Err(not_found(Operation::DeleteBooking, "Booking"));
        }
        Ok(())
    }
}
