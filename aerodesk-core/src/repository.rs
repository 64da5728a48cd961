use aerodesk_shared::{
    Airport, Booking, BookingDraft, BookingUpdate, Flight, FlightDraft, Passenger, PassengerDraft,
    PassengerUpdate,
};
use async_trait::async_trait;
use std::fmt;

use crate::search::FlightFilter;
use crate::CoreResult;

/// Every backend call the consoles can make. Carried by `RequestFailed` so the
/// user sees which step broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchFlights,
    FetchFlight,
    CreateFlight,
    UpdateFlight,
    DeleteFlight,
    FetchAirports,
    CreateAirport,
    FetchPassengers,
    CreatePassenger,
    UpdatePassenger,
    FetchBookings,
    CreateBooking,
    UpdateBooking,
    DeleteBooking,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchFlights => "fetch flights",
            Operation::FetchFlight => "fetch flight",
            Operation::CreateFlight => "create flight",
            Operation::UpdateFlight => "update flight",
            Operation::DeleteFlight => "delete flight",
            Operation::FetchAirports => "fetch airports",
            Operation::CreateAirport => "add airport",
            Operation::FetchPassengers => "fetch passengers",
            Operation::CreatePassenger => "create passenger",
            Operation::UpdatePassenger => "update passenger",
            Operation::FetchBookings => "fetch bookings",
            Operation::CreateBooking => "create booking",
            Operation::UpdateBooking => "update booking",
            Operation::DeleteBooking => "delete booking",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `/flights/` endpoints.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Exact-match filtering happens on the backend; empty filter sides are not sent.
    async fn list_flights(&self, filter: &FlightFilter) -> CoreResult<Vec<Flight>>;

    async fn get_flight(&self, flight_id: i64) -> CoreResult<Flight>;

    async fn create_flight(&self, draft: &FlightDraft) -> CoreResult<()>;

    async fn update_flight(&self, flight_id: i64, draft: &FlightDraft) -> CoreResult<()>;

    async fn delete_flight(&self, flight_id: i64) -> CoreResult<()>;
}

/// `/airports/` endpoints.
#[async_trait]
pub trait AirportRepository: Send + Sync {
    async fn list_airports(&self) -> CoreResult<Vec<Airport>>;

    async fn create_airport(&self, airport: &Airport) -> CoreResult<()>;
}

/// `/passengers/` endpoints.
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn list_passengers(&self) -> CoreResult<Vec<Passenger>>;

    /// Returns the new passenger id when the backend reports one.
    async fn create_passenger(&self, draft: &PassengerDraft) -> CoreResult<Option<i64>>;

    async fn update_passenger(&self, passenger_id: i64, update: &PassengerUpdate)
        -> CoreResult<()>;
}

/// `/bookings/` endpoints.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list_bookings(&self, flight_id: Option<i64>) -> CoreResult<Vec<Booking>>;

    async fn create_booking(&self, draft: &BookingDraft) -> CoreResult<()>;

    async fn update_booking(&self, booking_id: i64, update: &BookingUpdate) -> CoreResult<()>;

    async fn delete_booking(&self, booking_id: i64) -> CoreResult<()>;
}

/// The whole REST contract the consoles depend on.
pub trait Backend:
    FlightRepository + AirportRepository + PassengerRepository + BookingRepository
{
}

impl<T> Backend for T where
    T: FlightRepository + AirportRepository + PassengerRepository + BookingRepository
{
}
