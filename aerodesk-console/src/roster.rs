use aerodesk_core::repository::Backend;
use aerodesk_core::{CoreError, CoreResult};
use aerodesk_shared::{Booking, BookingStatus, BookingUpdate, Flight, Passenger, PassengerUpdate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::views::FlightRow;
use crate::DeleteOutcome;

/// Passenger lookup rebuilt from the latest list on every render.
pub fn passenger_index(passengers: &[Passenger]) -> HashMap<i64, &Passenger> {
    passengers.iter().map(|p| (p.passenger_id, p)).collect()
}

/// Roster free-text filter: passenger name, booking id, passenger id or seat.
pub fn matches_roster_search(booking: &Booking, passenger: Option<&Passenger>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let q = term.to_lowercase();
    let name = passenger
        .map(|p| p.full_name().to_lowercase())
        .unwrap_or_default();
    name.contains(&q)
        || booking.booking_id.to_string().contains(&q)
        || booking.passenger_id.to_string().contains(&q)
        || booking
            .seat_number
            .as_deref()
            .is_some_and(|seat| seat.to_lowercase().contains(&q))
}

/// Inline edit form for one roster row, pre-filled from the joined
/// passenger and the booking.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RosterEdit {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub seat_number: String,
    pub fare_class: String,
    pub status: BookingStatus,
}

/// Changed fields of a roster edit. Absent fields keep the pre-filled value.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RosterPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub seat_number: Option<String>,
    pub fare_class: Option<String>,
    pub status: Option<BookingStatus>,
}

impl RosterPatch {
    pub fn apply(self, draft: &mut RosterEdit) {
        if let Some(first_name) = self.first_name {
            draft.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            draft.last_name = last_name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(seat_number) = self.seat_number {
            draft.seat_number = seat_number;
        }
        if let Some(fare_class) = self.fare_class {
            draft.fare_class = fare_class;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RosterEdit {
    fn prefill(booking: &Booking, passenger: Option<&Passenger>) -> Self {
        Self {
            first_name: passenger.map(|p| p.first_name.clone()).unwrap_or_default(),
            last_name: passenger.map(|p| p.last_name.clone()).unwrap_or_default(),
            email: passenger.and_then(|p| p.email.clone()).unwrap_or_default(),
            seat_number: booking.seat_number.clone().unwrap_or_default(),
            fare_class: booking.fare_class.clone().unwrap_or_default(),
            status: booking.status,
        }
    }

    fn validate(&self) -> CoreResult<()> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "First and last name are required".to_string(),
            ));
        }
        Ok(())
    }

    fn passenger_update(&self) -> PassengerUpdate {
        PassengerUpdate {
            first_name: Some(self.first_name.trim().to_string()),
            last_name: Some(self.last_name.trim().to_string()),
            email: non_empty(&self.email),
            phone: None,
        }
    }

    fn booking_update(&self) -> BookingUpdate {
        BookingUpdate {
            seat_number: non_empty(&self.seat_number),
            fare_class: non_empty(&self.fare_class),
            // An unrecognised stored label is left as the backend has it.
            status: (self.status != BookingStatus::Unknown).then_some(self.status),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RosterRow {
    pub booking_id: i64,
    pub passenger_id: i64,
    pub passenger_name: String,
    pub passenger_email: Option<String>,
    pub seat_number: String,
    pub fare_class: String,
    pub status: BookingStatus,
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct RosterView {
    pub flight_id: i64,
    pub flight: Option<FlightRow>,
    pub search: String,
    pub rows: Vec<RosterRow>,
    pub editing: Option<EditingView>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EditingView {
    pub booking_id: i64,
    pub draft: RosterEdit,
}

/// Bookings of one flight joined against the passenger list, with at most
/// one row in inline edit at a time.
pub struct FlightRoster {
    backend: Arc<dyn Backend>,
    pub flight_id: i64,
    pub flight: Option<Flight>,
    pub bookings: Vec<Booking>,
    pub passengers: Vec<Passenger>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    editing: Option<(i64, RosterEdit)>,
}

impl FlightRoster {
    pub fn new(backend: Arc<dyn Backend>, flight_id: i64) -> Self {
        Self {
            backend,
            flight_id,
            flight: None,
            bookings: Vec::new(),
            passengers: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
            editing: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        let (flight, bookings, passengers) = tokio::join!(
            self.backend.get_flight(self.flight_id),
            self.backend.list_bookings(Some(self.flight_id)),
            self.backend.list_passengers(),
        );

        match flight {
            Ok(flight) => self.flight = Some(flight),
            Err(e) => error!(flight_id = self.flight_id, "Roster flight header failed: {}", e),
        }
        self.apply_bookings(bookings);
        match passengers {
            Ok(passengers) => self.passengers = passengers,
            Err(e) => error!("Roster passenger load failed: {}", e),
        }
        self.loading = false;
    }

    fn apply_bookings(&mut self, result: CoreResult<Vec<Booking>>) {
        match result {
            Ok(bookings) => {
                self.bookings = bookings;
                self.error = None;
            }
            Err(e) => {
                error!(flight_id = self.flight_id, "Booking fetch failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub async fn refresh_bookings(&mut self) {
        let result = self.backend.list_bookings(Some(self.flight_id)).await;
        self.apply_bookings(result);
    }

    pub async fn refresh_passengers(&mut self) {
        match self.backend.list_passengers().await {
            Ok(passengers) => self.passengers = passengers,
            Err(e) => error!("Passenger refresh failed: {}", e),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|(id, _)| *id)
    }

    /// Opens the inline editor on `booking_id`, closing any other open row.
    pub fn start_edit(&mut self, booking_id: i64) -> CoreResult<()> {
        let booking = self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| CoreError::NotFound(format!("booking {}", booking_id)))?;
        let index = passenger_index(&self.passengers);
        let draft = RosterEdit::prefill(booking, index.get(&booking.passenger_id).copied());
        self.editing = Some((booking_id, draft));
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut RosterEdit> {
        self.editing.as_mut().map(|(_, draft)| draft)
    }

    /// Merges submitted fields into the open draft.
    pub fn apply_patch(&mut self, patch: RosterPatch) -> CoreResult<()> {
        let draft = self
            .draft_mut()
            .ok_or_else(|| CoreError::ValidationError("No roster row is being edited".to_string()))?;
        patch.apply(draft);
        Ok(())
    }

    /// Saves the open row: passenger first, then booking. The first failure
    /// aborts and leaves the editor open.
    pub async fn save_edit(&mut self) -> CoreResult<()> {
        let (booking_id, draft) = self
            .editing
            .clone()
            .ok_or_else(|| CoreError::ValidationError("No roster row is being edited".to_string()))?;
        let passenger_id = self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .map(|b| b.passenger_id)
            .ok_or_else(|| CoreError::NotFound(format!("booking {}", booking_id)))?;
        draft.validate()?;

        self.backend
            .update_passenger(passenger_id, &draft.passenger_update())
            .await?;
        self.backend
            .update_booking(booking_id, &draft.booking_update())
            .await?;
        info!(booking_id, passenger_id, "Roster row saved");

        self.refresh_passengers().await;
        self.refresh_bookings().await;
        self.editing = None;
        Ok(())
    }

    /// Removes a passenger from the flight by deleting the booking, after confirmation.
    pub async fn remove(&mut self, booking_id: i64, confirmed: bool) -> CoreResult<DeleteOutcome> {
        if !confirmed {
            return Ok(DeleteOutcome::Declined);
        }
        self.backend.delete_booking(booking_id).await?;
        info!(booking_id, flight_id = self.flight_id, "Booking removed from flight");
        if self.editing_id() == Some(booking_id) {
            self.editing = None;
        }
        self.refresh_bookings().await;
        Ok(DeleteOutcome::Deleted)
    }

    pub fn rows(&self) -> Vec<RosterRow> {
        let index = passenger_index(&self.passengers);
        let editing = self.editing_id();
        self.bookings
            .iter()
            .filter_map(|booking| {
                let passenger = index.get(&booking.passenger_id).copied();
                if !matches_roster_search(booking, passenger, &self.search) {
                    return None;
                }
                Some(RosterRow {
                    booking_id: booking.booking_id,
                    passenger_id: booking.passenger_id,
                    passenger_name: passenger
                        .map(Passenger::full_name)
                        .unwrap_or_else(|| format!("Unknown passenger (ID {})", booking.passenger_id)),
                    passenger_email: passenger.and_then(|p| p.email.clone()),
                    seat_number: booking.seat_number.clone().unwrap_or_else(|| "-".to_string()),
                    fare_class: booking.fare_class.clone().unwrap_or_else(|| "-".to_string()),
                    status: booking.status,
                    editing: editing == Some(booking.booking_id),
                })
            })
            .collect()
    }

    pub fn view(&self) -> RosterView {
        RosterView {
            flight_id: self.flight_id,
            flight: self.flight.as_ref().map(FlightRow::from),
            search: self.search.clone(),
            rows: self.rows(),
            editing: self.editing.as_ref().map(|(booking_id, draft)| EditingView {
                booking_id: *booking_id,
                draft: draft.clone(),
            }),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}
