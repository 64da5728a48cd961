pub mod models;
pub mod pii;

pub use models::{
    Airport, Booking, BookingDraft, BookingStatus, BookingUpdate, FareClass, Flight, FlightDraft,
    FlightStatus, Passenger, PassengerDraft, PassengerUpdate,
};
