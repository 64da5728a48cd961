pub mod airport;
pub mod booking;
pub mod flight;
pub mod passenger;

pub use airport::Airport;
pub use booking::{Booking, BookingDraft, BookingStatus, BookingUpdate, FareClass};
pub use flight::{Flight, FlightDraft, FlightStatus};
pub use passenger::{Passenger, PassengerDraft, PassengerUpdate};
