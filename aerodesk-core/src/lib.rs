pub mod forms;
pub mod iata;
pub mod repository;
pub mod search;

pub use repository::{
    AirportRepository, Backend, BookingRepository, FlightRepository, Operation,
    PassengerRepository,
};
pub use search::FlightFilter;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Failed to {operation}: {reason}")]
    RequestFailed { operation: Operation, reason: String },
    #[error("Could not resolve created passenger ({0})")]
    PassengerResolutionFailed(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    pub fn request_failed(operation: Operation, reason: impl Into<String>) -> Self {
        CoreError::RequestFailed {
            operation,
            reason: reason.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
