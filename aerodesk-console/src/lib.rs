pub mod admin;
pub mod passenger;
pub mod purchase;
pub mod roster;
pub mod route;
pub mod views;

pub use admin::{AdminDashboard, AdminTab};
pub use passenger::PassengerFront;
pub use purchase::{purchase_ticket, TicketReceipt};
pub use roster::{FlightRoster, RosterEdit, RosterPatch};
pub use route::View;

use serde::Serialize;

/// Banner text shown when a listing fetch fails.
pub const CONNECTION_ERROR: &str =
    "Could not connect to backend. Make sure the backend server is running!";

/// Result of a delete action that needs the user's confirmation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    /// The prompt was declined; nothing was sent to the backend.
    Declined,
}
