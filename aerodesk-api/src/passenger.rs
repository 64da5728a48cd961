use aerodesk_console::passenger::PassengerView;
use aerodesk_console::{purchase_ticket, PassengerFront, TicketReceipt, View};
use aerodesk_core::forms::PurchaseForm;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::page::Page;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlightQuery {
    pub departure_airport: String,
    pub arrival_airport: String,
    /// Free-text search over the fetched list.
    pub q: String,
    pub airline: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/flights", get(list_flights))
        .route("/flights/{flight_id}/tickets", post(buy_ticket))
}

pub(crate) async fn passenger_page(state: &AppState, query: &FlightQuery) -> Page<PassengerView> {
    let mut front = PassengerFront::new(state.backend.clone());
    front
        .apply_filters(&query.departure_airport, &query.arrival_airport)
        .await;
    front.set_search(&query.q);
    front.set_airline(&query.airline);

    let body = front.view();
    let error = body.error.clone();
    Page::render(View::Passenger, body, error.as_deref(), &state.backend_hint)
}

/// GET /flights
async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
) -> Json<Page<PassengerView>> {
    Json(passenger_page(&state, &query).await)
}

/// POST /flights/{flight_id}/tickets
async fn buy_ticket(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
    Json(form): Json<PurchaseForm>,
) -> Result<Json<TicketReceipt>, AppError> {
    let receipt = purchase_ticket(state.backend.as_ref(), flight_id, &form).await?;
    Ok(Json(receipt))
}
