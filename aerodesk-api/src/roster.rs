use aerodesk_console::roster::RosterView;
use aerodesk_console::{DeleteOutcome, FlightRoster, RosterPatch, View};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::page::{ConfirmQuery, ConfirmationRequired, Page};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RosterQuery {
    pub q: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/flights/{flight_id}/roster", get(roster))
        .route(
            "/admin/flights/{flight_id}/roster/{booking_id}",
            put(save_row).delete(remove_row),
        )
}

fn render(state: &AppState, roster: &FlightRoster) -> Page<RosterView> {
    let body = roster.view();
    let error = body.error.clone();
    Page::render(View::Admin, body, error.as_deref(), &state.backend_hint)
}

async fn loaded(state: &AppState, flight_id: i64) -> FlightRoster {
    let mut roster = FlightRoster::new(state.backend.clone(), flight_id);
    roster.load().await;
    roster
}

/// GET /admin/flights/{flight_id}/roster
async fn roster(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
    Query(query): Query<RosterQuery>,
) -> Json<Page<RosterView>> {
    let mut roster = loaded(&state, flight_id).await;
    roster.set_search(&query.q);
    Json(render(&state, &roster))
}

/// PUT /admin/flights/{flight_id}/roster/{booking_id}
async fn save_row(
    State(state): State<AppState>,
    Path((flight_id, booking_id)): Path<(i64, i64)>,
    Json(patch): Json<RosterPatch>,
) -> Result<Json<Page<RosterView>>, AppError> {
    let mut roster = loaded(&state, flight_id).await;
    // Without the booking list the row cannot be located.
    if let Some(error) = roster.error.clone() {
        return Err(AppError::BadGateway(error));
    }

    roster.start_edit(booking_id)?;
    roster.apply_patch(patch)?;
    roster.save_edit().await?;
    Ok(Json(render(&state, &roster)))
}

/// DELETE /admin/flights/{flight_id}/roster/{booking_id}?confirm=true
async fn remove_row(
    State(state): State<AppState>,
    Path((flight_id, booking_id)): Path<(i64, i64)>,
    Query(confirm): Query<ConfirmQuery>,
) -> Result<Response, AppError> {
    let mut roster = FlightRoster::new(state.backend.clone(), flight_id);
    if confirm.confirm {
        roster.load().await;
    }
    match roster.remove(booking_id, confirm.confirm).await? {
        DeleteOutcome::Deleted => Ok(Json(render(&state, &roster)).into_response()),
        DeleteOutcome::Declined => Ok(Json(ConfirmationRequired::new(
            "Remove this passenger from the flight?",
        ))
        .into_response()),
    }
}
