use aerodesk_console::admin::AdminView;
use aerodesk_console::{AdminDashboard, AdminTab, DeleteOutcome, View};
use aerodesk_core::FlightFilter;
use aerodesk_shared::{Airport, FlightDraft};
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
pub struct AdminQuery {
    pub departure_airport: String,
    pub arrival_airport: String,
    pub tab: Option<AdminTab>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/flights", get(dashboard).post(create_flight))
        .route("/admin/flights/{flight_id}", put(update_flight).delete(delete_flight))
        .route("/admin/airports", get(airports).post(create_airport))
}

fn render(state: &AppState, dashboard: &AdminDashboard) -> Page<AdminView> {
    let body = dashboard.view();
    let error = body.error.clone();
    Page::render(View::Admin, body, error.as_deref(), &state.backend_hint)
}

/// Dashboard with all three lists loaded; mutations start from this too.
async fn loaded(state: &AppState, query: &AdminQuery) -> AdminDashboard {
    let mut dashboard = AdminDashboard::new(state.backend.clone());
    dashboard.filters = FlightFilter::from_inputs(&query.departure_airport, &query.arrival_airport);
    dashboard.active_tab = query.tab.unwrap_or_default();
    dashboard.load().await;
    dashboard
}

pub(crate) async fn admin_page(state: &AppState, query: &AdminQuery) -> Page<AdminView> {
    render(state, &loaded(state, query).await)
}

/// GET /admin, GET /admin/flights
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Json<Page<AdminView>> {
    Json(admin_page(&state, &query).await)
}

/// GET /admin/airports
async fn airports(State(state): State<AppState>) -> Json<Page<AdminView>> {
    let query = AdminQuery {
        tab: Some(AdminTab::Airports),
        ..AdminQuery::default()
    };
    Json(admin_page(&state, &query).await)
}

/// POST /admin/flights
async fn create_flight(
    State(state): State<AppState>,
    Json(draft): Json<FlightDraft>,
) -> Result<Json<Page<AdminView>>, AppError> {
    let mut dashboard = loaded(&state, &AdminQuery::default()).await;
    dashboard.create_flight(&draft).await?;
    Ok(Json(render(&state, &dashboard)))
}

/// PUT /admin/flights/{flight_id}
async fn update_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
    Json(draft): Json<FlightDraft>,
) -> Result<Json<Page<AdminView>>, AppError> {
    let mut dashboard = loaded(&state, &AdminQuery::default()).await;
    dashboard.update_flight(flight_id, &draft).await?;
    Ok(Json(render(&state, &dashboard)))
}

/// DELETE /admin/flights/{flight_id}?confirm=true
async fn delete_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
    Query(confirm): Query<ConfirmQuery>,
) -> Result<Response, AppError> {
    let mut dashboard = AdminDashboard::new(state.backend.clone());
    if confirm.confirm {
        dashboard.load().await;
    }
    match dashboard.delete_flight(flight_id, confirm.confirm).await? {
        DeleteOutcome::Deleted => Ok(Json(render(&state, &dashboard)).into_response()),
        DeleteOutcome::Declined => Ok(Json(ConfirmationRequired::new(
            "Are you sure you want to delete this flight?",
        ))
        .into_response()),
    }
}

/// POST /admin/airports
async fn create_airport(
    State(state): State<AppState>,
    Json(airport): Json<Airport>,
) -> Result<Json<Page<AdminView>>, AppError> {
    let query = AdminQuery {
        tab: Some(AdminTab::Airports),
        ..AdminQuery::default()
    };
    let mut dashboard = loaded(&state, &query).await;
    dashboard.create_airport(&airport).await?;
    Ok(Json(render(&state, &dashboard)))
}
