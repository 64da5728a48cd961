use aerodesk_console::View;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod error;
pub mod page;
pub mod passenger;
pub mod roster;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(passenger::routes())
        .merge(admin::routes())
        .merge(roster::routes())
        .fallback(home)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unknown paths land on the home page of whichever console they belong to.
async fn home(State(state): State<AppState>, uri: Uri) -> Response {
    match View::for_path(uri.path()) {
        View::Admin => Json(admin::admin_page(&state, &admin::AdminQuery::default()).await).into_response(),
        View::Passenger => {
            Json(passenger::passenger_page(&state, &passenger::FlightQuery::default()).await)
                .into_response()
        }
    }
}
