use aerodesk_core::repository::{
    BookingRepository, FlightRepository, Operation, PassengerRepository,
};
use aerodesk_core::{CoreError, FlightFilter};
use aerodesk_shared::{PassengerDraft, PassengerUpdate};
use aerodesk_store::BackendClient;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<String>>>;

fn flight_json(id: i64, dep: &str, arr: &str) -> Value {
    json!({
        "flight_id": id,
        "flight_number": format!("AA{}", 100 + id),
        "departure_airport": dep,
        "arrival_airport": arr,
        "departure_time": "2025-03-01T08:30:00",
        "arrival_time": "2025-03-01T11:45:00",
        "status": "On Time"
    })
}

async fn list_flights(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut keys: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    keys.sort();
    seen.lock().unwrap().push(format!("GET /flights/?{}", keys.join("&")));

    let all = vec![flight_json(1, "JFK", "LAX"), flight_json(2, "SFO", "JFK")];
    let filtered: Vec<Value> = all
        .into_iter()
        .filter(|f| {
            params
                .get("departure_airport")
                .map_or(true, |d| f["departure_airport"] == d.as_str())
                && params
                    .get("arrival_airport")
                    .map_or(true, |a| f["arrival_airport"] == a.as_str())
        })
        .collect();
    Json(Value::Array(filtered))
}

async fn create_passenger(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(format!("POST /passengers/ {}", body["email"]));
    if body["email"] == "with-id@example.com" {
        Json(json!({ "message": "Passenger created", "passenger_id": 41 }))
    } else {
        Json(json!({ "message": "Passenger created" }))
    }
}

async fn update_passenger(
    State(seen): State<Seen>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    seen.lock().unwrap().push(format!("PUT /passengers/{id} {body}"));
    if id == 404 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Passenger not found or nothing to update" })),
        ));
    }
    Ok(Json(json!({ "message": "Passenger updated" })))
}

async fn list_bookings(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let flight_id = params.get("flight_id").cloned().unwrap_or_default();
    seen.lock().unwrap().push(format!("GET /bookings/?flight_id={flight_id}"));
    Json(json!([{
        "booking_id": 9,
        "passenger_id": 3,
        "flight_id": 1,
        "booking_date": "2025-02-10T09:15:00",
        "seat_number": "14C",
        "fare_class": "Economy",
        "status": "CONFIRMED",
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com"
    }]))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn spawn_stub() -> (BackendClient, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/flights/", get(list_flights))
        .route("/flights/{id}", get(broken).delete(broken))
        .route("/passengers/", axum::routing::post(create_passenger))
        .route("/passengers/{id}", put(update_passenger))
        .route("/bookings/", get(list_bookings))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (BackendClient::new(&format!("http://{addr}/")), seen)
}

#[tokio::test]
async fn test_flight_filters_become_query_params() {
    let (client, seen) = spawn_stub().await;

    let all = client.list_flights(&FlightFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let jfk = client
        .list_flights(&FlightFilter::from_inputs("jfk", ""))
        .await
        .unwrap();
    assert_eq!(jfk.len(), 1);
    assert_eq!(jfk[0].flight_id, 1);

    let sfo_to_lax = client
        .list_flights(&FlightFilter::from_inputs("SFO", "LAX"))
        .await
        .unwrap();
    assert!(sfo_to_lax.is_empty());

    let seen = seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            "GET /flights/?".to_string(),
            "GET /flights/?departure_airport=JFK".to_string(),
            "GET /flights/?arrival_airport=LAX&departure_airport=SFO".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_non_success_status_names_operation() {
    let (client, _) = spawn_stub().await;

    let err = client.delete_flight(5).await.unwrap_err();
    match err {
        CoreError::RequestFailed { operation, reason } => {
            assert_eq!(operation, Operation::DeleteFlight);
            assert!(reason.starts_with("HTTP 500"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fastapi_detail_is_surfaced() {
    let (client, _) = spawn_stub().await;

    let err = client
        .update_passenger(404, &PassengerUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to update passenger: HTTP 404: Passenger not found or nothing to update"
    );
}

#[tokio::test]
async fn test_create_passenger_reports_id_when_available() {
    let (client, _) = spawn_stub().await;

    let draft = |email: &str| PassengerDraft {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: Some(email.to_string()),
        phone: None,
    };

    assert_eq!(
        client.create_passenger(&draft("with-id@example.com")).await.unwrap(),
        Some(41)
    );
    assert_eq!(
        client.create_passenger(&draft("plain@example.com")).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_bookings_scoped_to_flight() {
    let (client, seen) = spawn_stub().await;

    let bookings = client.list_bookings(Some(1)).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].seat_number.as_deref(), Some("14C"));
    assert_eq!(
        seen.lock().unwrap().last().cloned(),
        Some("GET /bookings/?flight_id=1".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_request_failed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BackendClient::new(&format!("http://{addr}"));
    let err = client.list_passengers().await.unwrap_err();
    assert!(matches!(
        err,
        CoreError::RequestFailed {
            operation: Operation::FetchPassengers,
            ..
        }
    ));
}
