use aerodesk_core::repository::{
    AirportRepository, BookingRepository, FlightRepository, Operation, PassengerRepository,
};
use aerodesk_core::{CoreError, CoreResult, FlightFilter};
use aerodesk_shared::{
    Airport, Booking, BookingDraft, BookingUpdate, Flight, FlightDraft, Passenger, PassengerDraft,
    PassengerUpdate,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP client for the airline REST backend.
///
/// Every call is a single request: no retries, no caching and no timeout
/// beyond what the transport imposes. Any non-2xx status or transport error
/// becomes [`CoreError::RequestFailed`] tagged with the attempted [`Operation`].
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

/// FastAPI error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        op: Operation,
        path: &str,
        query: &[(&str, &str)],
    ) -> CoreResult<T> {
        debug!(operation = %op, path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        let resp = check_status(op, resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| CoreError::request_failed(op, format!("invalid response body: {}", e)))
    }

    async fn post<B: Serialize>(&self, op: Operation, path: &str, body: &B) -> CoreResult<serde_json::Value> {
        debug!(operation = %op, path, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        let resp = check_status(op, resp).await?;
        Ok(read_lenient(resp).await)
    }

    async fn put<B: Serialize>(&self, op: Operation, path: &str, body: &B) -> CoreResult<()> {
        debug!(operation = %op, path, "PUT");
        let resp = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        check_status(op, resp).await?;
        Ok(())
    }

    async fn delete(&self, op: Operation, path: &str) -> CoreResult<()> {
        debug!(operation = %op, path, "DELETE");
        let resp = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        check_status(op, resp).await?;
        Ok(())
    }
}

fn transport_error(op: Operation, err: reqwest::Error) -> CoreError {
    CoreError::request_failed(op, err.to_string())
}

async fn check_status(op: Operation, resp: reqwest::Response) -> CoreResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| match body.detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or(text);
    let reason = if detail.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {}", status.as_u16(), detail)
    };
    Err(CoreError::request_failed(op, reason))
}

/// Mutation responses are informational (`{"message": ...}`); an unparsable body is not an error.
async fn read_lenient(resp: reqwest::Response) -> serde_json::Value {
    let text = resp.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(serde_json::Value::Null)
}

#[async_trait]
impl FlightRepository for BackendClient {
    async fn list_flights(&self, filter: &FlightFilter) -> CoreResult<Vec<Flight>> {
        let filter = filter.normalized();
        self.get(Operation::FetchFlights, "/flights/", &filter.query_pairs())
            .await
    }

    async fn get_flight(&self, flight_id: i64) -> CoreResult<Flight> {
        self.get(Operation::FetchFlight, &format!("/flights/{flight_id}"), &[])
            .await
    }

    async fn create_flight(&self, draft: &FlightDraft) -> CoreResult<()> {
        self.post(Operation::CreateFlight, "/flights/", draft).await?;
        Ok(())
    }

    async fn update_flight(&self, flight_id: i64, draft: &FlightDraft) -> CoreResult<()> {
        self.put(Operation::UpdateFlight, &format!("/flights/{flight_id}"), draft)
            .await
    }

    async fn delete_flight(&self, flight_id: i64) -> CoreResult<()> {
        self.delete(Operation::DeleteFlight, &format!("/flights/{flight_id}"))
            .await
    }
}

#[async_trait]
impl AirportRepository for BackendClient {
    async fn list_airports(&self) -> CoreResult<Vec<Airport>> {
        self.get(Operation::FetchAirports, "/airports/", &[]).await
    }

    async fn create_airport(&self, airport: &Airport) -> CoreResult<()> {
        self.post(Operation::CreateAirport, "/airports/", airport).await?;
        Ok(())
    }
}

#[async_trait]
impl PassengerRepository for BackendClient {
    async fn list_passengers(&self) -> CoreResult<Vec<Passenger>> {
        self.get(Operation::FetchPassengers, "/passengers/", &[]).await
    }

    async fn create_passenger(&self, draft: &PassengerDraft) -> CoreResult<Option<i64>> {
        let body = self
            .post(Operation::CreatePassenger, "/passengers/", draft)
            .await?;
        Ok(body.get("passenger_id").and_then(serde_json::Value::as_i64))
    }

    async fn update_passenger(
        &self,
        passenger_id: i64,
        update: &PassengerUpdate,
    ) -> CoreResult<()> {
        self.put(
            Operation::UpdatePassenger,
            &format!("/passengers/{passenger_id}"),
            update,
        )
        .await
    }
}

#[async_trait]
impl BookingRepository for BackendClient {
    async fn list_bookings(&self, flight_id: Option<i64>) -> CoreResult<Vec<Booking>> {
        match flight_id {
            Some(id) => {
                let id = id.to_string();
                self.get(Operation::FetchBookings, "/bookings/", &[("flight_id", id.as_str())])
                    .await
            }
            None => self.get(Operation::FetchBookings, "/bookings/", &[]).await,
        }
    }

    async fn create_booking(&self, draft: &BookingDraft) -> CoreResult<()> {
        self.post(Operation::CreateBooking, "/bookings/", draft).await?;
        Ok(())
    }

    async fn update_booking(&self, booking_id: i64, update: &BookingUpdate) -> CoreResult<()> {
        self.put(
            Operation::UpdateBooking,
            &format!("/bookings/{booking_id}"),
            update,
        )
        .await
    }

    async fn delete_booking(&self, booking_id: i64) -> CoreResult<()> {
        self.delete(Operation::DeleteBooking, &format!("/bookings/{booking_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/flights/"), "http://127.0.0.1:8000/flights/");
    }
}
