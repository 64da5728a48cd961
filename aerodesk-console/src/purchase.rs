use aerodesk_core::forms::PurchaseForm;
use aerodesk_core::repository::Backend;
use aerodesk_core::{CoreError, CoreResult};
use aerodesk_shared::pii::mask_email;
use aerodesk_shared::{BookingDraft, FareClass, Passenger, PassengerUpdate};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of a successful ticket purchase.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketReceipt {
    pub flight_id: i64,
    pub passenger_id: i64,
    /// `false` when an existing passenger with the same email was reused.
    pub passenger_created: bool,
    pub seat_number: String,
    pub fare_class: FareClass,
}

fn find_by_email<'a>(passengers: &'a [Passenger], email: &str) -> Option<&'a Passenger> {
    passengers.iter().find(|p| p.has_email(email))
}

/// Books a seat on `flight_id`, reusing the passenger record with the same
/// email (case-insensitive) or creating one.
///
/// Steps, each awaited in order:
/// 1. validate the form locally, no backend call on failure;
/// 2. list passengers and look the email up;
/// 3. reuse and best-effort update the match, or create a new passenger and
///    take its id from the create response, falling back to re-listing and
///    matching the email again;
/// 4. create the booking.
///
/// Two concurrent purchases with the same new email can still both miss each
/// other and create two passengers when the backend does not report ids.
pub async fn purchase_ticket(
    backend: &dyn Backend,
    flight_id: i64,
    form: &PurchaseForm,
) -> CoreResult<TicketReceipt> {
    form.validate()?;

    let email = form.email_key();
    let masked = mask_email(&email);
    let draft = form.passenger_draft();

    let passengers = backend.list_passengers().await?;
    let (passenger_id, passenger_created) = match find_by_email(&passengers, &email) {
        Some(existing) => {
            let passenger_id = existing.passenger_id;
            info!(passenger_id, email = %masked, "Reusing passenger for purchase");
            if let Err(e) = backend
                .update_passenger(passenger_id, &PassengerUpdate::from(&draft))
                .await
            {
                warn!(passenger_id, "Best-effort passenger update failed: {}", e);
            }
            (passenger_id, false)
        }
        None => {
            let reported = backend.create_passenger(&draft).await?;
            let passenger_id = match reported {
                Some(id) => id,
                None => {
                    let refreshed = backend.list_passengers().await?;
                    find_by_email(&refreshed, &email)
                        .map(|p| p.passenger_id)
                        .ok_or_else(|| CoreError::PassengerResolutionFailed(masked.clone()))?
                }
            };
            info!(passenger_id, email = %masked, "Created passenger for purchase");
            (passenger_id, true)
        }
    };

    let seat_number = form.seat_number.trim().to_string();
    backend
        .create_booking(&BookingDraft {
            passenger_id,
            flight_id,
            seat_number: Some(seat_number.clone()),
            fare_class: Some(form.fare_class),
        })
        .await?;

    info!(flight_id, passenger_id, seat = %seat_number, "Ticket booked");

    Ok(TicketReceipt {
        flight_id,
        passenger_id,
        passenger_created,
        seat_number,
        fare_class: form.fare_class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodesk_core::repository::Operation;
    use aerodesk_shared::BookingStatus;
    use aerodesk_store::InMemoryBackend;

    fn grace() -> Passenger {
        Passenger {
            passenger_id: 3,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: Some("Grace@Navy.mil".to_string()),
            phone: None,
        }
    }

    fn form(email: &str) -> PurchaseForm {
        PurchaseForm {
            first_name: "Grace".to_string(),
            last_name: "Murray Hopper".to_string(),
            email: email.to_string(),
            phone: "555-0142".to_string(),
            seat_number: "12A".to_string(),
            fare_class: FareClass::Business,
        }
    }

    #[tokio::test]
    async fn test_existing_email_reuses_passenger() {
        let backend = InMemoryBackend::new().with_passengers(vec![grace()]);

        let receipt = purchase_ticket(&backend, 1, &form("grace@navy.MIL ")).await.unwrap();

        assert_eq!(receipt.passenger_id, 3);
        assert!(!receipt.passenger_created);
        assert_eq!(backend.count(Operation::CreatePassenger), 0);
        assert_eq!(backend.count(Operation::UpdatePassenger), 1);
        assert_eq!(backend.passengers().len(), 1);
        assert_eq!(backend.passengers()[0].last_name, "Murray Hopper");

        let bookings = backend.bookings();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].passenger_id, 3);
        assert_eq!(bookings[0].flight_id, 1);
        assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_new_email_creates_exactly_one_passenger() {
        let backend = InMemoryBackend::new().with_passengers(vec![grace()]);

        let receipt = purchase_ticket(&backend, 1, &form("ada@example.com")).await.unwrap();

        assert!(receipt.passenger_created);
        assert_eq!(receipt.passenger_id, 4);
        assert_eq!(backend.count(Operation::CreatePassenger), 1);
        assert_eq!(
            backend.calls(),
            vec![
                Operation::FetchPassengers,
                Operation::CreatePassenger,
                Operation::FetchPassengers,
                Operation::CreateBooking,
            ]
        );

        let booking = &backend.bookings()[0];
        assert_eq!(booking.flight_id, 1);
        assert_eq!(booking.passenger_id, 4);
        assert_eq!(booking.seat_number.as_deref(), Some("12A"));
        assert_eq!(booking.fare_class.as_deref(), Some("Business"));
    }

    #[tokio::test]
    async fn test_reported_id_skips_refetch() {
        let backend = InMemoryBackend::new();
        backend.report_created_ids(true);

        let receipt = purchase_ticket(&backend, 7, &form("ada@example.com")).await.unwrap();

        assert_eq!(receipt.passenger_id, 1);
        assert_eq!(backend.count(Operation::FetchPassengers), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_make_no_calls() {
        let backend = InMemoryBackend::new();
        let mut incomplete = form("ada@example.com");
        incomplete.seat_number = String::new();

        let err = purchase_ticket(&backend, 1, &incomplete).await.unwrap_err();

        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_created_passenger_fails() {
        let backend = InMemoryBackend::new();
        backend.hide_new_passengers(true);

        let err = purchase_ticket(&backend, 1, &form("ada@example.com")).await.unwrap_err();

        assert!(matches!(err, CoreError::PassengerResolutionFailed(_)));
        assert_eq!(backend.count(Operation::CreateBooking), 0);
    }

    #[tokio::test]
    async fn test_profile_update_failure_is_not_fatal() {
        let backend = InMemoryBackend::new().with_passengers(vec![grace()]);
        backend.fail_on(Operation::UpdatePassenger);

        let receipt = purchase_ticket(&backend, 1, &form("grace@navy.mil")).await.unwrap();

        assert_eq!(receipt.passenger_id, 3);
        assert_eq!(backend.bookings().len(), 1);
    }

    #[tokio::test]
    async fn test_booking_failure_surfaces() {
        let backend = InMemoryBackend::new().with_passengers(vec![grace()]);
        backend.fail_on(Operation::CreateBooking);

        let err = purchase_ticket(&backend, 1, &form("grace@navy.mil")).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::RequestFailed {
                operation: Operation::CreateBooking,
                ..
            }
        ));
    }
}
