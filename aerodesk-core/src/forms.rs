use aerodesk_shared::{Airport, FareClass, FlightDraft, PassengerDraft};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Purchase details entered on the passenger page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub seat_number: String,
    #[serde(default)]
    pub fare_class: FareClass,
}

impl PurchaseForm {
    /// Name, email and seat are mandatory. Checked before any backend call.
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.seat_number,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(CoreError::ValidationError(
                "Please fill in at least name, email, and seat number".to_string(),
            ));
        }
        Ok(())
    }

    /// Lower-cased email used to find an existing passenger.
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn passenger_draft(&self) -> PassengerDraft {
        let phone = self.phone.trim();
        PassengerDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: Some(self.email.trim().to_string()),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

pub fn validate_flight(draft: &FlightDraft) -> CoreResult<()> {
    if draft.flight_number.trim().is_empty()
        || draft.departure_airport.trim().is_empty()
        || draft.arrival_airport.trim().is_empty()
    {
        return Err(CoreError::ValidationError(
            "Please fill in flight number, departure airport and arrival airport".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_airport(airport: &Airport) -> CoreResult<()> {
    let fields = [
        &airport.airport_code,
        &airport.airport_name,
        &airport.city,
        &airport.country,
    ];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(CoreError::ValidationError(
            "Please fill in all fields".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PurchaseForm {
        PurchaseForm {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: " Grace@Navy.mil ".to_string(),
            phone: String::new(),
            seat_number: "12A".to_string(),
            fare_class: FareClass::Business,
        }
    }

    #[test]
    fn test_purchase_form_required_fields() {
        assert!(form().validate().is_ok());

        for blank in 0..4 {
            let mut f = form();
            match blank {
                0 => f.first_name = "  ".to_string(),
                1 => f.last_name.clear(),
                2 => f.email.clear(),
                _ => f.seat_number.clear(),
            }
            assert!(matches!(f.validate(), Err(CoreError::ValidationError(_))));
        }
    }

    #[test]
    fn test_phone_is_optional() {
        let draft = form().passenger_draft();
        assert_eq!(draft.phone, None);
        assert_eq!(draft.email.as_deref(), Some("Grace@Navy.mil"));
        assert_eq!(form().email_key(), "grace@navy.mil");
    }

    #[test]
    fn test_fare_class_defaults_to_economy() {
        let parsed: PurchaseForm = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","email":"a@b.c","seat_number":"1A"}"#,
        )
        .unwrap();
        assert_eq!(parsed.fare_class, FareClass::Economy);
        assert_eq!(parsed.phone, "");
    }

    #[test]
    fn test_airport_requires_all_fields() {
        let mut airport = Airport {
            airport_code: "SEA".to_string(),
            airport_name: "Seattle-Tacoma".to_string(),
            city: "Seattle".to_string(),
            country: "USA".to_string(),
        };
        assert!(validate_airport(&airport).is_ok());
        airport.city.clear();
        assert!(validate_airport(&airport).is_err());
    }
}
