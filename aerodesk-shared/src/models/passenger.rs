use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub passenger_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Passenger {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive email comparison. Passengers without an email never match.
    pub fn has_email(&self, email: &str) -> bool {
        let wanted = email.trim().to_lowercase();
        self.email
            .as_deref()
            .is_some_and(|own| !own.is_empty() && own.to_lowercase() == wanted)
    }
}

/// Body for `POST /passengers/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Partial body for `PUT /passengers/{id}`; unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&PassengerDraft> for PassengerUpdate {
    fn from(draft: &PassengerDraft) -> Self {
        Self {
            first_name: Some(draft.first_name.clone()),
            last_name: Some(draft.last_name.clone()),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
        }
    }
}
