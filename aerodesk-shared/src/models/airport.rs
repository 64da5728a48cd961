use serde::{Deserialize, Serialize};

/// Airport record keyed by its IATA code. The same shape is used for reads and creates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    pub airport_code: String,
    pub airport_name: String,
    pub city: String,
    pub country: String,
}

impl Airport {
    /// Trims every field and uppercases the code.
    pub fn normalized(&self) -> Self {
        Self {
            airport_code: self.airport_code.trim().to_uppercase(),
            airport_name: self.airport_name.trim().to_string(),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_uppercases_code() {
        let airport = Airport {
            airport_code: " jfk ".to_string(),
            airport_name: "John F. Kennedy International ".to_string(),
            city: "New York".to_string(),
            country: " USA".to_string(),
        };

        let normalized = airport.normalized();
        assert_eq!(normalized.airport_code, "JFK");
        assert_eq!(normalized.airport_name, "John F. Kennedy International");
        assert_eq!(normalized.country, "USA");
    }
}
