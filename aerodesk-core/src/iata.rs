// ============================================================================
// IATA airline designators
// ============================================================================

const AIRLINES: &[(&str, &str)] = &[
    ("AA", "American Airlines"),
    ("DL", "Delta Air Lines"),
    ("UA", "United Airlines"),
    ("WN", "Southwest Airlines"),
    ("AS", "Alaska Airlines"),
    ("B6", "JetBlue"),
    ("NK", "Spirit Airlines"),
    ("F9", "Frontier Airlines"),
    ("AC", "Air Canada"),
    ("WS", "WestJet"),
    ("BA", "British Airways"),
    ("AF", "Air France"),
    ("KL", "KLM"),
    ("LH", "Lufthansa"),
    ("EK", "Emirates"),
    ("QR", "Qatar Airways"),
    ("SQ", "Singapore Airlines"),
    ("CX", "Cathay Pacific"),
    ("QF", "Qantas"),
    ("NH", "ANA"),
    ("JL", "Japan Airlines"),
    ("IB", "Iberia"),
    ("AZ", "ITA Airways"),
];

pub fn airline_by_code(code: &str) -> Option<&'static str> {
    let code = code.trim().to_uppercase();
    AIRLINES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Airline name from the two-character designator prefix (`AA1234`, `AA 1234`).
pub fn airline_from_flight_number(flight_number: &str) -> Option<&'static str> {
    let prefix: String = flight_number.trim().chars().take(2).collect();
    if prefix.chars().count() < 2 {
        return None;
    }
    airline_by_code(&prefix)
}

/// Canonical airline name for a user query: a known code or an exact name
/// (case-insensitive) resolves to the table entry, anything else is returned
/// trimmed for substring matching.
pub fn normalize_airline_query(query: &str) -> String {
    let q = query.trim();
    if q.is_empty() {
        return String::new();
    }
    if q.chars().count() == 2 {
        if let Some(name) = airline_by_code(q) {
            return name.to_string();
        }
    }
    AIRLINES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(q))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| q.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airline_from_flight_number() {
        assert_eq!(airline_from_flight_number("AA100"), Some("American Airlines"));
        assert_eq!(airline_from_flight_number(" b6 22"), Some("JetBlue"));
        assert_eq!(airline_from_flight_number("X"), None);
        assert_eq!(airline_from_flight_number("ZZ9"), None);
    }

    #[test]
    fn test_normalize_airline_query() {
        assert_eq!(normalize_airline_query("lh"), "Lufthansa");
        assert_eq!(normalize_airline_query("klm"), "KLM");
        assert_eq!(normalize_airline_query(" qatar "), "qatar");
        assert_eq!(normalize_airline_query("   "), "");
    }
}
