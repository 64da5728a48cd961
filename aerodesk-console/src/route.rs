use serde::Serialize;

/// Which console a request path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Staff dashboard: flights, airports and rosters.
    Admin,
    /// Passenger flight finder and ticket purchase.
    Passenger,
}

impl View {
    /// Anything under `/admin` is the staff dashboard; every other path
    /// (including `/` and `/main_page`) is the passenger front.
    pub fn for_path(path: &str) -> Self {
        if path.starts_with("/admin") {
            View::Admin
        } else {
            View::Passenger
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            View::Admin => "/admin",
            View::Passenger => "/main_page",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Admin => "Airline Admin Console",
            View::Passenger => "Airline Flight Finder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_prefix() {
        assert_eq!(View::for_path("/admin"), View::Admin);
        assert_eq!(View::for_path("/admin/flights/3/roster"), View::Admin);
    }

    #[test]
    fn test_everything_else_is_passenger() {
        assert_eq!(View::for_path("/"), View::Passenger);
        assert_eq!(View::for_path("/main_page"), View::Passenger);
        assert_eq!(View::for_path(""), View::Passenger);
        assert_eq!(View::for_path("/flights"), View::Passenger);
    }
}
