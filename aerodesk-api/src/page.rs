use aerodesk_console::views::Banner;
use aerodesk_console::View;
use serde::{Deserialize, Serialize};

/// Envelope every console page is served in.
#[derive(Debug, Serialize)]
pub struct Page<V> {
    pub view: View,
    pub title: &'static str,
    pub home: &'static str,
    pub banner: Option<Banner>,
    #[serde(flatten)]
    pub body: V,
}

impl<V: Serialize> Page<V> {
    pub fn render(view: View, body: V, error: Option<&str>, hint: &str) -> Self {
        Self {
            view,
            title: view.title(),
            home: view.home_path(),
            banner: error.map(|message| Banner::connection(message, hint)),
            body,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Answer to a delete that has not been confirmed yet.
#[derive(Debug, Serialize)]
pub struct ConfirmationRequired {
    pub confirmation_required: bool,
    pub message: &'static str,
}

impl ConfirmationRequired {
    pub fn new(message: &'static str) -> Self {
        Self {
            confirmation_required: true,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodesk_console::CONNECTION_ERROR;
    use serde_json::json;

    #[derive(Serialize)]
    struct Body {
        total: usize,
    }

    #[test]
    fn test_banner_carries_hint() {
        let page = Page::render(View::Passenger, Body { total: 0 }, Some(CONNECTION_ERROR), "Start the API on :8000.");
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["view"], "passenger");
        assert_eq!(value["home"], "/main_page");
        assert_eq!(value["total"], 0);
        assert_eq!(value["banner"]["title"], "Connection Error");
        assert_eq!(value["banner"]["hint"], "Start the API on :8000.");
    }

    #[test]
    fn test_no_error_no_banner() {
        let page = Page::render(View::Admin, Body { total: 2 }, None, "");
        assert_eq!(serde_json::to_value(&page).unwrap()["banner"], json!(null));
    }
}
