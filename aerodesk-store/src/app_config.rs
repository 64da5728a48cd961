use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Root of the airline REST API, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    /// Appended to the connection-error banner.
    #[serde(default = "default_backend_hint")]
    pub backend_hint: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_hint: default_backend_hint(),
        }
    }
}

fn default_backend_hint() -> String {
    "Make sure the airline backend is running.".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `AERODESK__BACKEND__BASE_URL=http://10.0.0.5:8000`
            .add_source(config::Environment::with_prefix("AERODESK").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn parse(toml: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_console_section_is_optional() {
        let config = parse(
            r#"
            [server]
            port = 3000

            [backend]
            base_url = "http://127.0.0.1:8000"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.console.backend_hint, default_backend_hint());
    }

    #[test]
    fn test_missing_backend_is_an_error() {
        assert!(parse("[server]\nport = 3000\n").is_err());
    }
}
