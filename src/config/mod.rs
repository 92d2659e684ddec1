//! # Probe Configuration
//!
//! Holds the base URL, the endpoint table, and the file paths used by the
//! probe run. Every value has a built-in default mirroring the reqres.in
//! demo API and can be overridden through environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "https://reqres.in/api";
const DEFAULT_DB_FILE: &str = "apiprobe.db";
const DEFAULT_LOG_FILE: &str = "apiprobe.log";

const ENV_BASE_URL: &str = "APIPROBE_BASE_URL";
const ENV_DB_PATH: &str = "APIPROBE_DB";
const ENV_LOG_PATH: &str = "APIPROBE_LOG";

/// A single endpoint to probe, with the status code a healthy service is
/// expected to return for a plain GET.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: String,
    pub path: String,
    pub expected_status: u16,
}

impl Endpoint {
    fn new(name: &str, path: &str, expected_status: u16) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            expected_status,
        }
    }
}

/// Full configuration for one probe run.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub endpoints: Vec<Endpoint>,
}

impl Config {
    /// Build the configuration from defaults, applying environment
    /// overrides where present.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            db_path: env::var(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE)),
            log_path: env::var(ENV_LOG_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE)),
            endpoints: default_endpoints(),
        }
    }

    /// Absolute URL for an endpoint path relative to the base URL.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn default_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("users", "/users", 200),
        Endpoint::new("unknown", "/unknown", 200),
        Endpoint::new("register", "/register", 200),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_table() {
        let endpoints = default_endpoints();
        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0].name, "users");
        assert_eq!(endpoints[0].path, "/users");
        assert!(endpoints.iter().all(|e| e.expected_status == 200));
    }

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let config = Config {
            base_url: "https://reqres.in/api".to_string(),
            db_path: PathBuf::from("apiprobe.db"),
            log_path: PathBuf::from("apiprobe.log"),
            endpoints: default_endpoints(),
        };
        assert_eq!(config.endpoint_url("/users"), "https://reqres.in/api/users");
    }
}
