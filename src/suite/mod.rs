//! # Check Suite
//!
//! Runs the probe checks sequentially against the configured endpoints.
//! Each check is independent: a failure is recorded in the run report and
//! the remaining checks still execute.

use rusqlite::Connection;
use serde::Serialize;
use serde_json::Value;

use crate::analysis;
use crate::config::{Config, Endpoint};
use crate::http::client;
use crate::recorder;
use crate::store;

/// Result of one executed check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

/// Summary report for a suite run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    fn record(&mut self, name: &str, result: Result<(), String>) {
        self.total += 1;
        let (passed, message) = match result {
            Ok(()) => {
                self.passed += 1;
                (true, String::new())
            }
            Err(message) => {
                self.failed += 1;
                (false, message)
            }
        };
        self.outcomes.push(CheckOutcome {
            name: name.to_string(),
            passed,
            message,
        });
    }

    /// Print one line per check plus a closing summary.
    pub fn print(&self) {
        for outcome in &self.outcomes {
            if outcome.passed {
                println!("PASS {}", outcome.name);
            } else {
                println!("FAIL {}: {}", outcome.name, outcome.message);
            }
        }
        println!(
            "{} checks: {} passed, {} failed",
            self.total, self.passed, self.failed
        );
    }
}

/// Payload for the create-user check.
#[derive(Debug, Clone, Serialize)]
struct NewUser {
    name: String,
    job: String,
}

/// Execute every check in order and collect the outcomes.
pub async fn run_suite(
    client: &reqwest::Client,
    conn: &Connection,
    config: &Config,
) -> RunReport {
    let mut report = RunReport::default();

    for endpoint in &config.endpoints {
        report.record(
            &format!("endpoint status: {}", endpoint.name),
            check_endpoint_status(client, conn, config, endpoint).await,
        );
    }

    for endpoint in &config.endpoints {
        report.record(
            &format!("json format: {}", endpoint.name),
            check_json_format(client, conn, config, endpoint).await,
        );
    }

    report.record("create user", check_create_user(client, conn, config).await);
    report.record("store has records", check_store_not_empty(conn));
    report.record("retrieve records", check_retrieval(conn));
    report.record("status distribution", analysis::print_distribution(conn));

    report
}

async fn check_endpoint_status(
    client: &reqwest::Client,
    conn: &Connection,
    config: &Config,
    endpoint: &Endpoint,
) -> Result<(), String> {
    let url = config.endpoint_url(&endpoint.path);
    let response = client::get(client, &url).await?;
    recorder::record_response(conn, &response)?;

    if response.status != endpoint.expected_status {
        return Err(format!(
            "Failed at {}, expected status {}, got {}",
            endpoint.path, endpoint.expected_status, response.status
        ));
    }
    Ok(())
}

async fn check_json_format(
    client: &reqwest::Client,
    conn: &Connection,
    config: &Config,
    endpoint: &Endpoint,
) -> Result<(), String> {
    let url = config.endpoint_url(&endpoint.path);
    let response = client::get(client, &url).await?;
    recorder::record_response(conn, &response)?;

    let content_type = response.content_type.clone().unwrap_or_default();
    if !content_type.starts_with("application/json") {
        return Err(format!(
            "Response from {} is not JSON (content type `{content_type}`)",
            endpoint.path
        ));
    }

    let json: Value = serde_json::from_str(&response.body)
        .map_err(|e| format!("Failed to parse body from {}: {e}", endpoint.path))?;
    if !json.is_object() {
        return Err(format!("Response from {} is not a JSON object", endpoint.path));
    }
    Ok(())
}

async fn check_create_user(
    client: &reqwest::Client,
    conn: &Connection,
    config: &Config,
) -> Result<(), String> {
    let new_user = NewUser {
        name: "John Doe".to_string(),
        job: "Software Engineer".to_string(),
    };
    let payload = serde_json::to_value(&new_user)
        .map_err(|e| format!("Failed to serialize user payload: {e}"))?;

    let url = config.endpoint_url("/users");
    let response = client::post_json(client, &url, &payload).await?;
    recorder::record_response(conn, &response)?;

    if response.status != 201 {
        return Err(format!("User creation failed, status {}", response.status));
    }

    let data: Value = serde_json::from_str(&response.body)
        .map_err(|e| format!("Failed to parse create-user response: {e}"))?;
    if data["name"] != Value::String(new_user.name.clone()) {
        return Err(format!("Name mismatch in response: {}", data["name"]));
    }
    if data["job"] != Value::String(new_user.job.clone()) {
        return Err(format!("Job mismatch in response: {}", data["job"]));
    }
    Ok(())
}

fn check_store_not_empty(conn: &Connection) -> Result<(), String> {
    let count = store::count_records(conn)?;
    if count == 0 {
        return Err("Log table should not be empty after probing".to_string());
    }
    Ok(())
}

fn check_retrieval(conn: &Connection) -> Result<(), String> {
    let records = store::fetch_records(conn)?;
    if records.is_empty() {
        return Err("No log records found in the database".to_string());
    }
    for record in &records {
        println!("{record:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{insert_record, open_test_db};

    #[test]
    fn report_counts_passes_and_failures() {
        let mut report = RunReport::default();
        report.record("a", Ok(()));
        report.record("b", Err("boom".to_string()));
        report.record("c", Ok(()));

        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.outcomes.len(), 3);
        assert!(!report.outcomes[1].passed);
        assert_eq!(report.outcomes[1].message, "boom");
    }

    #[test]
    fn failed_check_does_not_stop_later_checks() {
        let mut report = RunReport::default();
        report.record("first", Err("fails".to_string()));
        report.record("second", Ok(()));

        assert_eq!(report.outcomes[1].name, "second");
        assert!(report.outcomes[1].passed);
    }

    #[test]
    fn store_checks_require_records() {
        let conn = open_test_db();
        assert!(check_store_not_empty(&conn).is_err());
        assert!(check_retrieval(&conn).is_err());

        insert_record(&conn, "https://x/users", 200, "{}").unwrap();
        assert!(check_store_not_empty(&conn).is_ok());
        assert!(check_retrieval(&conn).is_ok());
    }
}
