//! # Response Recorder
//!
//! Writes each probed response to the log file and appends a truncated JSON
//! snapshot to the SQLite log table.

use rusqlite::Connection;
use serde_json::Value;
use tracing::info;

use crate::http::response::ApiResponse;
use crate::store;

/// Maximum number of characters of the serialized body kept per record.
const SNAPSHOT_LIMIT: usize = 500;

/// Record one completed response: emit log lines with the URL, status code,
/// and the start of the pretty-printed body, then insert a log record whose
/// snapshot is the compact serialization capped at [`SNAPSHOT_LIMIT`]
/// characters. A body that does not parse as JSON is an error.
pub fn record_response(conn: &Connection, response: &ApiResponse) -> Result<(), String> {
    let json: Value = serde_json::from_str(&response.body)
        .map_err(|e| format!("Response from {} is not valid JSON: {e}", response.url))?;

    let pretty = serde_json::to_string_pretty(&json)
        .map_err(|e| format!("Failed to serialize response body: {e}"))?;
    info!("Request URL: {}", response.url);
    info!("Status Code: {}", response.status);
    info!("Response: {}", truncate(&pretty, SNAPSHOT_LIMIT));

    let compact = serde_json::to_string(&json)
        .map_err(|e| format!("Failed to serialize response body: {e}"))?;
    store::insert_record(
        conn,
        &response.url,
        response.status,
        &truncate(&compact, SNAPSHOT_LIMIT),
    )
}

/// First `max` characters of `text` (character-based, not byte-based).
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
