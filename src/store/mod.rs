//! # Response Log Store
//!
//! SQLite-backed append-only log of probed responses. The table persists
//! across runs; records are inserted once and never updated or deleted.

use std::path::Path;

use rusqlite::{Connection, params};

/// One stored response: identifier, request URL, HTTP status code, and a
/// truncated snapshot of the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub id: i64,
    pub url: String,
    pub status_code: u16,
    pub response: String,
}

/// Open the file-backed log database, creating the schema if needed.
pub fn open_db(path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(path)
        .map_err(|err| format!("Failed to open SQLite at `{}`: {err}", path.display()))?;

    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|err| format!("Failed to set SQLite journal mode: {err}"))?;

    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS api_logs (
         id INTEGER PRIMARY KEY AUTOINCREMENT,
         url TEXT NOT NULL,
         status_code INTEGER NOT NULL,
         response TEXT NOT NULL
       );",
    )
    .map_err(|err| format!("Failed to initialize SQLite schema: {err}"))
}

/// Append one record to the log. The insert is autocommitted; there is no
/// batching across records.
pub fn insert_record(
    conn: &Connection,
    url: &str,
    status_code: u16,
    response: &str,
) -> Result<(), String> {
    conn.execute(
        "INSERT INTO api_logs (url, status_code, response) VALUES (?1, ?2, ?3);",
        params![url, status_code, response],
    )
    .map_err(|err| format!("Failed to insert log record: {err}"))?;

    Ok(())
}

/// Every stored record, in no guaranteed order.
pub fn fetch_records(conn: &Connection) -> Result<Vec<LogRecord>, String> {
    let mut stmt = conn
        .prepare("SELECT id, url, status_code, response FROM api_logs;")
        .map_err(|err| format!("Failed to prepare log query: {err}"))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(LogRecord {
                id: row.get(0)?,
                url: row.get(1)?,
                status_code: row.get(2)?,
                response: row.get(3)?,
            })
        })
        .map_err(|err| format!("Failed to query log records: {err}"))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("Failed to read log record row: {err}"))
}

/// Every stored status code, one entry per record.
pub fn fetch_status_codes(conn: &Connection) -> Result<Vec<u16>, String> {
    let mut stmt = conn
        .prepare("SELECT status_code FROM api_logs;")
        .map_err(|err| format!("Failed to prepare status query: {err}"))?;

    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|err| format!("Failed to query status codes: {err}"))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("Failed to read status code row: {err}"))
}

/// Number of records in the log.
pub fn count_records(conn: &Connection) -> Result<i64, String> {
    conn.query_row("SELECT COUNT(*) FROM api_logs;", [], |row| row.get(0))
        .map_err(|err| format!("Failed to count log records: {err}"))
}

#[cfg(test)]
pub(crate) fn open_test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_fetch_roundtrip() {
        let conn = open_test_db();
        insert_record(&conn, "https://x/users", 200, "{\"a\":1}").unwrap();

        let records = fetch_records(&conn).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://x/users");
        assert_eq!(records[0].status_code, 200);
        assert_eq!(records[0].response, "{\"a\":1}");
    }

    #[test]
    fn identifiers_are_unique_and_monotonic() {
        let conn = open_test_db();
        insert_record(&conn, "https://x/a", 200, "{}").unwrap();
        insert_record(&conn, "https://x/b", 404, "{}").unwrap();
        insert_record(&conn, "https://x/c", 200, "{}").unwrap();

        let records = fetch_records(&conn).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn fetch_is_idempotent_without_writes() {
        let conn = open_test_db();
        insert_record(&conn, "https://x/users", 200, "{}").unwrap();
        insert_record(&conn, "https://x/users", 404, "{}").unwrap();

        let first = fetch_records(&conn).unwrap();
        let second = fetch_records(&conn).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn status_codes_cover_all_records() {
        let conn = open_test_db();
        insert_record(&conn, "https://x/a", 200, "{}").unwrap();
        insert_record(&conn, "https://x/b", 200, "{}").unwrap();
        insert_record(&conn, "https://x/c", 404, "{}").unwrap();

        let mut codes = fetch_status_codes(&conn).unwrap();
        codes.sort_unstable();
        assert_eq!(codes, vec![200, 200, 404]);
    }

    #[test]
    fn count_tracks_inserts() {
        let conn = open_test_db();
        assert_eq!(count_records(&conn).unwrap(), 0);

        insert_record(&conn, "https://x/a", 200, "{}").unwrap();
        assert_eq!(count_records(&conn).unwrap(), 1);

        insert_record(&conn, "https://x/b", 201, "{}").unwrap();
        assert_eq!(count_records(&conn).unwrap(), 2);
    }
}
