//! # Status Aggregator
//!
//! Summarizes every status code recorded in the log table into a count per
//! distinct code. The log is cumulative across runs, so the distribution
//! covers the store's whole lifetime, not just the current invocation.

use std::collections::HashMap;

use rusqlite::Connection;

use crate::store;

/// Multiset count of stored status codes.
pub fn status_distribution(conn: &Connection) -> Result<HashMap<u16, usize>, String> {
    let codes = store::fetch_status_codes(conn)?;

    let mut distribution = HashMap::new();
    for code in codes {
        *distribution.entry(code).or_insert(0) += 1;
    }
    Ok(distribution)
}

/// Print the distribution to stdout, one line per distinct status code.
/// Iteration order is whatever the map yields; no ordering is imposed.
pub fn print_distribution(conn: &Connection) -> Result<(), String> {
    let distribution = status_distribution(conn)?;

    println!("Status Code Distribution:");
    for (code, count) in &distribution {
        println!("Status {code}: {count} occurrences");
    }
    Ok(())
}
