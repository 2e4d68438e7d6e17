//! SQL query operations for database access
//!
//! This module provides low-level query functions for the blob store and
//! properties tables. For document-level operations, use the FormStore API.

use rusqlite::{Connection, params};
use chrono::{DateTime, Utc};
use crate::error::Result;

/// Timestamp format used in database
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a DateTime for database storage
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp from database
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    chrono::NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

/// Get current timestamp formatted for database
pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

// ============================================================================
// Properties queries
// ============================================================================

/// Raw properties row
pub struct RawProperties {
    pub database_id: String,
    pub version: String,
    pub create_timestamp: Option<String>,
    pub update_timestamp: Option<String>,
}

/// Get the properties row, if one exists
pub fn get_properties(conn: &Connection) -> Result<Option<RawProperties>> {
    let result = conn.query_row(
        "SELECT database_id, version, create_timestamp, update_timestamp
         FROM builder_properties LIMIT 1",
        [],
        |row| {
            Ok(RawProperties {
                database_id: row.get(0)?,
                version: row.get(1)?,
                create_timestamp: row.get(2)?,
                update_timestamp: row.get(3)?,
            })
        },
    );
    Ok(result.ok())
}

/// Set properties (insert new row)
pub fn set_properties(conn: &Connection, database_id: &str, version: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO builder_properties (database_id, version, create_timestamp, update_timestamp)
         VALUES (?, ?, ?, ?)",
        params![database_id, version, now_timestamp(), now_timestamp()],
    )?;
    Ok(())
}

/// Refresh the properties update timestamp
pub fn touch_properties(conn: &Connection) -> Result<()> {
    conn.execute(
        "UPDATE builder_properties SET update_timestamp = ?",
        params![now_timestamp()],
    )?;
    Ok(())
}

// ============================================================================
// Blob store queries
// ============================================================================

/// Read the blob stored under a logical key
pub fn get_blob(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn.query_row(
        "SELECT value FROM builder_store WHERE key = ?",
        params![key],
        |row| row.get(0),
    );
    Ok(result.ok())
}

/// Write the blob stored under a logical key, replacing any previous value
pub fn set_blob(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO builder_store (key, value, update_timestamp) VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                        update_timestamp = excluded.update_timestamp",
        params![key, value, now_timestamp()],
    )?;
    Ok(())
}
