//! Database connection management

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::error::{StoreError, Result};
use crate::utils::generate_database_id;
use crate::DB_VERSION;
use super::{schema, queries};

/// Database connection wrapper
pub struct Storage {
    /// Path to the database file
    path: PathBuf,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Storage {
    /// Open a storage database at the specified path, creating the schema
    /// and properties row on first use.
    ///
    /// An empty database is a valid store; there is no "not found" path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }

        match queries::get_properties(&conn)? {
            Some(props) => {
                if props.version != DB_VERSION {
                    return Err(StoreError::InvalidVersion(props.version));
                }
            }
            None => {
                let db_id = generate_database_id();
                queries::set_properties(&conn, &db_id, DB_VERSION)?;
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            conn: Some(conn),
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            StoreError::DatabaseError("Database not open".to_string())
        })
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Read a serialized collection from its logical key.
    ///
    /// A missing key reads as the empty collection.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let conn = self.connection()?;
        match queries::get_blob(conn, key)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize a collection wholesale under its logical key
    pub fn store_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let conn = self.connection()?;
        let blob = serde_json::to_string(items)?;
        queries::set_blob(conn, key, &blob)?;
        queries::touch_properties(conn)?;
        Ok(())
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        self.close();
    }
}
