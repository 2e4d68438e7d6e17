//! Storage layer for Formcore
//!
//! Handles SQLite-backed persistence including:
//! - Schema creation and version checks
//! - Key-value blob storage for document collections
//! - The form, template and submission data models

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Storage;
pub use models::*;
