//! Database schema definitions

/// SQL to create the properties table
pub const CREATE_PROPERTIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS builder_properties (
    database_id     CHAR(32) NOT NULL PRIMARY KEY,
    version         CHAR(10),
    create_timestamp TEXT,
    update_timestamp TEXT
)
"#;

/// SQL to create the blob store table (one row per logical collection key)
pub const CREATE_STORE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS builder_store (
    key             VARCHAR PRIMARY KEY NOT NULL,
    value           TEXT,
    update_timestamp TEXT
)
"#;

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_PROPERTIES_TABLE,
    CREATE_STORE_TABLE,
];
