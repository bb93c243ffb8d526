//! Naming conventions for the canvas-ai database schema.
//!
//! Every table of the application lives in a shared database instance, so
//! physical table names carry the project prefix. Constraint and index
//! names are derived from the physical table name to stay unique across
//! the whole database. This crate has no dependencies and is used by every
//! other canvas crate.

/// Prefix shared by every physical table of the project.
pub const TABLE_PREFIX: &str = "canvas-ai_";

/// Logical name of the table that records applied migration versions.
pub const VERSION_TABLE: &str = "schema_version";

// ============================================================================
// Table Naming
// ============================================================================

/// Apply the project prefix to a logical table name.
///
/// Names that already carry the prefix are returned unchanged.
///
/// # Examples
/// ```
/// use canvas_naming::build_table_name;
///
/// assert_eq!(build_table_name("user"), "canvas-ai_user");
/// assert_eq!(build_table_name("canvas-ai_art"), "canvas-ai_art");
/// ```
pub fn build_table_name(name: &str) -> String {
    if name.starts_with(TABLE_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", TABLE_PREFIX, name)
    }
}

/// Physical name of the migration version table.
pub fn default_version_table() -> String {
    build_table_name(VERSION_TABLE)
}

// ============================================================================
// Constraint Naming (for SQL generation)
// ============================================================================

/// Generate index name from table name and columns.
/// Format: ix_{table}__{col1}_{col2}...
pub fn build_index_name(table: &str, columns: &[String]) -> String {
    format!("ix_{}__{}", table, columns.join("_"))
}

/// Generate unique constraint name from table name and columns.
/// Format: uq_{table}__{col1}_{col2}...
pub fn build_unique_constraint_name(table: &str, columns: &[String]) -> String {
    format!("uq_{}__{}", table, columns.join("_"))
}

/// Generate foreign key constraint name from table name and columns.
/// Format: fk_{table}__{col1}_{col2}...
pub fn build_foreign_key_name(table: &str, columns: &[String]) -> String {
    format!("fk_{}__{}", table, columns.join("_"))
}
