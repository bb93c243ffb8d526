//! The canvas-ai data model.
//!
//! [`declaration`] describes the `user` and `art` tables as data, [`entity`]
//! holds the matching sea-orm entities, and [`migrate`] creates the tables
//! on a live connection.

pub mod declaration;
pub mod entity;

pub use canvas_migrate::{MigrationError, MigrationOptions, MigrationOutcome};
pub use declaration::{art_relations, art_table, schema, user_relations, user_table};

use sea_orm::DatabaseConnection;

/// Create the canvas-ai tables on `db` unless they are already at the current version.
pub async fn migrate(
    db: &DatabaseConnection,
    options: MigrationOptions,
) -> Result<MigrationOutcome, MigrationError> {
    canvas_migrate::run_migrations(db, &schema(), options).await
}
