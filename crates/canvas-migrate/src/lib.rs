mod error;
mod options;
mod runtime;

pub use error::MigrationError;
pub use options::{MigrationOptions, MigrationOutcome};
pub use runtime::{preview_migrations, query_backend, run_migrations};
