pub mod add_index;
pub mod create_table;
pub mod delete_table;
pub mod helpers;
pub mod types;
pub mod version_table;

pub use helpers::*;
pub use types::{BuiltQuery, DatabaseBackend};
pub use version_table::{
    build_create_version_table, build_record_version, build_select_current_version,
};

use crate::error::QueryError;
use canvas_core::MigrationAction;

use self::{
    add_index::build_add_index, create_table::build_create_table,
    delete_table::build_delete_table,
};

pub fn build_action_queries(
    backend: DatabaseBackend,
    action: &MigrationAction,
) -> Result<Vec<BuiltQuery>, QueryError> {
    match action {
        MigrationAction::CreateTable {
            table,
            columns,
            constraints,
        } => build_create_table(backend, table, columns, constraints),

        MigrationAction::AddIndex { table, index } => Ok(vec![build_add_index(table, index)?]),

        MigrationAction::DeleteTable { table } => Ok(vec![build_delete_table(table)]),
    }
}
