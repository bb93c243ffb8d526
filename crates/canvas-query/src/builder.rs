use canvas_core::MigrationPlan;

use crate::error::QueryError;
use crate::sql::{BuiltQuery, DatabaseBackend, build_action_queries};

/// Queries for every action of `plan`, in plan order.
pub fn build_plan_queries(
    backend: DatabaseBackend,
    plan: &MigrationPlan,
) -> Result<Vec<BuiltQuery>, QueryError> {
    let mut queries: Vec<BuiltQuery> = Vec::new();
    for action in &plan.actions {
        queries.extend(build_action_queries(backend, action)?);
    }
    Ok(queries)
}
