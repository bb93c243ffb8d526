pub mod error;
pub mod plan;
pub mod validate;

pub use error::PlannerError;
pub use plan::{INITIAL_VERSION, dependency_order, plan_initial_migration, plan_teardown};
pub use validate::validate_schema;
