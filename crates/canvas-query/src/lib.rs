pub mod builder;
pub mod error;
pub mod sql;

pub use builder::build_plan_queries;
pub use error::QueryError;
pub use sql::{
    BuiltQuery, DatabaseBackend, build_action_queries, build_create_version_table,
    build_record_version, build_select_current_version,
};
