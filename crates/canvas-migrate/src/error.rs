use canvas_planner::PlannerError;
use canvas_query::QueryError;
use sea_orm::DbErr;

#[derive(thiserror::Error, Debug)]
pub enum MigrationError {
    #[error("invalid schema: {0}")]
    Planner(#[from] PlannerError),
    #[error("failed to build SQL: {0}")]
    Query(#[from] QueryError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("unsupported database backend: {0}")]
    UnsupportedBackend(String),
    #[error("version table holds an invalid version: {0}")]
    InvalidVersion(i32),
}
