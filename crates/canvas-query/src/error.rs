use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("table '{0}' has no columns")]
    EmptyTable(String),
    #[error("index '{1}' on table '{0}' has no columns")]
    EmptyIndex(String, String),
}
