use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown database backend: {0} (expected postgres, mysql or sqlite)")]
    UnknownBackend(String),
}
