pub mod backend;
pub mod config;
pub mod error;
pub mod file_format;

pub use backend::Backend;
pub use config::{
    BACKEND_ENV, CONFIG_FILE_NAME, CanvasConfig, DATABASE_URL_ENV, default_version_table,
};
pub use error::ConfigError;
pub use file_format::FileFormat;
