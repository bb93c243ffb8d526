#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::error::ConfigError;
use crate::file_format::FileFormat;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "canvas.json";

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const BACKEND_ENV: &str = "CANVAS_BACKEND";

pub fn default_version_table() -> String {
    canvas_naming::default_version_table()
}

/// Top-level canvas configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Backend used by `sql` when no flag is given.
    #[serde(default)]
    pub backend: Backend,
    /// Connection string for `migrate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    /// Table that records applied plan versions.
    #[serde(default = "default_version_table")]
    pub version_table: String,
    #[serde(default)]
    pub schema_format: FileFormat,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            database_url: None,
            version_table: default_version_table(),
            schema_format: FileFormat::default(),
        }
    }
}

impl CanvasConfig {
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn version_table(&self) -> &str {
        &self.version_table
    }

    pub fn schema_format(&self) -> FileFormat {
        self.schema_format
    }

    /// Overlay values from the environment; `lookup` returns a variable's value.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.database_url = Some(url);
        }
        if let Some(backend) = lookup(BACKEND_ENV).filter(|v| !v.is_empty()) {
            self.backend = backend.parse()?;
        }
        Ok(self)
    }

    /// Overlay values from the process environment.
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.apply_env(|key| std::env::var(key).ok())
    }
}
