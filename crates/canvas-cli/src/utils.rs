use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use canvas_config::{Backend, CONFIG_FILE_NAME, CanvasConfig, FileFormat};
use canvas_query::DatabaseBackend;
use serde::Serialize;
use tracing::debug;

/// Load canvas.json from the current directory, falling back to defaults,
/// then apply environment overrides.
pub fn load_config() -> Result<CanvasConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    let config = if path.exists() {
        let content = fs::read_to_string(&path).context("read canvas.json")?;
        serde_json::from_str(&content).context("parse canvas.json")?
    } else {
        debug!("canvas.json not found; using defaults");
        CanvasConfig::default()
    };
    config
        .with_process_env()
        .context("apply environment overrides")
}

pub fn query_backend(backend: Backend) -> DatabaseBackend {
    match backend {
        Backend::Postgres => DatabaseBackend::Postgres,
        Backend::Mysql => DatabaseBackend::MySql,
        Backend::Sqlite => DatabaseBackend::Sqlite,
    }
}

pub fn render<T: Serialize>(value: &T, format: FileFormat) -> Result<String> {
    match format {
        FileFormat::Json => serde_json::to_string_pretty(value).context("serialize JSON"),
        FileFormat::Yaml => serde_yaml::to_string(value).context("serialize YAML"),
    }
}
