use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use canvas_config::{CONFIG_FILE_NAME, CanvasConfig};
use colored::Colorize;

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{CONFIG_FILE_NAME} already exists");
    }

    let config = CanvasConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).context("write canvas.json")?;
    println!("{} {}", "created".bright_green(), path.display());
    Ok(())
}
