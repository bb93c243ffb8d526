use anyhow::{Result, anyhow};
use canvas_planner::validate_schema;
use colored::Colorize;

pub fn cmd_validate() -> Result<()> {
    let schema = canvas_ai::schema();
    validate_schema(&schema).map_err(|e| anyhow!("schema validation failed: {}", e))?;

    println!(
        "{} {} tables, {} relations",
        "Schema is valid:".bright_green().bold(),
        schema.tables.len().to_string().bright_yellow(),
        schema.relations.len().to_string().bright_yellow()
    );
    for table in &schema.tables {
        println!("  {} ({} columns)", table.name.bright_white(), table.columns.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_passes() {
        cmd_validate().unwrap();
    }
}
