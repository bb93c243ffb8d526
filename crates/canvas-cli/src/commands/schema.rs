use anyhow::Result;
use canvas_config::FileFormat;
use canvas_core::SchemaDef;

use crate::utils::{load_config, render};

pub fn cmd_schema(format: Option<FileFormat>, json_schema: bool) -> Result<()> {
    let config = load_config()?;
    let format = format.unwrap_or(config.schema_format());
    println!("{}", schema_text(format, json_schema)?);
    Ok(())
}

fn schema_text(format: FileFormat, json_schema: bool) -> Result<String> {
    if json_schema {
        render(&schemars::schema_for!(SchemaDef), format)
    } else {
        render(&canvas_ai::schema(), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::json(FileFormat::Json, "\"name\": \"canvas-ai_art\"")]
    #[case::yaml(FileFormat::Yaml, "name: canvas-ai_art")]
    fn declaration_is_printed(#[case] format: FileFormat, #[case] expected: &str) {
        let text = schema_text(format, false).unwrap();
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn printed_declaration_parses_back() {
        let text = schema_text(FileFormat::Json, false).unwrap();
        let parsed: SchemaDef = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, canvas_ai::schema());
    }

    #[test]
    fn json_schema_describes_model() {
        let text = schema_text(FileFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "SchemaDef");
        assert!(value["properties"]["tables"].is_object());
    }
}
