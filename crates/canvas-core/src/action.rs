#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{ColumnDef, IndexDef, TableConstraint, TableName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct MigrationPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub version: u32,
    pub actions: Vec<MigrationAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MigrationAction {
    CreateTable {
        table: TableName,
        columns: Vec<ColumnDef>,
        constraints: Vec<TableConstraint>,
    },
    AddIndex {
        table: TableName,
        index: IndexDef,
    },
    DeleteTable {
        table: TableName,
    },
}

impl MigrationAction {
    pub fn table(&self) -> &str {
        match self {
            MigrationAction::CreateTable { table, .. }
            | MigrationAction::AddIndex { table, .. }
            | MigrationAction::DeleteTable { table } => table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_is_tagged_by_type() {
        let action = MigrationAction::DeleteTable {
            table: "canvas-ai_art".into(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "delete_table", "table": "canvas-ai_art" })
        );
    }

    #[test]
    fn plan_parses_from_json() {
        let plan: MigrationPlan = serde_json::from_str(
            r#"{
                "version": 1,
                "actions": [
                    {
                        "type": "add_index",
                        "table": "canvas-ai_user",
                        "index": { "name": "name_idx", "columns": ["name"] }
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(plan.version, 1);
        assert!(plan.comment.is_none());
        assert_eq!(plan.actions[0].table(), "canvas-ai_user");
    }
}
