#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{
    ReferenceAction,
    names::{ColumnName, TableName},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TableConstraint {
    PrimaryKey {
        #[serde(default)]
        auto_increment: bool,
        columns: Vec<ColumnName>,
    },
    Unique {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        columns: Vec<ColumnName>,
    },
    ForeignKey {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        columns: Vec<ColumnName>,
        ref_table: TableName,
        ref_columns: Vec<ColumnName>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_delete: Option<ReferenceAction>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_update: Option<ReferenceAction>,
    },
}

impl TableConstraint {
    /// Short label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TableConstraint::PrimaryKey { .. } => "PrimaryKey",
            TableConstraint::Unique { .. } => "Unique",
            TableConstraint::ForeignKey { .. } => "ForeignKey",
        }
    }

    /// Columns of this table the constraint covers.
    pub fn columns(&self) -> &[ColumnName] {
        match self {
            TableConstraint::PrimaryKey { columns, .. }
            | TableConstraint::Unique { columns, .. }
            | TableConstraint::ForeignKey { columns, .. } => columns,
        }
    }
}
