#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::{ColumnName, TableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// One row of `from_table` owns many rows of `to_table`.
    HasMany,
    /// Each row of `from_table` points at exactly one row of `to_table`.
    BelongsTo,
}

/// Navigable association between two tables.
///
/// `from_columns` live on `from_table` and `to_columns` on `to_table`. For a
/// `BelongsTo` relation the `from_columns` are the foreign key; for a
/// `HasMany` relation the `to_columns` are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct RelationDef {
    pub name: String,
    pub kind: RelationKind,
    pub from_table: TableName,
    pub from_columns: Vec<ColumnName>,
    pub to_table: TableName,
    pub to_columns: Vec<ColumnName>,
}

impl RelationDef {
    pub fn has_many(
        name: impl Into<String>,
        (from_table, from_column): (&str, &str),
        (to_table, to_column): (&str, &str),
    ) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::HasMany,
            from_table: from_table.to_string(),
            from_columns: vec![from_column.to_string()],
            to_table: to_table.to_string(),
            to_columns: vec![to_column.to_string()],
        }
    }

    pub fn belongs_to(
        name: impl Into<String>,
        (from_table, from_column): (&str, &str),
        (to_table, to_column): (&str, &str),
    ) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::BelongsTo,
            from_table: from_table.to_string(),
            from_columns: vec![from_column.to_string()],
            to_table: to_table.to_string(),
            to_columns: vec![to_column.to_string()],
        }
    }

    /// Whether `other` describes the same link seen from the opposite table.
    pub fn is_inverse_of(&self, other: &RelationDef) -> bool {
        self.kind != other.kind
            && self.from_table == other.to_table
            && self.to_table == other.from_table
            && self.from_columns == other.to_columns
            && self.to_columns == other.from_columns
    }
}
