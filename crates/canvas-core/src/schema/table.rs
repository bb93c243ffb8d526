#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use canvas_naming::{build_foreign_key_name, build_index_name, build_unique_constraint_name};

use crate::schema::{
    StrOrBool, column::ColumnDef, constraint::TableConstraint, index::IndexDef,
    names::TableName, relation::RelationDef,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct TableDef {
    pub name: TableName,
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub constraints: Vec<TableConstraint>,
    #[serde(default)]
    pub indexes: Vec<IndexDef>,
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Normalizes inline column markers (primary_key, unique, index, foreign_key)
    /// into table-level constraints and indexes, and names every unnamed
    /// unique and foreign key constraint.
    ///
    /// Normalizing an already normalized table returns it unchanged.
    pub fn normalize(&self) -> Self {
        let mut constraints = self.constraints.clone();
        let mut indexes = self.indexes.clone();

        let pk_columns: Vec<&ColumnDef> =
            self.columns.iter().filter(|c| c.is_primary_key()).collect();

        if !pk_columns.is_empty() {
            let has_pk = constraints
                .iter()
                .any(|c| matches!(c, TableConstraint::PrimaryKey { .. }));
            if !has_pk {
                constraints.insert(
                    0,
                    TableConstraint::PrimaryKey {
                        auto_increment: pk_columns.iter().any(|c| {
                            c.primary_key.as_ref().is_some_and(|pk| pk.auto_increment())
                        }),
                        columns: pk_columns.iter().map(|c| c.name.clone()).collect(),
                    },
                );
            }
        }

        for col in &self.columns {
            let name = match &col.unique {
                Some(StrOrBool::Str(name)) => Some(name.clone()),
                Some(StrOrBool::Bool(true)) => Some(build_unique_constraint_name(
                    &self.name,
                    std::slice::from_ref(&col.name),
                )),
                Some(StrOrBool::Bool(false)) | None => None,
            };
            if let Some(name) = name {
                let exists = constraints.iter().any(|c| {
                    matches!(c, TableConstraint::Unique { columns, .. }
                        if columns.len() == 1 && columns[0] == col.name)
                });
                if !exists {
                    constraints.push(TableConstraint::Unique {
                        name: Some(name),
                        columns: vec![col.name.clone()],
                    });
                }
            }

            if let Some(fk) = &col.foreign_key {
                let exists = constraints.iter().any(|c| {
                    matches!(c, TableConstraint::ForeignKey { columns, .. }
                        if columns.len() == 1 && columns[0] == col.name)
                });
                if !exists {
                    constraints.push(TableConstraint::ForeignKey {
                        name: None,
                        columns: vec![col.name.clone()],
                        ref_table: fk.ref_table.clone(),
                        ref_columns: fk.ref_columns.clone(),
                        on_delete: fk.on_delete.clone(),
                        on_update: fk.on_update.clone(),
                    });
                }
            }
        }

        for constraint in &mut constraints {
            match constraint {
                TableConstraint::Unique { name, columns } if name.is_none() => {
                    *name = Some(build_unique_constraint_name(&self.name, columns));
                }
                TableConstraint::ForeignKey { name, columns, .. } if name.is_none() => {
                    *name = Some(build_foreign_key_name(&self.name, columns));
                }
                _ => {}
            }
        }

        // Group columns by index name; first occurrence fixes the order.
        let mut index_groups: HashMap<String, Vec<String>> = HashMap::new();
        let mut index_order: Vec<String> = Vec::new();

        for col in &self.columns {
            let index_name = match &col.index {
                Some(StrOrBool::Str(name)) => name.clone(),
                Some(StrOrBool::Bool(true)) => {
                    build_index_name(&self.name, std::slice::from_ref(&col.name))
                }
                Some(StrOrBool::Bool(false)) | None => continue,
            };
            if !index_groups.contains_key(&index_name) {
                index_order.push(index_name.clone());
            }
            index_groups
                .entry(index_name)
                .or_default()
                .push(col.name.clone());
        }

        for index_name in index_order {
            let Some(columns) = index_groups.remove(&index_name) else {
                continue;
            };
            if !indexes.iter().any(|i| i.name == index_name) {
                indexes.push(IndexDef {
                    name: index_name,
                    columns,
                    unique: false,
                });
            }
        }

        TableDef {
            name: self.name.clone(),
            columns: self.columns.clone(),
            constraints,
            indexes,
        }
    }

    /// Primary key columns after normalization.
    pub fn primary_key_columns(&self) -> Vec<String> {
        self.normalize()
            .constraints
            .into_iter()
            .find_map(|c| match c {
                TableConstraint::PrimaryKey { columns, .. } => Some(columns),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// A complete declaration: tables plus the relations between them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct SchemaDef {
    pub tables: Vec<TableDef>,
    #[serde(default)]
    pub relations: Vec<RelationDef>,
}

impl SchemaDef {
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn normalized(&self) -> Self {
        SchemaDef {
            tables: self.tables.iter().map(TableDef::normalize).collect(),
            relations: self.relations.clone(),
        }
    }
}
