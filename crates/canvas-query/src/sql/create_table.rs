use sea_query::{Alias, ForeignKey, Index, Table, TableCreateStatement};

use canvas_core::{ColumnDef, TableConstraint};

use super::helpers::{build_sea_column_def, to_sea_fk_action};
use super::types::{BuiltQuery, DatabaseBackend};
use crate::error::QueryError;

/// Single-column auto-increment keys are rendered on the column itself so each
/// backend can emit its native identity syntax.
fn inline_primary_key(constraints: &[TableConstraint]) -> Option<&str> {
    constraints.iter().find_map(|c| match c {
        TableConstraint::PrimaryKey {
            auto_increment: true,
            columns,
        } if columns.len() == 1 => Some(columns[0].as_str()),
        _ => None,
    })
}

fn build_create_table_for_backend(
    backend: DatabaseBackend,
    table: &str,
    columns: &[ColumnDef],
    constraints: &[TableConstraint],
) -> TableCreateStatement {
    let mut stmt = Table::create().table(Alias::new(table)).to_owned();
    let inline_pk = inline_primary_key(constraints);

    for column in columns {
        let mut col = build_sea_column_def(backend, column);
        if inline_pk == Some(column.name.as_str()) {
            col.primary_key().auto_increment();
        }
        stmt.col(&mut col);
    }

    for constraint in constraints {
        match constraint {
            TableConstraint::PrimaryKey { columns: pk_cols, .. } => {
                if inline_pk.is_some() {
                    continue;
                }
                let mut pk_idx = Index::create();
                for c in pk_cols {
                    pk_idx.col(Alias::new(c));
                }
                stmt.primary_key(&mut pk_idx);
            }
            TableConstraint::Unique {
                name,
                columns: unique_cols,
            } => {
                let mut idx = Index::create();
                if let Some(n) = name {
                    idx.name(n);
                }
                for c in unique_cols {
                    idx.col(Alias::new(c));
                }
                stmt.index(idx.unique());
            }
            TableConstraint::ForeignKey {
                name,
                columns: fk_cols,
                ref_table,
                ref_columns,
                on_delete,
                on_update,
            } => {
                let mut fk = ForeignKey::create();
                if let Some(n) = name {
                    fk.name(n);
                }
                fk.from_tbl(Alias::new(table));
                for c in fk_cols {
                    fk.from_col(Alias::new(c));
                }
                fk.to_tbl(Alias::new(ref_table));
                for c in ref_columns {
                    fk.to_col(Alias::new(c));
                }
                if let Some(action) = on_delete {
                    fk.on_delete(to_sea_fk_action(action));
                }
                if let Some(action) = on_update {
                    fk.on_update(to_sea_fk_action(action));
                }
                stmt.foreign_key(&mut fk);
            }
        }
    }

    stmt
}

/// `COMMENT ON COLUMN` statements for Postgres, which has no inline column
/// comment. MySQL renders comments inside `CREATE TABLE`; SQLite has none.
fn build_column_comments(backend: DatabaseBackend, table: &str, columns: &[ColumnDef]) -> Vec<BuiltQuery> {
    if backend != DatabaseBackend::Postgres {
        return Vec::new();
    }
    columns
        .iter()
        .filter_map(|column| {
            let comment = column.comment.as_ref()?;
            let escaped = comment.replace('\'', "''");
            Some(BuiltQuery::Raw(format!(
                "COMMENT ON COLUMN \"{}\".\"{}\" IS '{}'",
                table, column.name, escaped
            )))
        })
        .collect()
}

pub fn build_create_table(
    backend: DatabaseBackend,
    table: &str,
    columns: &[ColumnDef],
    constraints: &[TableConstraint],
) -> Result<Vec<BuiltQuery>, QueryError> {
    if columns.is_empty() {
        return Err(QueryError::EmptyTable(table.to_string()));
    }
    let mut queries = vec![BuiltQuery::CreateTable(Box::new(
        build_create_table_for_backend(backend, table, columns, constraints),
    ))];
    queries.extend(build_column_comments(backend, table, columns));
    Ok(queries)
}
