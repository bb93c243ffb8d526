//! Statements for the table that records which plan versions were applied.

use sea_query::{Alias, ColumnDef as SeaColumnDef, Expr, Func, Query, Table};

use super::types::BuiltQuery;

pub const VERSION_COLUMN: &str = "version";
pub const APPLIED_AT_COLUMN: &str = "applied_at";

pub fn build_create_version_table(table: &str) -> BuiltQuery {
    let stmt = Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(
            SeaColumnDef::new(Alias::new(VERSION_COLUMN))
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            SeaColumnDef::new(Alias::new(APPLIED_AT_COLUMN))
                .timestamp()
                .not_null()
                .default(Expr::cust("CURRENT_TIMESTAMP")),
        )
        .to_owned();
    BuiltQuery::CreateTable(Box::new(stmt))
}

/// `SELECT MAX(version) AS version`; NULL when nothing was applied yet.
pub fn build_select_current_version(table: &str) -> BuiltQuery {
    let stmt = Query::select()
        .expr_as(
            Func::max(Expr::col(Alias::new(VERSION_COLUMN))),
            Alias::new(VERSION_COLUMN),
        )
        .from(Alias::new(table))
        .to_owned();
    BuiltQuery::Select(Box::new(stmt))
}

pub fn build_record_version(table: &str, version: u32) -> BuiltQuery {
    let stmt = Query::insert()
        .into_table(Alias::new(table))
        .columns([Alias::new(VERSION_COLUMN)])
        .values_panic([i64::from(version).into()])
        .to_owned();
    BuiltQuery::Insert(Box::new(stmt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::types::DatabaseBackend;
    use rstest::rstest;

    #[rstest]
    #[case::postgres(DatabaseBackend::Postgres, "CREATE TABLE IF NOT EXISTS \"canvas-ai_schema_version\"")]
    #[case::mysql(DatabaseBackend::MySql, "CREATE TABLE IF NOT EXISTS `canvas-ai_schema_version`")]
    #[case::sqlite(DatabaseBackend::Sqlite, "CREATE TABLE IF NOT EXISTS \"canvas-ai_schema_version\"")]
    fn version_table_is_created_once(#[case] backend: DatabaseBackend, #[case] expected: &str) {
        let sql = build_create_version_table("canvas-ai_schema_version").build(backend);
        assert!(sql.contains(expected), "Expected SQL to contain '{}', got: {}", expected, sql);
        assert!(sql.contains("CURRENT_TIMESTAMP"), "{sql}");
    }

    #[test]
    fn current_version_selects_max() {
        let sql = build_select_current_version("v").build(DatabaseBackend::Postgres);
        assert_eq!(sql, r#"SELECT MAX("version") AS "version" FROM "v""#);
    }

    #[test]
    fn record_version_inserts_literal() {
        let sql = build_record_version("v", 1).build(DatabaseBackend::Sqlite);
        assert_eq!(sql, r#"INSERT INTO "v" ("version") VALUES (1)"#);
    }
}
