use sea_query::{
    IndexCreateStatement, InsertStatement, MysqlQueryBuilder, PostgresQueryBuilder,
    SelectStatement, SqliteQueryBuilder, TableCreateStatement, TableDropStatement,
};

use super::helpers::build_schema_statement;

/// Database backend for SQL generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    MySql,
    Sqlite,
}

/// A statement that can be rendered to SQL for any database backend
#[derive(Debug, Clone)]
pub enum BuiltQuery {
    CreateTable(Box<TableCreateStatement>),
    DropTable(Box<TableDropStatement>),
    CreateIndex(Box<IndexCreateStatement>),
    Insert(Box<InsertStatement>),
    Select(Box<SelectStatement>),
    /// SQL sea-query cannot express, already written for the backend it was built for.
    Raw(String),
}

impl BuiltQuery {
    /// Build SQL string for the specified database backend
    pub fn build(&self, backend: DatabaseBackend) -> String {
        match self {
            BuiltQuery::CreateTable(stmt) => build_schema_statement(stmt.as_ref(), backend),
            BuiltQuery::DropTable(stmt) => build_schema_statement(stmt.as_ref(), backend),
            BuiltQuery::CreateIndex(stmt) => build_schema_statement(stmt.as_ref(), backend),
            BuiltQuery::Insert(stmt) => match backend {
                DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
                DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
                DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
            },
            BuiltQuery::Select(stmt) => match backend {
                DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
                DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
                DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
            },
            BuiltQuery::Raw(sql) => sql.clone(),
        }
    }
}
