use sea_query::{
    Alias, ColumnDef as SeaColumnDef, Expr, ForeignKeyAction, MysqlQueryBuilder,
    PostgresQueryBuilder, SchemaStatementBuilder, SimpleExpr, SqliteQueryBuilder,
};

use canvas_core::{ColumnDef, ColumnType, ComplexColumnType, ReferenceAction, SimpleColumnType};

use super::types::DatabaseBackend;

/// Helper function to convert a schema statement to SQL for a specific backend
pub fn build_schema_statement<T: SchemaStatementBuilder>(
    stmt: &T,
    backend: DatabaseBackend,
) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

pub fn apply_column_type(col: &mut SeaColumnDef, ty: &ColumnType) {
    match ty {
        ColumnType::Simple(simple) => match simple {
            SimpleColumnType::Integer => {
                col.integer();
            }
            SimpleColumnType::BigInt => {
                col.big_integer();
            }
            SimpleColumnType::Real => {
                col.float();
            }
            SimpleColumnType::DoublePrecision => {
                col.double();
            }
            SimpleColumnType::Text => {
                col.text();
            }
            SimpleColumnType::Boolean => {
                col.boolean();
            }
            SimpleColumnType::Timestamp => {
                col.timestamp();
            }
            SimpleColumnType::Timestamptz => {
                col.timestamp_with_time_zone();
            }
            SimpleColumnType::Uuid => {
                col.uuid();
            }
        },
        ColumnType::Complex(ComplexColumnType::Varchar { length }) => {
            col.string_len(*length);
        }
    }
}

pub fn to_sea_fk_action(action: &ReferenceAction) -> ForeignKeyAction {
    match action {
        ReferenceAction::Cascade => ForeignKeyAction::Cascade,
        ReferenceAction::Restrict => ForeignKeyAction::Restrict,
        ReferenceAction::SetNull => ForeignKeyAction::SetNull,
        ReferenceAction::SetDefault => ForeignKeyAction::SetDefault,
        ReferenceAction::NoAction => ForeignKeyAction::NoAction,
    }
}

/// Convert a default value string to the appropriate backend-specific expression
pub fn convert_default_for_backend(default: &str, backend: DatabaseBackend) -> String {
    match default {
        "gen_random_uuid()" => match backend {
            DatabaseBackend::Postgres => "gen_random_uuid()".to_string(),
            DatabaseBackend::MySql => "(UUID())".to_string(),
            DatabaseBackend::Sqlite => "(lower(hex(randomblob(16))))".to_string(),
        },
        "current_timestamp()" | "now()" | "CURRENT_TIMESTAMP" => "CURRENT_TIMESTAMP".to_string(),
        other => other.to_string(),
    }
}

/// Column definition without key markers; keys are attached by the caller.
pub fn build_sea_column_def(backend: DatabaseBackend, column: &ColumnDef) -> SeaColumnDef {
    let mut col = SeaColumnDef::new(Alias::new(&column.name));
    apply_column_type(&mut col, &column.r#type);

    if !column.nullable {
        col.not_null();
    }

    if let Some(default) = &column.default {
        let converted = convert_default_for_backend(default, backend);
        col.default(Into::<SimpleExpr>::into(Expr::cust(converted)));
    }

    if let Some(comment) = &column.comment {
        col.comment(comment);
    }

    col
}
