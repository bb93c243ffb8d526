pub mod action;
pub mod schema;

pub use action::{MigrationAction, MigrationPlan};
pub use schema::{
    ColumnDef, ColumnName, ColumnType, ComplexColumnType, ForeignKeyDef, IndexDef, IndexName,
    PrimaryKeyDef, PrimaryKeySyntax, ReferenceAction, RelationDef, RelationKind, SchemaDef,
    SimpleColumnType, StrOrBool, TableConstraint, TableDef, TableName, TypeFamily,
};
