pub mod column;
pub mod constraint;
pub mod foreign_key;
pub mod index;
pub mod names;
pub mod primary_key;
pub mod reference;
pub mod relation;
pub mod str_or_bool;
pub mod table;

pub use column::{ColumnDef, ColumnType, ComplexColumnType, SimpleColumnType, TypeFamily};
pub use constraint::TableConstraint;
pub use foreign_key::ForeignKeyDef;
pub use index::IndexDef;
pub use names::{ColumnName, IndexName, TableName};
pub use primary_key::{PrimaryKeyDef, PrimaryKeySyntax};
pub use reference::ReferenceAction;
pub use relation::{RelationDef, RelationKind};
pub use str_or_bool::StrOrBool;
pub use table::{SchemaDef, TableDef};
