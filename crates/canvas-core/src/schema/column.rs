#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{
    foreign_key::ForeignKeyDef,
    names::{ColumnName, TableName},
    primary_key::{PrimaryKeyDef, PrimaryKeySyntax},
    str_or_bool::StrOrBool,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ColumnDef {
    pub name: ColumnName,
    pub r#type: ColumnType,
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKeySyntax>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<StrOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<StrOrBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKeyDef>,
}

impl ColumnDef {
    /// A nullable column with no markers.
    pub fn new(name: impl Into<ColumnName>, r#type: ColumnType) -> Self {
        Self {
            name: name.into(),
            r#type,
            nullable: true,
            default: None,
            comment: None,
            primary_key: None,
            unique: None,
            index: None,
            foreign_key: None,
        }
    }

    /// `serial`-style identity column: NOT NULL, auto-incrementing primary key.
    pub fn serial(name: impl Into<ColumnName>) -> Self {
        Self::new(name, ColumnType::Simple(SimpleColumnType::Integer))
            .not_null()
            .primary_key_auto_increment()
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = Some(PrimaryKeySyntax::Bool(true));
        self
    }

    pub fn primary_key_auto_increment(mut self) -> Self {
        self.primary_key = Some(PrimaryKeySyntax::Object(PrimaryKeyDef {
            auto_increment: true,
        }));
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = Some(StrOrBool::Bool(true));
        self
    }

    /// Secondary index with an explicit name.
    pub fn index(mut self, name: impl Into<String>) -> Self {
        self.index = Some(StrOrBool::Str(name.into()));
        self
    }

    /// Single-column reference with the engine's default referential actions.
    pub fn references(mut self, table: impl Into<TableName>, column: impl Into<ColumnName>) -> Self {
        self.foreign_key = Some(ForeignKeyDef {
            ref_table: table.into(),
            ref_columns: vec![column.into()],
            on_delete: None,
            on_update: None,
        });
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
            .as_ref()
            .is_some_and(PrimaryKeySyntax::is_declared)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case", untagged)]
pub enum ColumnType {
    Simple(SimpleColumnType),
    Complex(ComplexColumnType),
}

/// Storage family of a column type, used to compare key columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Integer,
    Float,
    String,
    Boolean,
    Timestamp,
    Uuid,
}

impl ColumnType {
    pub fn varchar(length: u32) -> Self {
        ColumnType::Complex(ComplexColumnType::Varchar { length })
    }

    /// Returns true if this type supports auto_increment (integer types only)
    pub fn supports_auto_increment(&self) -> bool {
        match self {
            ColumnType::Simple(ty) => ty.supports_auto_increment(),
            ColumnType::Complex(_) => false,
        }
    }

    pub fn family(&self) -> TypeFamily {
        match self {
            ColumnType::Simple(ty) => match ty {
                SimpleColumnType::Integer | SimpleColumnType::BigInt => TypeFamily::Integer,
                SimpleColumnType::Real | SimpleColumnType::DoublePrecision => TypeFamily::Float,
                SimpleColumnType::Text => TypeFamily::String,
                SimpleColumnType::Boolean => TypeFamily::Boolean,
                SimpleColumnType::Timestamp | SimpleColumnType::Timestamptz => {
                    TypeFamily::Timestamp
                }
                SimpleColumnType::Uuid => TypeFamily::Uuid,
            },
            ColumnType::Complex(ComplexColumnType::Varchar { .. }) => TypeFamily::String,
        }
    }

    /// Whether a foreign key column of this type can reference a column of `other`.
    /// Varchar lengths may differ; the storage family may not.
    pub fn is_compatible_with(&self, other: &ColumnType) -> bool {
        self.family() == other.family()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SimpleColumnType {
    Integer,
    BigInt,
    Real,
    DoublePrecision,
    Text,
    Boolean,
    Timestamp,
    Timestamptz,
    Uuid,
}

impl SimpleColumnType {
    /// Returns true if this type supports auto_increment (integer types only)
    pub fn supports_auto_increment(&self) -> bool {
        matches!(self, SimpleColumnType::Integer | SimpleColumnType::BigInt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ComplexColumnType {
    Varchar { length: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SimpleColumnType::Integer, true)]
    #[case(SimpleColumnType::BigInt, true)]
    #[case(SimpleColumnType::Real, false)]
    #[case(SimpleColumnType::Text, false)]
    #[case(SimpleColumnType::Boolean, false)]
    #[case(SimpleColumnType::Timestamp, false)]
    fn test_simple_column_type_supports_auto_increment(
        #[case] ty: SimpleColumnType,
        #[case] expected: bool,
    ) {
        assert_eq!(ty.supports_auto_increment(), expected);
        assert_eq!(ColumnType::Simple(ty).supports_auto_increment(), expected);
    }

    #[test]
    fn test_varchar_does_not_support_auto_increment() {
        assert!(!ColumnType::varchar(256).supports_auto_increment());
    }

    #[rstest]
    #[case(ColumnType::varchar(256), ColumnType::varchar(1024), true)]
    #[case(ColumnType::varchar(256), ColumnType::Simple(SimpleColumnType::Text), true)]
    #[case(
        ColumnType::Simple(SimpleColumnType::Integer),
        ColumnType::Simple(SimpleColumnType::BigInt),
        true
    )]
    #[case(ColumnType::Simple(SimpleColumnType::Integer), ColumnType::varchar(256), false)]
    #[case(
        ColumnType::Simple(SimpleColumnType::Real),
        ColumnType::Simple(SimpleColumnType::Integer),
        false
    )]
    fn test_is_compatible_with(
        #[case] from: ColumnType,
        #[case] to: ColumnType,
        #[case] expected: bool,
    ) {
        assert_eq!(from.is_compatible_with(&to), expected);
        assert_eq!(to.is_compatible_with(&from), expected);
    }

    #[test]
    fn test_serial_column() {
        let id = ColumnDef::serial("id");
        assert!(!id.nullable);
        assert!(id.is_primary_key());
        assert!(id.primary_key.as_ref().unwrap().auto_increment());
        assert_eq!(id.r#type, ColumnType::Simple(SimpleColumnType::Integer));
    }

    #[test]
    fn test_builder_markers() {
        let col = ColumnDef::new("user_email", ColumnType::varchar(256))
            .not_null()
            .references("canvas-ai_user", "email");
        let fk = col.foreign_key.unwrap();
        assert_eq!(fk.ref_table, "canvas-ai_user");
        assert_eq!(fk.ref_columns, vec!["email".to_string()]);
        assert!(fk.on_delete.is_none());
    }

    #[test]
    fn test_primary_key_false_is_not_declared() {
        let mut col = ColumnDef::new("id", ColumnType::Simple(SimpleColumnType::Integer));
        col.primary_key = Some(PrimaryKeySyntax::Bool(false));
        assert!(!col.is_primary_key());
    }

    #[test]
    fn test_column_type_serde_shapes() {
        let simple = serde_json::to_value(ColumnType::Simple(SimpleColumnType::Timestamp)).unwrap();
        assert_eq!(simple, serde_json::json!("timestamp"));

        let varchar = serde_json::to_value(ColumnType::varchar(256)).unwrap();
        assert_eq!(varchar, serde_json::json!({ "kind": "varchar", "length": 256 }));

        let parsed: ColumnType = serde_json::from_str(r#"{"kind":"varchar","length":1024}"#).unwrap();
        assert_eq!(parsed, ColumnType::varchar(1024));
    }

    #[test]
    fn test_column_def_omits_empty_markers() {
        let col = ColumnDef::new("title", ColumnType::varchar(256)).not_null();
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "title",
                "type": { "kind": "varchar", "length": 256 },
                "nullable": false
            })
        );
    }
}
