use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("duplicate table name: {0}")]
    DuplicateTableName(String),
    #[error("duplicate column name: {0}.{1}")]
    DuplicateColumnName(String, String),
    #[error("table '{0}' must have a primary key")]
    MissingPrimaryKey(String),
    #[error("table '{0}' declares more than one primary key: {1}")]
    MultiplePrimaryKeys(String, String),
    #[error("auto_increment requires an integer column: {0}.{1}")]
    InvalidAutoIncrement(String, String),
    #[error("constraint has empty column list: {0}.{1}")]
    EmptyConstraintColumns(String, String),
    #[error("constraint references non-existent column: {0}.{1} -> {2}")]
    ConstraintColumnNotFound(String, String, String),
    #[error("index references non-existent column: {0}.{1} -> {2}")]
    IndexColumnNotFound(String, String, String),
    #[error("foreign key references non-existent table: {0}.{1} -> {2}")]
    ForeignKeyTableNotFound(String, String, String),
    #[error("foreign key references non-existent column: {0}.{1} -> {2}.{3}")]
    ForeignKeyColumnNotFound(String, String, String, String),
    #[error("foreign key column count mismatch: {0}.({1}) -> {2}.({3})")]
    ForeignKeyArityMismatch(String, String, String, String),
    #[error("foreign key type mismatch: {0}")]
    ForeignKeyTypeMismatch(Box<ForeignKeyTypeMismatchError>),
    #[error("foreign key target is neither primary key nor unique: {0}.{1} -> {2}.({3})")]
    ForeignKeyTargetNotUnique(String, String, String, String),
    #[error("relation '{0}' references non-existent table: {1}")]
    RelationTableNotFound(String, String),
    #[error("relation '{0}' references non-existent column: {1}.{2}")]
    RelationColumnNotFound(String, String, String),
    #[error("relation '{0}' does not match any declared foreign key or inverse relation: {1}")]
    RelationMismatch(String, String),
    #[error("foreign keys form a cycle through: {0}")]
    DependencyCycle(String),
}

#[derive(Debug, Error)]
#[error("{table}.{column} ({column_type}) -> {ref_table}.{ref_column} ({ref_type})")]
pub struct ForeignKeyTypeMismatchError {
    pub table: String,
    pub column: String,
    pub column_type: String,
    pub ref_table: String,
    pub ref_column: String,
    pub ref_type: String,
}
