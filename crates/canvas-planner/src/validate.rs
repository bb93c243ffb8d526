use std::collections::{HashMap, HashSet};

use canvas_core::{ColumnDef, RelationDef, RelationKind, SchemaDef, TableConstraint, TableDef};

use crate::error::{ForeignKeyTypeMismatchError, PlannerError};

/// Validate a schema declaration for data integrity issues.
/// Checks for:
/// - Duplicate table names and duplicate column names
/// - Missing primary keys and more than one primary key declaration per table
/// - auto_increment on non-integer columns
/// - Constraints and indexes referencing non-existent columns
/// - Foreign keys referencing non-existent tables or columns, with a different
///   column count, an incompatible column type, or a target that is neither
///   the primary key nor a unique key of the referenced table
/// - Relations that do not line up with a declared foreign key
pub fn validate_schema(schema: &SchemaDef) -> Result<(), PlannerError> {
    let mut table_names = HashSet::new();
    for table in &schema.tables {
        if !table_names.insert(table.name.as_str()) {
            return Err(PlannerError::DuplicateTableName(table.name.clone()));
        }
    }

    for table in &schema.tables {
        validate_declared_keys(table)?;
    }

    let normalized = schema.normalized();
    let table_map: HashMap<&str, &TableDef> = normalized
        .tables
        .iter()
        .map(|t| (t.name.as_str(), t))
        .collect();

    for table in &normalized.tables {
        validate_table(table, &table_map)?;
    }

    for relation in &normalized.relations {
        validate_relation(relation, &normalized, &table_map)?;
    }

    Ok(())
}

/// Checks that run on the table as written, before inline markers are folded
/// into table-level constraints.
fn validate_declared_keys(table: &TableDef) -> Result<(), PlannerError> {
    let mut column_names = HashSet::new();
    for column in &table.columns {
        if !column_names.insert(column.name.as_str()) {
            return Err(PlannerError::DuplicateColumnName(
                table.name.clone(),
                column.name.clone(),
            ));
        }
    }

    let inline_pk: Vec<&ColumnDef> = table.columns.iter().filter(|c| c.is_primary_key()).collect();
    let table_pks: Vec<&[String]> = table
        .constraints
        .iter()
        .filter_map(|c| match c {
            TableConstraint::PrimaryKey { columns, .. } => Some(columns.as_slice()),
            _ => None,
        })
        .collect();

    // Composite keys are declared at table level; two inline markers are two keys.
    if inline_pk.len() > 1 {
        return Err(PlannerError::MultiplePrimaryKeys(
            table.name.clone(),
            join_names(inline_pk.iter().map(|c| c.name.as_str())),
        ));
    }
    if table_pks.len() > 1 {
        return Err(PlannerError::MultiplePrimaryKeys(
            table.name.clone(),
            table_pks
                .iter()
                .map(|cols| format!("({})", cols.join(", ")))
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }
    if let (Some(inline), Some(declared)) = (inline_pk.first(), table_pks.first()) {
        if declared.len() != 1 || declared[0] != inline.name {
            return Err(PlannerError::MultiplePrimaryKeys(
                table.name.clone(),
                format!("{}, ({})", inline.name, declared.join(", ")),
            ));
        }
    }
    if inline_pk.is_empty() && table_pks.is_empty() {
        return Err(PlannerError::MissingPrimaryKey(table.name.clone()));
    }

    for column in &inline_pk {
        let auto_increment = column
            .primary_key
            .as_ref()
            .is_some_and(|pk| pk.auto_increment());
        if auto_increment && !column.r#type.supports_auto_increment() {
            return Err(PlannerError::InvalidAutoIncrement(
                table.name.clone(),
                column.name.clone(),
            ));
        }
    }

    for constraint in &table.constraints {
        if let TableConstraint::PrimaryKey {
            auto_increment: true,
            columns,
        } = constraint
        {
            for name in columns {
                let supported = table
                    .column(name)
                    .is_some_and(|c| c.r#type.supports_auto_increment());
                if !supported {
                    return Err(PlannerError::InvalidAutoIncrement(
                        table.name.clone(),
                        name.clone(),
                    ));
                }
            }
        }
    }

    Ok(())
}

fn validate_table(
    table: &TableDef,
    table_map: &HashMap<&str, &TableDef>,
) -> Result<(), PlannerError> {
    let table_columns: HashSet<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();

    for constraint in &table.constraints {
        validate_constraint(constraint, table, &table_columns, table_map)?;
    }

    for index in &table.indexes {
        if index.columns.is_empty() {
            return Err(PlannerError::EmptyConstraintColumns(
                table.name.clone(),
                format!("Index({})", index.name),
            ));
        }
        for col in &index.columns {
            if !table_columns.contains(col.as_str()) {
                return Err(PlannerError::IndexColumnNotFound(
                    table.name.clone(),
                    index.name.clone(),
                    col.clone(),
                ));
            }
        }
    }

    Ok(())
}

fn validate_constraint(
    constraint: &TableConstraint,
    table: &TableDef,
    table_columns: &HashSet<&str>,
    table_map: &HashMap<&str, &TableDef>,
) -> Result<(), PlannerError> {
    let columns = constraint.columns();
    if columns.is_empty() {
        return Err(PlannerError::EmptyConstraintColumns(
            table.name.clone(),
            constraint.kind().to_string(),
        ));
    }
    for col in columns {
        if !table_columns.contains(col.as_str()) {
            return Err(PlannerError::ConstraintColumnNotFound(
                table.name.clone(),
                constraint.kind().to_string(),
                col.clone(),
            ));
        }
    }

    let TableConstraint::ForeignKey {
        ref_table,
        ref_columns,
        ..
    } = constraint
    else {
        return Ok(());
    };

    if ref_columns.is_empty() {
        return Err(PlannerError::EmptyConstraintColumns(
            ref_table.clone(),
            "ForeignKey (ref_columns)".to_string(),
        ));
    }

    let target = table_map.get(ref_table.as_str()).ok_or_else(|| {
        PlannerError::ForeignKeyTableNotFound(
            table.name.clone(),
            columns.join(", "),
            ref_table.clone(),
        )
    })?;

    if columns.len() != ref_columns.len() {
        return Err(PlannerError::ForeignKeyArityMismatch(
            table.name.clone(),
            columns.join(", "),
            ref_table.clone(),
            ref_columns.join(", "),
        ));
    }

    for (col, ref_col) in columns.iter().zip(ref_columns) {
        let Some(referenced) = target.column(ref_col) else {
            return Err(PlannerError::ForeignKeyColumnNotFound(
                table.name.clone(),
                columns.join(", "),
                ref_table.clone(),
                ref_col.clone(),
            ));
        };
        let Some(local) = table.column(col) else {
            return Err(PlannerError::ConstraintColumnNotFound(
                table.name.clone(),
                constraint.kind().to_string(),
                col.clone(),
            ));
        };
        if !local.r#type.is_compatible_with(&referenced.r#type) {
            return Err(PlannerError::ForeignKeyTypeMismatch(Box::new(
                ForeignKeyTypeMismatchError {
                    table: table.name.clone(),
                    column: col.clone(),
                    column_type: format!("{:?}", local.r#type),
                    ref_table: ref_table.clone(),
                    ref_column: ref_col.clone(),
                    ref_type: format!("{:?}", referenced.r#type),
                },
            )));
        }
    }

    if !is_candidate_key(target, ref_columns) {
        return Err(PlannerError::ForeignKeyTargetNotUnique(
            table.name.clone(),
            columns.join(", "),
            ref_table.clone(),
            ref_columns.join(", "),
        ));
    }

    Ok(())
}

/// Whether `columns` are exactly the primary key or a unique key of `table`.
fn is_candidate_key(table: &TableDef, columns: &[String]) -> bool {
    let wanted: HashSet<&str> = columns.iter().map(String::as_str).collect();
    let same_set = |cols: &[String]| {
        cols.len() == wanted.len() && cols.iter().all(|c| wanted.contains(c.as_str()))
    };

    let by_constraint = table.constraints.iter().any(|c| match c {
        TableConstraint::PrimaryKey { columns, .. } | TableConstraint::Unique { columns, .. } => {
            same_set(columns)
        }
        TableConstraint::ForeignKey { .. } => false,
    });
    by_constraint || table.indexes.iter().any(|i| i.unique && same_set(&i.columns))
}

fn validate_relation(
    relation: &RelationDef,
    schema: &SchemaDef,
    table_map: &HashMap<&str, &TableDef>,
) -> Result<(), PlannerError> {
    for (table_name, columns) in [
        (&relation.from_table, &relation.from_columns),
        (&relation.to_table, &relation.to_columns),
    ] {
        let table = table_map.get(table_name.as_str()).ok_or_else(|| {
            PlannerError::RelationTableNotFound(relation.name.clone(), table_name.clone())
        })?;
        for col in columns {
            if table.column(col).is_none() {
                return Err(PlannerError::RelationColumnNotFound(
                    relation.name.clone(),
                    table_name.clone(),
                    col.clone(),
                ));
            }
        }
    }

    match relation.kind {
        RelationKind::BelongsTo => {
            let backed_by_fk = table_map
                .get(relation.from_table.as_str())
                .is_some_and(|table| {
                    table.constraints.iter().any(|c| {
                        matches!(c, TableConstraint::ForeignKey { columns, ref_table, ref_columns, .. }
                            if *columns == relation.from_columns
                                && *ref_table == relation.to_table
                                && *ref_columns == relation.to_columns)
                    })
                });
            if !backed_by_fk {
                return Err(PlannerError::RelationMismatch(
                    relation.name.clone(),
                    format!(
                        "no foreign key {}.({}) -> {}.({})",
                        relation.from_table,
                        relation.from_columns.join(", "),
                        relation.to_table,
                        relation.to_columns.join(", ")
                    ),
                ));
            }
        }
        RelationKind::HasMany => {
            if !schema.relations.iter().any(|r| r.is_inverse_of(relation)) {
                return Err(PlannerError::RelationMismatch(
                    relation.name.clone(),
                    format!(
                        "no belongs_to relation {}.({}) -> {}.({})",
                        relation.to_table,
                        relation.to_columns.join(", "),
                        relation.from_table,
                        relation.from_columns.join(", ")
                    ),
                ));
            }
        }
    }

    Ok(())
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
