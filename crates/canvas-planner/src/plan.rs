use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use canvas_core::{MigrationAction, MigrationPlan, SchemaDef, TableConstraint, TableDef};

use crate::error::PlannerError;
use crate::validate::validate_schema;

/// Version assigned to the plan that creates the schema from nothing.
pub const INITIAL_VERSION: u32 = 1;

/// Topologically sort tables based on foreign key dependencies.
/// Referenced tables come before the tables that reference them; ties keep
/// declaration order. Self references are ignored.
pub fn dependency_order(tables: &[TableDef]) -> Result<Vec<&TableDef>, PlannerError> {
    let names: HashSet<&str> = tables.iter().map(|t| t.name.as_str()).collect();

    let mut dependencies: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    for table in tables {
        let deps = dependencies.entry(table.name.as_str()).or_default();
        for constraint in &table.normalize().constraints {
            if let TableConstraint::ForeignKey { ref_table, .. } = constraint
                && let Some(target) = names.get(ref_table.as_str())
                && *target != table.name
            {
                deps.insert(*target);
            }
        }
    }

    // Kahn's algorithm; in_degree counts unresolved dependencies per table.
    let mut in_degree: HashMap<&str, usize> = dependencies
        .iter()
        .map(|(name, deps)| (*name, deps.len()))
        .collect();

    let mut queue: VecDeque<&TableDef> = tables
        .iter()
        .filter(|t| in_degree.get(t.name.as_str()) == Some(&0))
        .collect();
    let mut ordered: Vec<&TableDef> = Vec::with_capacity(tables.len());

    while let Some(table) = queue.pop_front() {
        ordered.push(table);
        for dependent in tables {
            let waits_on_table = dependencies
                .get(dependent.name.as_str())
                .is_some_and(|deps| deps.contains(table.name.as_str()));
            if waits_on_table
                && let Some(degree) = in_degree.get_mut(dependent.name.as_str())
            {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    if ordered.len() != tables.len() {
        let remaining: Vec<&str> = tables
            .iter()
            .map(|t| t.name.as_str())
            .filter(|name| !ordered.iter().any(|t| t.name == *name))
            .collect();
        return Err(PlannerError::DependencyCycle(remaining.join(", ")));
    }

    Ok(ordered)
}

/// Build the plan that creates every table and secondary index of `schema`
/// on an empty database.
pub fn plan_initial_migration(schema: &SchemaDef) -> Result<MigrationPlan, PlannerError> {
    validate_schema(schema)?;

    let normalized = schema.normalized();
    let ordered = dependency_order(&normalized.tables)?;

    let mut actions: Vec<MigrationAction> = ordered
        .iter()
        .map(|table| MigrationAction::CreateTable {
            table: table.name.clone(),
            columns: table.columns.clone(),
            constraints: table.constraints.clone(),
        })
        .collect();

    for table in &ordered {
        actions.extend(table.indexes.iter().map(|index| MigrationAction::AddIndex {
            table: table.name.clone(),
            index: index.clone(),
        }));
    }

    Ok(MigrationPlan {
        comment: Some("initial schema".to_string()),
        version: INITIAL_VERSION,
        actions,
    })
}

/// Build the plan that drops every table of `schema`, referencing tables first.
/// Teardown is not a versioned step and carries version 0.
pub fn plan_teardown(schema: &SchemaDef) -> Result<MigrationPlan, PlannerError> {
    let ordered = dependency_order(&schema.tables)?;
    Ok(MigrationPlan {
        comment: Some("teardown".to_string()),
        version: 0,
        actions: ordered
            .iter()
            .rev()
            .map(|table| MigrationAction::DeleteTable {
                table: table.name.clone(),
            })
            .collect(),
    })
}
