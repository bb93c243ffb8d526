use canvas_core::{MigrationPlan, SchemaDef};
use canvas_planner::plan_initial_migration;
use canvas_query::{
    DatabaseBackend, build_create_version_table, build_plan_queries, build_record_version,
    build_select_current_version,
};
use sea_orm::{
    ConnectionTrait, DatabaseBackend as OrmBackend, DatabaseConnection, FromQueryResult,
    Statement, TransactionTrait,
};
use tracing::{debug, info};

use crate::error::MigrationError;
use crate::options::{MigrationOptions, MigrationOutcome};

#[derive(Debug, FromQueryResult)]
struct AppliedVersion {
    version: Option<i32>,
}

/// Map the connection's engine onto the DDL renderer's backend.
pub fn query_backend(backend: OrmBackend) -> Result<DatabaseBackend, MigrationError> {
    #[allow(unreachable_patterns)]
    match backend {
        OrmBackend::Postgres => Ok(DatabaseBackend::Postgres),
        OrmBackend::MySql => Ok(DatabaseBackend::MySql),
        OrmBackend::Sqlite => Ok(DatabaseBackend::Sqlite),
        other => Err(MigrationError::UnsupportedBackend(format!("{other:?}"))),
    }
}

/// SQL that [`run_migrations`] would execute against a `backend` database,
/// version table creation first. Needs no connection.
pub fn preview_migrations(
    backend: DatabaseBackend,
    schema: &SchemaDef,
    options: &MigrationOptions,
) -> Result<MigrationOutcome, MigrationError> {
    let plan = plan_initial_migration(schema)?;
    let mut statements = vec![build_create_version_table(&options.version_table).build(backend)];
    statements.extend(render_plan(backend, &plan)?);
    Ok(MigrationOutcome::DryRun {
        version: plan.version,
        statements,
    })
}

fn render_plan(backend: DatabaseBackend, plan: &MigrationPlan) -> Result<Vec<String>, MigrationError> {
    Ok(build_plan_queries(backend, plan)?
        .iter()
        .map(|q| q.build(backend))
        .collect())
}

/// Bring `db` up to the version of the initial plan for `schema`.
///
/// The plan's statements and the version row are written in one transaction.
/// Engines with implicit DDL commits (MySQL) only get the version row
/// protection, not atomic DDL. With `dry_run` set the database is not touched.
pub async fn run_migrations(
    db: &DatabaseConnection,
    schema: &SchemaDef,
    options: MigrationOptions,
) -> Result<MigrationOutcome, MigrationError> {
    let orm_backend = db.get_database_backend();
    let backend = query_backend(orm_backend)?;

    if options.dry_run {
        return preview_migrations(backend, schema, &options);
    }

    let plan = plan_initial_migration(schema)?;
    let statements = render_plan(backend, &plan)?;
    let ensure_version_table = build_create_version_table(&options.version_table).build(backend);

    debug!(sql = %ensure_version_table, "ensuring version table");
    db.execute_unprepared(&ensure_version_table).await?;

    let current = current_version(db, orm_backend, backend, &options.version_table).await?;
    if current >= plan.version {
        info!(version = current, table = %options.version_table, "schema is up to date");
        return Ok(MigrationOutcome::UpToDate { version: current });
    }

    let txn = db.begin().await?;
    for sql in &statements {
        debug!(sql = %sql, "executing");
        txn.execute_unprepared(sql).await?;
    }
    let record = build_record_version(&options.version_table, plan.version).build(backend);
    debug!(sql = %record, "recording version");
    txn.execute_unprepared(&record).await?;
    txn.commit().await?;

    info!(
        from = current,
        to = plan.version,
        statements = statements.len(),
        "applied migration"
    );
    Ok(MigrationOutcome::Applied {
        version: plan.version,
        statements,
    })
}

async fn current_version(
    db: &DatabaseConnection,
    orm_backend: OrmBackend,
    backend: DatabaseBackend,
    table: &str,
) -> Result<u32, MigrationError> {
    let sql = build_select_current_version(table).build(backend);
    let row = AppliedVersion::find_by_statement(Statement::from_string(orm_backend, sql))
        .one(db)
        .await?;
    match row.and_then(|r| r.version) {
        None => Ok(0),
        Some(v) => u32::try_from(v).map_err(|_| MigrationError::InvalidVersion(v)),
    }
}
