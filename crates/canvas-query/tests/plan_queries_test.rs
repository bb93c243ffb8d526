use canvas_core::{ColumnDef, ColumnType, SchemaDef, SimpleColumnType, TableDef};
use canvas_planner::{plan_initial_migration, plan_teardown};
use canvas_query::{
    DatabaseBackend, build_create_version_table, build_plan_queries, build_record_version,
    build_select_current_version,
};

fn schema() -> SchemaDef {
    SchemaDef {
        tables: vec![
            TableDef {
                name: "art".into(),
                columns: vec![
                    ColumnDef::serial("id"),
                    ColumnDef::new("title", ColumnType::varchar(256))
                        .not_null()
                        .index("title_idx"),
                    ColumnDef::new("user_email", ColumnType::varchar(256))
                        .not_null()
                        .references("user", "email"),
                ],
                constraints: vec![],
                indexes: vec![],
            },
            TableDef {
                name: "user".into(),
                columns: vec![
                    ColumnDef::serial("id"),
                    ColumnDef::new("email", ColumnType::varchar(256))
                        .not_null()
                        .unique(),
                    ColumnDef::new("created_at", ColumnType::Simple(SimpleColumnType::Timestamp))
                        .not_null()
                        .default_value("now()"),
                ],
                constraints: vec![],
                indexes: vec![],
            },
        ],
        relations: vec![],
    }
}

#[test]
fn initial_plan_renders_referenced_table_first() {
    let plan = plan_initial_migration(&schema()).unwrap();
    let queries = build_plan_queries(DatabaseBackend::Postgres, &plan).unwrap();
    let sql: Vec<String> = queries
        .iter()
        .map(|q| q.build(DatabaseBackend::Postgres))
        .collect();

    assert_eq!(sql.len(), 3, "{sql:#?}");
    assert!(sql[0].starts_with("CREATE TABLE \"user\""), "{}", sql[0]);
    assert!(sql[0].contains("CONSTRAINT \"uq_user__email\" UNIQUE (\"email\")"), "{}", sql[0]);
    assert!(sql[0].contains("DEFAULT CURRENT_TIMESTAMP"), "{}", sql[0]);
    assert!(sql[1].starts_with("CREATE TABLE \"art\""), "{}", sql[1]);
    assert!(
        sql[1].contains("FOREIGN KEY (\"user_email\") REFERENCES \"user\" (\"email\")"),
        "{}",
        sql[1]
    );
    assert_eq!(sql[2], "CREATE INDEX \"title_idx\" ON \"art\" (\"title\")");
}

#[test]
fn teardown_renders_drops_in_reverse_order() {
    let plan = plan_teardown(&schema()).unwrap();
    let sql: Vec<String> = build_plan_queries(DatabaseBackend::Sqlite, &plan)
        .unwrap()
        .iter()
        .map(|q| q.build(DatabaseBackend::Sqlite))
        .collect();
    assert_eq!(
        sql,
        vec![
            "DROP TABLE IF EXISTS \"art\"".to_string(),
            "DROP TABLE IF EXISTS \"user\"".to_string(),
        ]
    );
}

#[test]
fn version_table_statements_are_exported_at_crate_root() {
    let backend = DatabaseBackend::Sqlite;
    assert!(
        build_create_version_table("versions")
            .build(backend)
            .starts_with("CREATE TABLE IF NOT EXISTS \"versions\"")
    );
    assert!(
        build_select_current_version("versions")
            .build(backend)
            .contains("FROM \"versions\"")
    );
    assert!(
        build_record_version("versions", 1)
            .build(backend)
            .starts_with("INSERT INTO \"versions\"")
    );
}
