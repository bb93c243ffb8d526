use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

fn canvas(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("canvas"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("DATABASE_URL")
        .env_remove("CANVAS_BACKEND")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_args_prints_usage() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_names_the_binary() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas"));
}

#[test]
fn validate_succeeds() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema is valid"));
}

#[test]
fn sql_defaults_to_postgres() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .arg("sql")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE \"canvas-ai_user\""))
        .stdout(predicate::str::contains("\"id\" serial"));
}

#[test]
fn sql_backend_from_environment() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .env("CANVAS_BACKEND", "mysql")
        .arg("sql")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE `canvas-ai_user`"));
}

#[test]
fn sql_teardown() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .args(["sql", "--backend", "sqlite", "--teardown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DROP TABLE IF EXISTS \"canvas-ai_art\""));
}

#[test]
fn schema_as_yaml() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .args(["schema", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: canvas-ai_art"));
}

#[test]
fn init_twice_fails() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join("canvas.json").exists());
    canvas(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn migrate_without_url_fails() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no database URL"));
}

#[test]
fn migrate_sqlite_file_then_up_to_date() {
    let tmp = tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", tmp.path().join("canvas.db").display());

    canvas(tmp.path())
        .args(["migrate", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied"));

    canvas(tmp.path())
        .args(["migrate", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn migrate_dry_run_prints_sql() {
    let tmp = tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", tmp.path().join("dry.db").display());

    canvas(tmp.path())
        .args(["migrate", "--dry-run", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run:"))
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS \"canvas-ai_schema_version\""));
}

#[test]
fn migrate_dry_run_does_not_create_database_file() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("untouched.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());

    canvas(tmp.path())
        .args(["migrate", "--dry-run", "--database-url", &url])
        .assert()
        .success();
    assert!(!db_path.exists());
}

#[test]
fn migrate_dry_run_needs_no_reachable_server() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .args([
            "migrate",
            "--dry-run",
            "--database-url",
            "postgres://nobody@127.0.0.1:1/canvas",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "COMMENT ON COLUMN \"canvas-ai_art\".\"on_sale\" IS 'artwork is listed for sale'",
        ));
}

#[test]
fn migrate_dry_run_without_url_uses_configured_backend() {
    let tmp = tempdir().unwrap();
    canvas(tmp.path())
        .env("CANVAS_BACKEND", "mysql")
        .args(["migrate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE `canvas-ai_user`"));
}
