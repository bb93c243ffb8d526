use anyhow::{Result, anyhow};
use canvas_config::Backend;
use canvas_core::MigrationPlan;
use canvas_planner::{plan_initial_migration, plan_teardown};
use canvas_query::build_plan_queries;
use colored::Colorize;

use crate::utils::{load_config, query_backend};

pub fn cmd_sql(backend: Option<Backend>, teardown: bool) -> Result<()> {
    let config = load_config()?;
    let backend = backend.unwrap_or(config.backend());
    let schema = canvas_ai::schema();

    let plan = if teardown {
        plan_teardown(&schema)
    } else {
        plan_initial_migration(&schema)
    }
    .map_err(|e| anyhow!("planning error: {}", e))?;

    emit_sql(&plan, backend)
}

fn render_sql(plan: &MigrationPlan, backend: Backend) -> Result<Vec<String>> {
    let target = query_backend(backend);
    let queries = build_plan_queries(target, plan)
        .map_err(|e| anyhow!("query build error: {}", e))?;
    Ok(queries.iter().map(|q| q.build(target)).collect())
}

fn emit_sql(plan: &MigrationPlan, backend: Backend) -> Result<()> {
    let statements = render_sql(plan, backend)?;

    println!(
        "{} {}",
        "Plan version:".bright_cyan().bold(),
        plan.version.to_string().bright_magenta()
    );
    if let Some(comment) = &plan.comment {
        println!("{} {}", "Comment:".bright_cyan(), comment.bright_white());
    }
    println!("{} {}", "Backend:".bright_cyan(), backend.to_string().bright_white());
    println!(
        "{} {}",
        "SQL statements:".bright_cyan().bold(),
        statements.len().to_string().bright_yellow().bold()
    );
    println!();

    for (i, sql) in statements.iter().enumerate() {
        println!(
            "{}. {};",
            (i + 1).to_string().bright_magenta().bold(),
            sql.trim().bright_white()
        );
    }

    Ok(())
}
