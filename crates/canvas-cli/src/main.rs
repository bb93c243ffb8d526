use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use canvas_config::{Backend, FileFormat};

mod commands;
mod utils;
use commands::{cmd_init, cmd_migrate, cmd_schema, cmd_sql, cmd_validate};

/// canvas-ai schema tooling.
#[derive(Parser, Debug)]
#[command(name = "canvas", author, version, about)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize canvas.json with defaults.
    Init,
    /// Print the schema declaration.
    Schema {
        #[arg(long, value_enum)]
        format: Option<FileFormat>,
        /// Print the JSON Schema of the declaration model instead.
        #[arg(long)]
        json_schema: bool,
    },
    /// Check the declaration for integrity problems.
    Validate,
    /// Print the DDL for the schema.
    Sql {
        #[arg(long, value_enum)]
        backend: Option<Backend>,
        /// Print DROP statements instead.
        #[arg(long)]
        teardown: bool,
    },
    /// Create the tables on a database unless already applied.
    Migrate {
        #[arg(long)]
        database_url: Option<String>,
        /// Print the SQL without executing it.
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::Schema {
            format,
            json_schema,
        } => cmd_schema(format, json_schema),
        Commands::Validate => cmd_validate(),
        Commands::Sql { backend, teardown } => cmd_sql(backend, teardown),
        Commands::Migrate {
            database_url,
            dry_run,
        } => cmd_migrate(database_url, dry_run).await,
    }
}
