//! Schema Resolver CLI
//!
//! Resolves Avro schema files, following cross-file references by the
//! sibling-file naming convention.

use std::path::PathBuf;

use avsc_resolver::{load_schema_into, SchemaRegistry};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avsc-resolve")]
#[command(about = "Resolve Avro schema files and their cross-file references")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a schema file and print the fully-qualified result
    Resolve {
        /// Path to the root schema file
        schema: PathBuf,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List the fully-qualified names defined by a schema file and its
    /// dependencies
    Names {
        /// Path to the root schema file
        schema: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve { schema, compact } => {
            let mut registry = SchemaRegistry::new();
            let resolved = load_schema_into(&schema, &mut registry)?;
            let output = if compact {
                serde_json::to_string(&resolved)?
            } else {
                serde_json::to_string_pretty(&resolved)?
            };
            println!("{}", output);
        }

        Commands::Names { schema } => {
            let mut registry = SchemaRegistry::new();
            load_schema_into(&schema, &mut registry)?;

            let mut names: Vec<_> = registry.names().collect();
            names.sort_unstable();
            for name in names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
