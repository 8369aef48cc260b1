//! oxide-ddl CLI
//!
//! Command-line tool for turning change statements into dialect SQL.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_ddl::prelude::*;

/// Dialect-aware SQL generation for schema changes.
#[derive(Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Target database options shared by the generating commands.
#[derive(Args)]
struct Target {
    /// Database dialect (e.g. postgresql, oracle, mysql).
    #[arg(short, long, env = "OXIDE_DDL_DIALECT")]
    dialect: DialectId,

    /// Default schema for unqualified names.
    #[arg(long, env = "OXIDE_DDL_DEFAULT_SCHEMA")]
    default_schema: Option<String>,

    /// Quote every object name.
    #[arg(long)]
    quote_all: bool,
}

impl Target {
    fn database(&self) -> Database {
        let settings = DatabaseSettings {
            default_schema: self.default_schema.clone(),
            quoting_strategy: if self.quote_all {
                QuotingStrategy::QuoteAllObjects
            } else {
                QuotingStrategy::Legacy
            },
            ..DatabaseSettings::default()
        };
        Database::with_settings(self.dialect, settings)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SQL script for a JSON list of statements.
    Sql {
        #[command(flatten)]
        target: Target,

        /// Print the rollback SQL instead of the forward SQL.
        #[arg(short, long)]
        rollback: bool,

        /// Write the script to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Statement file (stdin if omitted or `-`).
        input: Option<PathBuf>,
    },

    /// Validate statements against a dialect without generating SQL.
    Validate {
        #[command(flatten)]
        target: Target,

        /// Statement file (stdin if omitted or `-`).
        input: Option<PathBuf>,
    },

    /// Show which dialects accept each statement.
    Probe {
        /// Statement file (stdin if omitted or `-`).
        input: Option<PathBuf>,
    },

    /// List the known dialects and their capabilities.
    Dialects,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Sql {
            target,
            rollback,
            output,
            input,
        } => {
            let mut statements = read_statements(input.as_deref())?;
            if rollback {
                statements = inverse_all(&statements)
                    .context("statements include a change that cannot be rolled back")?;
            }
            let database = target.database();
            let generated = default_registry().generate_all(&statements, &database)?;

            match output {
                Some(path) => {
                    let mut file = fs::File::create(&path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    write_script(&mut file, &generated.sql)?;
                    info!(
                        "Wrote {} statements to {}",
                        generated.sql.len(),
                        path.display()
                    );
                }
                None => write_script(&mut io::stdout().lock(), &generated.sql)?,
            }
        }

        Commands::Validate { target, input } => {
            let statements = read_statements(input.as_deref())?;
            let database = target.database();
            let mut error_count = 0;

            for (index, statement) in statements.iter().enumerate() {
                let label = format!("#{} {}", index + 1, statement.kind());
                match default_registry().validate(statement, &database) {
                    Ok(result) => {
                        for warning in result.warnings() {
                            println!(" [!] {label}: {warning}");
                        }
                        for error in result.errors() {
                            println!(" [X] {label}: {error}");
                        }
                        if result.has_errors() {
                            error_count += 1;
                        } else {
                            println!(" [ ] {label}: ok");
                        }
                    }
                    Err(err) => {
                        println!(" [X] {label}: {err}");
                        error_count += 1;
                    }
                }
            }

            if error_count > 0 {
                bail!(
                    "{error_count} of {} statements are invalid on {}",
                    statements.len(),
                    database.id()
                );
            }
        }

        Commands::Probe { input } => {
            let statements = read_statements(input.as_deref())?;
            for (index, statement) in statements.iter().enumerate() {
                println!("\n#{} {}:", index + 1, statement.kind());
                println!("{:-<60}", "");
                for result in probe(default_registry(), statement) {
                    let status = match &result.support {
                        Support::Supported => "supported".to_string(),
                        Support::Invalid { errors } => {
                            let messages =
                                errors.iter().map(ToString::to_string).collect::<Vec<_>>();
                            format!("invalid: {}", messages.join("; "))
                        }
                        Support::Unsupported { reason } => format!("unsupported: {reason}"),
                    };
                    println!(" {:<12} {status}", result.dialect.short_name());
                }
            }
            println!();
        }

        Commands::Dialects => {
            for id in DialectId::ALL {
                let dialect = id.dialect();
                let capabilities = dialect
                    .capabilities()
                    .iter()
                    .map(Capability::name)
                    .collect::<Vec<_>>();
                println!(
                    "{:<12} {:<24} {}",
                    id.short_name(),
                    dialect.product_name(),
                    capabilities.join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Reads a JSON array of statements from `path`, or stdin for `None`/`-`.
fn read_statements(path: Option<&Path>) -> anyhow::Result<Vec<Statement>> {
    let text = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let statements: Vec<Statement> =
        serde_json::from_str(&text).context("input is not a JSON list of statements")?;
    info!("Read {} statements", statements.len());
    Ok(statements)
}
