//! # Predikit Binary
//!
//! Command-line entry point. Exit codes:
//! - `0`: verdict true / batch clean / command succeeded
//! - `1`: verdict false / batch had mismatches
//! - `2`: error

use clap::{Parser, Subcommand};
use predikit::cli::{self, Options};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PREDIKIT_LOG";

#[derive(Debug, Parser)]
#[command(name = "predikit", version, about = "Evaluate validation predicates")]
struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Reject calls whose argument count differs from the predicate's arity
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one predicate. Each ARG is JSON or the token `undefined`.
    Check {
        /// Predicate name, camelCase or snake_case
        predicate: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List every predicate with its arity
    List,
    /// Evaluate a JSON file of `{"predicate", "args", "expect"}` cases
    Batch { file: PathBuf },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = Cli::parse();
    let opts = Options {
        json: args.json,
        strict: args.strict,
    };

    let outcome = match args.command {
        Command::Check { predicate, args } => {
            cli::cmd_check(&predicate, &args, opts).map(|verdict| verdict.result)
        }
        Command::List => cli::cmd_list(opts).map(|()| true),
        Command::Batch { file } => cli::cmd_batch(&file, opts).map(|summary| summary.is_clean()),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
