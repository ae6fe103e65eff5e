//! # CLI Commands
//!
//! Command implementations for the `predikit` binary.
//!
//! Each `cmd_*` function prints its result to stdout and returns the
//! computed data, so integration tests can call them directly.

use predikit_core::{PredicateError, PredicateKind, Value};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Flags shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print machine-readable JSON instead of plain text.
    pub json: bool,
    /// Reject argument counts that differ from the predicate's arity.
    pub strict: bool,
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

/// Token that stands for the undefined sentinel on the command line.
pub const UNDEFINED_TOKEN: &str = "undefined";

/// Parse one command-line argument as a value.
///
/// The bare token `undefined` yields [`Value::Undefined`]; anything else
/// must be a JSON document.
pub fn parse_arg(raw: &str) -> Result<Value, CliError> {
    if raw.trim() == UNDEFINED_TOKEN {
        return Ok(Value::Undefined);
    }
    Ok(serde_json::from_str(raw)?)
}

/// Run a predicate under the configured arity policy.
pub fn evaluate(kind: PredicateKind, args: &[Value], strict: bool) -> Result<bool, CliError> {
    let verdict = if strict {
        kind.evaluate_strict(args)?
    } else {
        kind.evaluate(args)
    };
    tracing::debug!(predicate = %kind, args = args.len(), verdict, "evaluated predicate");
    Ok(verdict)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// One evaluated predicate call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub predicate: PredicateKind,
    pub args: Vec<Value>,
    pub result: bool,
}

/// Render a verdict: the bare result, or the full call as JSON.
pub fn render_verdict(verdict: &Verdict, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string(verdict)?)
    } else {
        Ok(verdict.result.to_string())
    }
}

/// Evaluate a single predicate named on the command line.
pub fn cmd_check(name: &str, raw_args: &[String], opts: Options) -> Result<Verdict, CliError> {
    let predicate: PredicateKind = name.parse()?;
    let args = raw_args
        .iter()
        .map(|raw| parse_arg(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let result = evaluate(predicate, &args, opts.strict)?;
    let verdict = Verdict {
        predicate,
        args,
        result,
    };

    println!("{}", render_verdict(&verdict, opts.json)?);
    Ok(verdict)
}

// =============================================================================
// LIST COMMAND
// =============================================================================

#[derive(Debug, Serialize)]
struct ListEntry {
    name: &'static str,
    rust_name: &'static str,
    arity: usize,
}

/// Render the predicate table as aligned text or a JSON array.
pub fn render_list(json: bool) -> Result<String, CliError> {
    let entries: Vec<ListEntry> = PredicateKind::ALL
        .into_iter()
        .map(|kind| ListEntry {
            name: kind.name(),
            rust_name: kind.snake_name(),
            arity: kind.arity(),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    Ok(entries
        .iter()
        .map(|entry| format!("{:<20} {:<22} arity {}", entry.name, entry.rust_name, entry.arity))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Print the predicate table.
pub fn cmd_list(opts: Options) -> Result<(), CliError> {
    println!("{}", render_list(opts.json)?);
    Ok(())
}

// =============================================================================
// BATCH COMMAND
// =============================================================================

/// One case in a batch file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchCase {
    pub predicate: String,
    #[serde(default)]
    pub args: Vec<Value>,
    /// Expected verdict. Cases without one are only reported.
    #[serde(default)]
    pub expect: Option<bool>,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Cases that evaluated to true.
    pub truthy: usize,
    /// Cases whose verdict differs from `expect`.
    pub mismatched: usize,
}

impl BatchSummary {
    /// True when every case with an expectation met it.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatched == 0
    }
}

/// Parse batch cases from a JSON array.
pub fn parse_batch(json: &str) -> Result<Vec<BatchCase>, CliError> {
    Ok(serde_json::from_str(json)?)
}

/// Load batch cases from a file.
pub fn load_batch(path: &Path) -> Result<Vec<BatchCase>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_batch(&content)
}

/// Resolve every case's predicate up front.
///
/// Unknown names fail here, and so do arity mismatches when `strict`,
/// so a bad batch is rejected before any verdict is printed.
pub fn resolve_batch(cases: &[BatchCase], strict: bool) -> Result<Vec<PredicateKind>, CliError> {
    cases
        .iter()
        .map(|case| -> Result<PredicateKind, CliError> {
            let kind: PredicateKind = case.predicate.parse()?;
            if strict {
                kind.check_arity(case.args.len())?;
            }
            Ok(kind)
        })
        .collect()
}

/// Render one batch case as `name(arg, ...) = result`.
pub fn render_batch_line(verdict: &Verdict, mismatch: bool) -> Result<String, CliError> {
    let args = verdict
        .args
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    let marker = if mismatch { "  MISMATCH" } else { "" };
    Ok(format!(
        "{}({}) = {}{}",
        verdict.predicate,
        args.join(", "),
        verdict.result,
        marker
    ))
}

/// Evaluate every case in a batch file.
pub fn cmd_batch(path: &Path, opts: Options) -> Result<BatchSummary, CliError> {
    let cases = load_batch(path)?;
    tracing::info!(path = %path.display(), cases = cases.len(), "running batch");

    let kinds = resolve_batch(&cases, opts.strict)?;

    let mut summary = BatchSummary::default();
    for (case, kind) in cases.into_iter().zip(kinds) {
        let result = evaluate(kind, &case.args, opts.strict)?;
        let mismatch = case.expect.is_some_and(|expected| expected != result);

        summary.total += 1;
        if result {
            summary.truthy += 1;
        }
        if mismatch {
            summary.mismatched += 1;
            tracing::warn!(predicate = %kind, result, expected = ?case.expect, "verdict mismatch");
        }

        let verdict = Verdict {
            predicate: kind,
            args: case.args,
            result,
        };
        if opts.json {
            println!("{}", render_verdict(&verdict, true)?);
        } else {
            println!("{}", render_batch_line(&verdict, mismatch)?);
        }
    }

    if opts.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "{} case(s), {} true, {} mismatched",
            summary.total, summary.truthy, summary.mismatched
        );
    }

    Ok(summary)
}

// =============================================================================
// TESTS
// =============================================================================
