//! `campus run`: execute a JSON operation script.

use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use campus_adapters::Campus;

use crate::{
    cli::{GlobalArgs, ListFormat, RunArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    render::{render, resolve_format},
    script::{Operation, Outcome},
};

pub fn execute(
    args: RunArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = resolve_format(args.format, &config)?;
    let operations = load_script(&args.script)?;
    info!(count = operations.len(), "Script loaded");

    let campus = Campus::in_memory(config.settings());
    let on_failure = if args.keep_going {
        OnFailure::Report
    } else {
        OnFailure::Abort
    };

    let report = Driver::new(&campus, format, &output).drive(&operations, on_failure)?;
    info!(applied = report.applied, failed = report.failures.len(), "Script finished");

    // The exit code reflects the first failure even when we kept going.
    report.failures.into_iter().next().map_or(Ok(()), Err)
}

/// Read and parse a script; `-` reads stdin.
pub fn load_script(path: &Path) -> CliResult<Vec<Operation>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .with_cli_context(|| "Failed to read script from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read script '{}'", path.display()))?
    };

    parse_script(&text, path)
}

fn parse_script(text: &str, path: &Path) -> CliResult<Vec<Operation>> {
    serde_json::from_str(text).map_err(|source| CliError::ScriptParse {
        path: PathBuf::from(path),
        source,
    })
}

/// What to do when an operation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop and return the failure.
    Abort,
    /// Print it as an error and continue.
    Report,
    /// Print it as a warning and continue.
    Warn,
}

/// Result of driving a list of operations.
#[derive(Debug, Default)]
pub struct Report {
    pub applied: usize,
    pub failures: Vec<CliError>,
}

/// Feeds operations to a campus and prints what comes back.
pub struct Driver<'a> {
    campus: &'a Campus,
    format: ListFormat,
    output: &'a OutputManager,
}

impl<'a> Driver<'a> {
    pub fn new(campus: &'a Campus, format: ListFormat, output: &'a OutputManager) -> Self {
        Self {
            campus,
            format,
            output,
        }
    }

    #[instrument(skip_all, fields(count = operations.len(), on_failure = ?on_failure))]
    pub fn drive(&self, operations: &[Operation], on_failure: OnFailure) -> CliResult<Report> {
        let mut report = Report::default();

        for (index, op) in operations.iter().enumerate().map(|(i, op)| (i + 1, op)) {
            debug!(index, op = op.name(), kind = %op.kind(), "Applying operation");

            match op.apply(self.campus) {
                Ok(outcome) => {
                    report.applied += 1;
                    self.show(outcome)?;
                }
                Err(source) => {
                    let err = CliError::OperationFailed {
                        index,
                        op: op.name().into(),
                        source,
                    };
                    match on_failure {
                        OnFailure::Abort => return Err(err),
                        OnFailure::Report => self.output.error(&err.to_string())?,
                        OnFailure::Warn => self.output.warning(&err.to_string())?,
                    }
                    report.failures.push(err);
                }
            }
        }

        Ok(report)
    }

    fn show(&self, outcome: Outcome) -> CliResult<()> {
        // Status lines would break a JSON or CSV stream.
        let chatty = self.format == ListFormat::Table;

        match outcome {
            Outcome::Listed(listing) => {
                debug!(kind = %listing.kind(), rows = listing.rows(), "Rendering listing");
                self.output.data(&render(&listing, self.format)?)?
            }
            Outcome::Added(record) if chatty => self.output.success(&format!("Added {record}"))?,
            Outcome::Removed(record) if chatty => {
                self.output.success(&format!("Removed {record}"))?
            }
            Outcome::Updated(record) if chatty => {
                self.output.success(&format!("Updated {record}"))?
            }
            _ => {}
        }
        Ok(())
    }
}
