//! `campus demo`: the sample scenario over a fresh store.

use tracing::info;

use campus_adapters::Campus;

use crate::{
    cli::{DemoArgs, GlobalArgs},
    commands::run::{Driver, OnFailure},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    render::resolve_format,
    script,
};

/// Run the sample.  The rejected duplicate student is expected and is
/// reported as a warning, so the command still succeeds.
pub fn execute(
    args: DemoArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = resolve_format(args.format, &config)?;
    let campus = Campus::in_memory(config.settings());

    let report = Driver::new(&campus, format, &output).drive(&script::sample(), OnFailure::Warn)?;

    info!(
        applied = report.applied,
        rejected = report.failures.len(),
        "Sample finished"
    );
    Ok(())
}
