//! Command execution for the edgecombine binary.

use tracing::{debug, info};

use crate::cli::args::Cli;
use crate::cli::config_layer::build_layered_config;
use crate::cli::output::print_report;
use edgecombine_rs::CombineEngine;

/// Combine the folder named on the command line and print the summary.
pub fn combine_command(cli: &Cli) -> anyhow::Result<()> {
    let config = build_layered_config(cli)?;
    let engine = CombineEngine::new(config)?;
    debug!(
        "Output {} at precision {}",
        engine.config().output_path().display(),
        engine.config().precision
    );
    let report = engine.run()?;

    info!(
        "Combined {} file(s) into {}",
        report.files_combined(),
        report.output_path.display()
    );

    if !cli.quiet {
        print_report(&report, cli.format)?;
    }
    Ok(())
}
