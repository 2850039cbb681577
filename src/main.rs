//! manifest-split CLI
//!
//! Usage: manifest-split [OPTIONS] --manifest <FILE> --split-manifest <FILE> <TARGETS>...
//!
//! Exit codes: 0 on success, 1 on a failed split, 2 on a usage error.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use manifest_split::config::{with_env_overrides, Settings};
use manifest_split::presentation::{create_split_use_case, logging, Cli};
use manifest_split::SplitError;

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let usage = err
                .downcast_ref::<SplitError>()
                .is_some_and(SplitError::is_usage);
            ExitCode::from(if usage { EXIT_USAGE } else { EXIT_FAILURE })
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let invocation = cli.resolve()?;
    let settings = with_env_overrides(load_settings(cli)?);

    let use_case = create_split_use_case(&invocation, settings)
        .context("failed to set up the source tree")?;
    let outcome = use_case.execute(&invocation.options).with_context(|| {
        format!(
            "failed to split {}",
            invocation.options.manifest.display()
        )
    })?;

    info!(
        projects = outcome.retained_count(),
        kept = outcome.kept,
        dropped = outcome.dropped,
        passes = outcome.passes,
        digest = %outcome.own,
        "split complete"
    );
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let Some(path) = &cli.settings else {
        return Ok(Settings::default());
    };
    let (settings, warnings) = Settings::load_with_warnings(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    for warning in warnings {
        warn!("{warning}");
    }
    Ok(settings)
}
