use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pagecheck_core::shared_examples::PaginatedResponseExamples;

pub use crate::cli::{CliArgs, OutputFormat};
use crate::render::Checked;
pub use crate::source::{InputError, InputSource};

mod cli;
mod render;
mod source;

/// Tally of checked inputs, used to derive the process exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl Summary {
    pub fn exit_code(&self) -> u8 {
        if self.errored > 0 {
            2
        } else if self.failed > 0 {
            1
        } else {
            0
        }
    }
}

pub fn run_cli() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    let stdout = io::stdout();
    let summary = run(&args, &mut stdout.lock())?;
    log::info!(
        "Checked {} input(s): {} passed, {} failed, {} errored",
        summary.passed + summary.failed + summary.errored,
        summary.passed,
        summary.failed,
        summary.errored
    );
    Ok(ExitCode::from(summary.exit_code()))
}

/// Check every input and write the report to `out`.
///
/// Input failures are reported and counted; only failing to write the report is an error.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> anyhow::Result<Summary> {
    let pointer = args.pointer.as_deref();
    let mut summary = Summary::default();
    let results = InputSource::from_args(&args.inputs)
        .into_iter()
        .map(|source| {
            log::info!("Checking {}", source);
            let outcome = source
                .load(pointer)
                .map(|response| PaginatedResponseExamples::run(&response));
            match &outcome {
                Ok(report) if report.is_success() => summary.passed += 1,
                Ok(_) => summary.failed += 1,
                Err(e) => {
                    log::warn!("Skipping {}: {}", source, e);
                    summary.errored += 1;
                }
            }
            Checked {
                source: source.to_string(),
                outcome,
            }
        })
        .collect::<Vec<_>>();

    match args.format {
        OutputFormat::Text => render::render_text(out, &results).context("Failed to write text report")?,
        OutputFormat::Json => render::render_json(out, &results).context("Failed to write JSON report")?,
    }
    Ok(summary)
}
