use std::error::Error;
use std::io::Write;

use pagecheck_core::report::ExampleReport;
use serde::Serialize;

use crate::source::InputError;

/// Result of checking one input document.
#[derive(Debug)]
pub struct Checked {
    pub source: String,
    pub outcome: Result<ExampleReport, InputError>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum CheckedView<'a> {
    Report { source: &'a str, report: &'a ExampleReport },
    Error { source: &'a str, error: String },
}

impl<'a> From<&'a Checked> for CheckedView<'a> {
    fn from(checked: &'a Checked) -> Self {
        match &checked.outcome {
            Ok(report) => Self::Report {
                source: &checked.source,
                report,
            },
            Err(e) => Self::Error {
                source: &checked.source,
                error: error_chain(e),
            },
        }
    }
}

pub fn render_text<W: Write>(out: &mut W, results: &[Checked]) -> std::io::Result<()> {
    for checked in results {
        match &checked.outcome {
            Ok(report) => writeln!(out, "{}\n{}\n", checked.source, indent(&report.to_string()))?,
            Err(e) => writeln!(out, "{}\n  error: {}\n", checked.source, error_chain(e))?,
        }
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, results: &[Checked]) -> serde_json::Result<()> {
    let views = results.iter().map(CheckedView::from).collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *out, &views)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("  {l}")).collect::<Vec<_>>().join("\n")
}

fn error_chain(e: &InputError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}
