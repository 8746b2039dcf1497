//! Run summary collection and display

use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::ProcessError;

/// Tally of a walk. Every event is also forwarded to `LogDiagnostics`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Directories listed (including the root)
    pub directories: usize,
    /// Files transformed without error
    pub processed: usize,
    /// Every reported failure, in walk order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureRecord>,
}

/// One reported failure.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub path: PathBuf,
    pub stage: &'static str,
    pub message: String,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no failure was reported.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Diagnostics for RunReport {
    fn file_processed(&mut self, input: &Path, output: &Path) {
        self.processed += 1;
        LogDiagnostics.file_processed(input, output);
    }

    fn file_failed(&mut self, error: &ProcessError) {
        self.failures.push(FailureRecord {
            path: error.path().to_path_buf(),
            stage: error.stage(),
            message: error.to_string(),
        });
        LogDiagnostics.file_failed(error);
    }

    fn directory_entered(&mut self, path: &Path) {
        self.directories += 1;
        LogDiagnostics.directory_entered(path);
    }

    fn directory_unreadable(&mut self, path: &Path, error: &io::Error) {
        LogDiagnostics.directory_unreadable(path, error);
    }
}

/// Print the report to stdout with optional color.
pub fn print_report(report: &RunReport, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(&mut stdout, report)
}

fn write_report<W: WriteColor>(out: &mut W, report: &RunReport) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    out.set_color(&bold)?;
    write!(out, "{}", plural(report.processed, "file"))?;
    out.reset()?;
    writeln!(
        out,
        " processed in {}",
        plural(report.directories, "directory")
    )?;

    if report.failures.is_empty() {
        return Ok(());
    }

    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red)).set_bold(true);
    out.set_color(&red)?;
    writeln!(out, "{}:", plural(report.failures.len(), "failure"))?;
    out.reset()?;

    let mut stage_color = ColorSpec::new();
    stage_color.set_fg(Some(Color::Yellow));
    for failure in &report.failures {
        write!(out, "  ")?;
        out.set_color(&stage_color)?;
        write!(out, "{:<7}", failure.stage)?;
        out.reset()?;
        writeln!(out, "{}", failure.message)?;
    }

    Ok(())
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "directory") => format!("{count} directories"),
        _ => format!("{count} {noun}s"),
    }
}

/// Print the report as JSON.
pub fn print_report_json(report: &RunReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
