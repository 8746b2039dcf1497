//! Diagnostics sink for walk and processing events
//!
//! Components never log directly; they report to whatever `Diagnostics`
//! implementation the caller hands them. `LogDiagnostics` forwards to the
//! `log` facade, `RunReport` also keeps a tally.

use std::io;
use std::path::Path;

use crate::error::ProcessError;

/// Receiver for events raised while walking and processing.
pub trait Diagnostics {
    /// A file was fully transformed and its output closed cleanly.
    fn file_processed(&mut self, input: &Path, output: &Path);

    /// A file failed at some stage. Called once per error, so one file may
    /// report both a processing error and a close error.
    fn file_failed(&mut self, error: &ProcessError);

    /// A directory was listed and is about to be descended into.
    fn directory_entered(&mut self, _path: &Path) {}

    /// A directory could not be listed and was skipped.
    fn directory_unreadable(&mut self, _path: &Path, _error: &io::Error) {}
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn file_processed(&mut self, input: &Path, output: &Path) {
        log::debug!("{} -> {}", input.display(), output.display());
    }

    fn file_failed(&mut self, error: &ProcessError) {
        log::error!("{error}");
    }

    fn directory_entered(&mut self, path: &Path) {
        log::trace!("entering {}", path.display());
    }

    fn directory_unreadable(&mut self, path: &Path, error: &io::Error) {
        log::debug!("skipping {}: {error}", path.display());
    }
}
