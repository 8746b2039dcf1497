//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::diagnostics::Diagnostics;
use crate::error::ProcessError;

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with raw contents, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Read a file relative to the directory as UTF-8.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }

    /// Whether a path relative to the directory exists.
    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostics sink that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    /// `(input, output)` for every successfully processed file.
    pub processed: Vec<(PathBuf, PathBuf)>,
    /// `(path, stage)` for every reported failure.
    pub failures: Vec<(PathBuf, &'static str)>,
    pub directories: Vec<PathBuf>,
    pub unreadable: Vec<PathBuf>,
}

impl RecordingDiagnostics {
    /// Inputs of processed files, in processing order.
    pub fn processed_inputs(&self) -> Vec<PathBuf> {
        self.processed.iter().map(|(input, _)| input.clone()).collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn file_processed(&mut self, input: &Path, output: &Path) {
        self.processed.push((input.to_path_buf(), output.to_path_buf()));
    }

    fn file_failed(&mut self, error: &ProcessError) {
        self.failures.push((error.path().to_path_buf(), error.stage()));
    }

    fn directory_entered(&mut self, path: &Path) {
        self.directories.push(path.to_path_buf());
    }

    fn directory_unreadable(&mut self, path: &Path, _error: &io::Error) {
        self.unreadable.push(path.to_path_buf());
    }
}
