//! Per-file processing errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure while processing a single file.
///
/// None of these abort a walk; they are reported and the walk moves on.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to open '{path}' for reading: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create '{path}': {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid UTF-8 in '{path}' at byte {offset}")]
    InvalidUtf8 { path: PathBuf, offset: u64 },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to close '{path}': {source}")]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A processor configuration that could write over its own input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("output suffix must not be empty")]
    EmptySuffix,

    #[error("output suffix '{0}' must not contain a path separator")]
    SuffixSeparator(String),
}

impl ProcessError {
    /// The file the error concerns (input or output, depending on the stage).
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenInput { path, .. }
            | Self::CreateOutput { path, .. }
            | Self::Read { path, .. }
            | Self::InvalidUtf8 { path, .. }
            | Self::Write { path, .. }
            | Self::Close { path, .. } => path,
        }
    }

    /// Short name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::OpenInput { .. } => "open",
            Self::CreateOutput { .. } => "create",
            Self::Read { .. } => "read",
            Self::InvalidUtf8 { .. } => "decode",
            Self::Write { .. } => "write",
            Self::Close { .. } => "close",
        }
    }
}
