//! File processing: one input file in, one transformed sibling file out

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::decode::{DecodeError, Utf8Chars};
use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, ProcessError};
use crate::transform::TransformChain;

/// Suffix appended to an input path to form its output path.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".out";

/// Configuration for file processing.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Appended to the full input file name, e.g. `quote.utf` -> `quote.utf.out`.
    pub suffix: String,
}

impl ProcessorConfig {
    /// Check that outputs land next to their input and never on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::EmptySuffix);
        }
        if self.suffix.contains(std::path::is_separator) {
            return Err(ConfigError::SuffixSeparator(self.suffix.clone()));
        }
        Ok(())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

/// Transforms single files into uppercased, line-numbered copies.
#[derive(Debug, Clone, Default)]
pub struct FileProcessor {
    config: ProcessorConfig,
}

impl FileProcessor {
    /// Fails if the configuration could overwrite inputs.
    pub fn new(config: ProcessorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Output path for `input`: the same path with the suffix appended.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let mut name = input.as_os_str().to_os_string();
        name.push(&self.config.suffix);
        PathBuf::from(name)
    }

    /// Transform `input` into its sibling output file.
    ///
    /// An existing output file is overwritten. Errors are reported to
    /// `diagnostics` and never propagated; whatever was written before a
    /// failure stays on disk. Returns the output path on success.
    pub fn process(&self, input: &Path, diagnostics: &mut dyn Diagnostics) -> Option<PathBuf> {
        let output = self.output_path(input);

        let reader = match File::open(input) {
            Ok(file) => BufReader::new(file),
            Err(source) => {
                diagnostics.file_failed(&ProcessError::OpenInput {
                    path: input.to_path_buf(),
                    source,
                });
                return None;
            }
        };

        let writer = match File::create(&output) {
            Ok(file) => BufWriter::new(file),
            Err(source) => {
                diagnostics.file_failed(&ProcessError::CreateOutput {
                    path: output,
                    source,
                });
                return None;
            }
        };

        if transform_streams(reader, writer, input, &output, diagnostics) {
            diagnostics.file_processed(input, &output);
            Some(output)
        } else {
            None
        }
    }
}

/// Stream `reader` into `writer` and close the writer, reporting every
/// failure. Returns true when nothing failed.
fn transform_streams<R: BufRead, W: Write>(
    reader: R,
    mut writer: BufWriter<W>,
    input: &Path,
    output: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> bool {
    // A fresh chain per file keeps line numbers from leaking across files
    let streamed = stream(
        reader,
        &mut writer,
        input,
        output,
        TransformChain::uppercase_numbered(),
    );

    // The output is closed whether or not streaming succeeded, and its
    // failure is reported on its own.
    let closed = close(writer, output);

    let mut ok = true;
    if let Err(e) = streamed {
        diagnostics.file_failed(&e);
        ok = false;
    }
    if let Err(e) = closed {
        diagnostics.file_failed(&e);
        ok = false;
    }
    ok
}

/// Pump every code point of `reader` through `chain` into `writer`.
///
/// The reader is consumed and released when this returns.
fn stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    input: &Path,
    output: &Path,
    mut chain: TransformChain,
) -> Result<(), ProcessError> {
    for decoded in Utf8Chars::new(reader) {
        let ch = decoded.map_err(|e| match e {
            DecodeError::Io(source) => ProcessError::Read {
                path: input.to_path_buf(),
                source,
            },
            DecodeError::Invalid { offset } => ProcessError::InvalidUtf8 {
                path: input.to_path_buf(),
                offset,
            },
        })?;

        writer
            .write_all(chain.apply(ch).as_bytes())
            .map_err(|source| ProcessError::Write {
                path: output.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

/// Flush buffered output and release the underlying writer.
fn close<W: Write>(writer: BufWriter<W>, output: &Path) -> Result<(), ProcessError> {
    writer
        .into_inner()
        .map(drop)
        .map_err(|e| ProcessError::Close {
            path: output.to_path_buf(),
            source: e.into_error(),
        })
}
