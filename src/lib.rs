//! lineup - uppercase and line-number every file in a directory tree

mod decode;
pub mod diagnostics;
pub mod error;
pub mod processor;
pub mod report;
pub mod transform;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use error::{ConfigError, ProcessError};
pub use processor::{DEFAULT_OUTPUT_SUFFIX, FileProcessor, ProcessorConfig};
pub use report::{FailureRecord, RunReport, print_report, print_report_json};
pub use transform::{
    CharTransformer, LineNumberingTransformer, TransformChain, UpperCaseTransformer,
};
pub use walker::Walker;
