//! Sorted depth-first directory walk

use std::fs;
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::processor::FileProcessor;

/// Walks a directory tree and hands every regular file to a `FileProcessor`.
///
/// Entries are visited in file name order at every level. Directories are
/// descended into, regular files are processed, and everything else
/// (symlinks, sockets, devices) is skipped. Symlinks are never followed, so
/// the walk cannot loop.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    processor: FileProcessor,
}

impl Walker {
    pub fn new(processor: FileProcessor) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &FileProcessor {
        &self.processor
    }

    /// Process every regular file under `root`.
    ///
    /// A root that is missing, not a directory, or unreadable makes this a
    /// no-op; the same goes for any unreadable subdirectory. Each directory is
    /// listed before its files are processed, so outputs written during the
    /// walk are not picked up by it. Outputs from earlier runs are ordinary
    /// files and get processed again.
    pub fn explore(&self, root: &Path, diagnostics: &mut dyn Diagnostics) {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(error) => {
                diagnostics.directory_unreadable(root, &error);
                return;
            }
        };
        diagnostics.directory_entered(root);

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        for entry in entries {
            // file_type() does not follow symlinks
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();

            if file_type.is_dir() {
                self.explore(&path, diagnostics);
            } else if file_type.is_file() {
                self.processor.process(&path, diagnostics);
            }
        }
    }
}
