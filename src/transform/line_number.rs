//! Line numbering stage

use super::CharTransformer;

/// Prefixes every line with `"<n>. "` and normalizes line endings to `\n`.
///
/// Carriage returns are dropped, so CRLF becomes LF. A lone `\r` with no
/// following `\n` loses its line break entirely.
///
/// The label for line `n + 1` is emitted right after the `\n` that ends line
/// `n`, before any of its characters are seen. A trailing newline therefore
/// leaves a dangling label at the end of the output, and input that never
/// produces a character produces no label at all.
///
/// The counter is per instance: use a fresh transformer for every file.
#[derive(Debug, Default)]
pub struct LineNumberingTransformer {
    line: u64,
}

impl LineNumberingTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the line currently being written (0 before any output).
    pub fn current_line(&self) -> u64 {
        self.line
    }

    fn push_label(&mut self, out: &mut String) {
        self.line += 1;
        out.push_str(&self.line.to_string());
        out.push_str(". ");
    }
}

impl CharTransformer for LineNumberingTransformer {
    fn transform(&mut self, input: &str) -> String {
        if input == "\r" {
            return String::new();
        }

        let mut out = String::with_capacity(input.len() + 8);
        if self.line == 0 {
            self.push_label(&mut out);
        }
        out.push_str(input);
        if input == "\n" {
            self.push_label(&mut out);
        }
        out
    }
}
