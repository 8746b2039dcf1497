//! Sequential composition of transformers

use super::{CharTransformer, LineNumberingTransformer, UpperCaseTransformer};

/// An ordered list of transform stages.
///
/// Each character is handed to the first stage; every following stage
/// receives the previous stage's output. A chain owns its stages, so stateful
/// stages live exactly as long as the chain.
pub struct TransformChain {
    stages: Vec<Box<dyn CharTransformer>>,
}

impl TransformChain {
    /// An empty chain, which returns its input unchanged.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain.
    pub fn then<T: CharTransformer + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// The standard chain: uppercase, then line numbering.
    ///
    /// Build a new one per file so line numbers start over at 1.
    pub fn uppercase_numbered() -> Self {
        Self::new()
            .then(UpperCaseTransformer)
            .then(LineNumberingTransformer::new())
    }

    /// Run one character through every stage in order.
    pub fn apply(&mut self, ch: char) -> String {
        let mut buf = [0u8; 4];
        let mut current = ch.encode_utf8(&mut buf).to_owned();
        for stage in &mut self.stages {
            current = stage.transform(&current);
        }
        current
    }

    /// Run every character of `text` through the chain and join the results.
    pub fn apply_str(&mut self, text: &str) -> String {
        text.chars().map(|ch| self.apply(ch)).collect()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::uppercase_numbered()
    }
}
