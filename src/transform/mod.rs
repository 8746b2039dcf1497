//! Character transformers
//!
//! Every input code point is run through a fixed sequence of transformers,
//! each turning one (already transformed) string into the next. The standard
//! chain uppercases first and numbers lines second.

mod chain;
mod line_number;
mod upper;

pub use chain::TransformChain;
pub use line_number::LineNumberingTransformer;
pub use upper::UpperCaseTransformer;

/// A single stage of the transform chain.
///
/// The input is normally one character, but earlier stages may widen it
/// (uppercasing `ß` yields `SS`), so implementations must accept any string.
/// The output may be empty.
pub trait CharTransformer {
    fn transform(&mut self, input: &str) -> String;
}
