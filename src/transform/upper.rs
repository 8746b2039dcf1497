//! Uppercase stage

use super::CharTransformer;

/// Maps input to its Unicode uppercase form.
///
/// The mapping is locale-independent and uses full case mappings, so one
/// character may expand to several. Characters without an uppercase form pass
/// through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCaseTransformer;

impl CharTransformer for UpperCaseTransformer {
    fn transform(&mut self, input: &str) -> String {
        input.to_uppercase()
    }
}
