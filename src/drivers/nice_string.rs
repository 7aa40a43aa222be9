use super::{Round, SynthesisDriver, run_extension_driver};
use crate::error::SynthesisResult;
use crate::generators::naming::NICE_STRING_EXTENSION_FILE;
use crate::generators::nice_string::generate_nice_string;
use crate::markers::Directive;

/// Batches `toNiceString` extensions into one `ToNiceStringExtension` unit per
/// namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NiceStringDriver;

impl SynthesisDriver for NiceStringDriver {
    fn directive(&self) -> Directive {
        Directive::ToNiceString
    }

    fn run(&self, round: &mut Round<'_>) -> SynthesisResult<()> {
        run_extension_driver(
            round,
            Directive::ToNiceString,
            NICE_STRING_EXTENSION_FILE,
            generate_nice_string,
        )
    }
}
