use super::{Round, SynthesisDriver, run_extension_driver};
use crate::error::SynthesisResult;
use crate::generators::copy::generate_copy;
use crate::generators::naming::COPY_EXTENSION_FILE;
use crate::markers::Directive;

/// Batches `copy` extensions into one `CopyExtension` unit per namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyDriver;

impl SynthesisDriver for CopyDriver {
    fn directive(&self) -> Directive {
        Directive::Copy
    }

    fn run(&self, round: &mut Round<'_>) -> SynthesisResult<()> {
        run_extension_driver(round, Directive::Copy, COPY_EXTENSION_FILE, generate_copy)
    }
}
