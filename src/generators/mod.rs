//! # Generators
//!
//! Pure functions from one [`TypeDeclaration`](crate::model::TypeDeclaration)
//! to a syntax tree:
//!
//! - [`logging::generate_logger`]: the `<Name>LoggerImpl` delegating wrapper
//! - [`copy::generate_copy`]: the `copy` extension function
//! - [`nice_string::generate_nice_string`]: the `toNiceString` extension function
//!
//! A generator never reports or emits anything itself. It returns either the
//! generated node plus any warnings, or the [`EligibilityError`] explaining why
//! the declaration produced nothing; the [drivers](crate::drivers) decide what
//! to do with both.
//!
//! [`EligibilityError`]: crate::error::EligibilityError

pub mod copy;
pub mod eligibility;
pub mod logging;
pub mod naming;
pub mod nice_string;

use declsynth_syntax::AnnotationSpec;

use crate::config::SynthesisConfig;
use crate::host::DeclarationModel;
use crate::markers::{Directive, MarkerSet, Provenance, build_provenance_annotation};

/// A generated node and the non-fatal findings made while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesized<T> {
    pub item: T,
    pub warnings: Vec<String>,
}

impl<T> Synthesized<T> {
    pub fn new(item: T) -> Self {
        Self {
            item,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(item: T, warnings: Vec<String>) -> Self {
        Self { item, warnings }
    }
}

/// Everything a generator may read during one round.
pub struct SynthesisContext<'a> {
    pub model: &'a dyn DeclarationModel,
    pub config: &'a SynthesisConfig,
    pub markers: MarkerSet,
    pub provenance: Provenance,
}

impl<'a> SynthesisContext<'a> {
    pub fn new(
        model: &'a dyn DeclarationModel,
        config: &'a SynthesisConfig,
        provenance: Provenance,
    ) -> Self {
        Self {
            model,
            config,
            markers: config.markers(),
            provenance,
        }
    }

    pub fn marker(&self, directive: Directive) -> String {
        self.markers.qualified(directive)
    }

    /// The annotation every generated declaration carries once.
    pub fn provenance_annotation(&self) -> AnnotationSpec {
        build_provenance_annotation(&self.provenance)
    }
}
