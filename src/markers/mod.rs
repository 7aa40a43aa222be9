//! Marker utilities.
//!
//! Pure helpers shared by every generator: which directive a marker stands
//! for, log suppression, value-semantics detection, type parameter conversion
//! and the provenance annotation.

mod provenance;

pub use provenance::{Provenance, build_provenance_annotation};

use declsynth_syntax::{Modifier, TypeVariable};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::model::{Annotation, TypeDeclaration, TypeParameter};

/// The four markers this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum Directive {
    /// Generate a logging wrapper for an interface or abstract class.
    Loggable,
    /// Suppress the log line of one member of a logged declaration.
    NoLog,
    /// Generate a `copy` extension for a class.
    Copy,
    /// Generate a `toNiceString` extension for a class.
    ToNiceString,
}

/// Qualified marker names, derived from one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    namespace: String,
}

impl MarkerSet {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn qualified(&self, directive: Directive) -> String {
        if self.namespace.is_empty() {
            directive.to_string()
        } else {
            format!("{}.{}", self.namespace, directive)
        }
    }

    /// True when `annotation` is one of the markers.
    pub fn is_marker(&self, annotation: &Annotation) -> bool {
        Directive::iter().any(|directive| annotation.is(&self.qualified(directive)))
    }
}

/// Declarations that already get structural equality, copy and string
/// rendering from the language.
pub fn is_value_semantic(decl: &TypeDeclaration) -> bool {
    decl.has_modifier(Modifier::Data)
}

/// False only when one of `annotations` is the log-suppression marker.
pub fn logging_enabled(annotations: &[Annotation], markers: &MarkerSet) -> bool {
    let no_log = markers.qualified(Directive::NoLog);
    !annotations.iter().any(|annotation| annotation.is(&no_log))
}

/// Name and bounds, copied verbatim.
pub fn to_type_variable(parameter: &TypeParameter) -> TypeVariable {
    TypeVariable::new(parameter.name.clone()).bounded_by(parameter.bounds.iter().cloned())
}
