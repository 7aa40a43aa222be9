//! # Symbol Host
//!
//! The collaborators a synthesis round talks to. The host compiler (or the
//! [snapshot loader](crate::snapshot) standing in for it) provides:
//!
//! - [`DeclarationModel`]: the marked declarations and type resolution
//! - [`Diagnostics`]: non-aborting error and warning reports
//! - [`Emitter`]: persistence of generated units
//!
//! Generators only ever see these traits, so tests drive them with synthetic
//! declarations and an in-memory emitter.

mod diagnostics;
mod emitter;

pub use diagnostics::{Diagnostic, DiagnosticLog, Diagnostics, Severity};
pub use emitter::{Emitter, FileSystemEmitter, MemoryEmitter};

use declsynth_syntax::TypeName;

use crate::model::TypeDeclaration;

/// Read-only access to the declarations of one round.
pub trait DeclarationModel {
    /// Declarations carrying `marker`, de-duplicated, in discovery order.
    fn marked_with(&self, marker: &str) -> Vec<&TypeDeclaration>;

    /// The declaration a type written in `from_namespace` refers to, if it is
    /// part of this round.
    fn resolve(&self, ty: &TypeName, from_namespace: &str) -> Option<&TypeDeclaration>;

    fn declaration(&self, qualified_name: &str) -> Option<&TypeDeclaration>;
}
