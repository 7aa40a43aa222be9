//! Prelude module for declsynth
//!
//! Re-exports the types needed to load declarations, run a round and inspect
//! its output.

// Error handling
pub use crate::error::{
    ConfigError, EligibilityError, EmitError, SnapshotError, SynthesisError, SynthesisResult,
};

// Configuration
pub use crate::config::SynthesisConfig;

// Declaration model
pub use crate::model::{
    Annotation, ConstructorParameter, DeclarationKind, FunctionMember, Parameter, PropertyMember,
    TypeDeclaration, TypeParameter, TypeRef, Visibility,
};
pub use crate::snapshot::DeclarationSnapshot;

// Host collaborators
pub use crate::host::{
    DeclarationModel, Diagnostic, DiagnosticLog, Diagnostics, Emitter, FileSystemEmitter,
    MemoryEmitter, Severity,
};

// Rounds
pub use crate::drivers::{RoundReport, SynthesisDriver, run_round};
pub use crate::markers::{Directive, Provenance};
pub use crate::unit::GeneratedUnit;

// Output syntax
pub use declsynth_syntax::{Indent, Renderable, TypeName};
