//! Error types.
//!
//! Only [`SynthesisError`] aborts a round. [`EligibilityError`]s are reported
//! through [`Diagnostics`](crate::host::Diagnostics) and processing moves on to
//! the next declaration.

use std::path::PathBuf;

use declsynth_syntax::TypeParseError;
use thiserror::Error;

pub type SynthesisResult<T> = Result<T, SynthesisError>;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures while persisting a generated unit. Always fatal for the round.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unit `{file}` in namespace `{namespace}` was already emitted this round")]
    DuplicateUnit { namespace: String, file: String },
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{symbol}: {source}")]
    InvalidType {
        symbol: String,
        #[source]
        source: TypeParseError,
    },
    #[error("{symbol}: unknown modifier `{modifier}`")]
    UnknownModifier { symbol: String, modifier: String },
    #[error("{}", render_issues(.0))]
    Invalid(Vec<SnapshotIssue>),
}

fn render_issues(issues: &[SnapshotIssue]) -> String {
    let lines: Vec<String> = issues.iter().map(ToString::to_string).collect();
    format!("invalid snapshot: {}", lines.join("; "))
}

/// A violated declaration-model invariant, found while validating a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{location}: {message}")]
pub struct SnapshotIssue {
    pub location: String,
    pub message: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    BlankName,
    DuplicateDeclaration,
    DuplicateMember,
    VarargNotLast,
    InvalidNamespace,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Why a marked declaration produced no output.
///
/// The display text is the user-facing diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    #[error("{name} {kind} cannot be private")]
    PrivateDeclaration { name: String, kind: String },
    #[error("@{directive} cannot be applied to {kind} {name}")]
    UnsupportedKind {
        name: String,
        kind: String,
        directive: String,
    },
    #[error("@{directive} on {name} is redundant: data classes already provide it")]
    ValueSemantic { name: String, directive: String },
    #[error("{name} has no primary constructor")]
    MissingPrimaryConstructor { name: String },
    #[error("{name} has an empty primary constructor")]
    EmptyPrimaryConstructor { name: String },
    #[error("abstract class {name} must have no constructor parameters to be wrapped")]
    AbstractWithConstructor { name: String },
    #[error("{name} has no constructor parameter readable from outside the class")]
    NoReadableFields { name: String },
    #[error("{name}: member `{member}` clashes with the generated `delegate` field")]
    DelegateClash { name: String, member: String },
    #[error("{name}: generated `{file}` clashes with the one already generated for {first}")]
    GeneratedNameClash {
        name: String,
        file: String,
        first: String,
    },
    #[error("{name}: type of `{member}` could not be resolved (`{text}`)")]
    UnresolvedType {
        name: String,
        member: String,
        text: String,
    },
}

impl EligibilityError {
    /// Value-semantic classes are skipped with a warning, everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, EligibilityError::ValueSemantic { .. })
    }
}
