use std::fmt;

use declsynth_syntax::{TypeName, TypeParseError};

/// Text the host uses for a type it could not resolve.
pub const UNRESOLVED_TYPE: &str = "<ERROR TYPE>";

/// A declared type as the host reported it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Resolved(TypeName),
    /// Kept verbatim so diagnostics can show it.
    Unresolved(String),
}

impl TypeRef {
    /// Parse type text; [`UNRESOLVED_TYPE`] yields [`TypeRef::Unresolved`].
    pub fn parse(text: &str) -> Result<Self, TypeParseError> {
        let trimmed = text.trim();
        if trimmed == UNRESOLVED_TYPE {
            return Ok(TypeRef::Unresolved(trimmed.to_string()));
        }
        TypeName::parse(trimmed).map(TypeRef::Resolved)
    }

    pub fn resolved(&self) -> Option<&TypeName> {
        match self {
            TypeRef::Resolved(ty) => Some(ty),
            TypeRef::Unresolved(_) => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.resolved().is_some_and(|ty| ty.nullable)
    }
}

impl From<TypeName> for TypeRef {
    fn from(ty: TypeName) -> Self {
        TypeRef::Resolved(ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Resolved(ty) => write!(f, "{ty}"),
            TypeRef::Unresolved(text) => f.write_str(text),
        }
    }
}
