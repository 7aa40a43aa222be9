//! # Declaration Snapshots
//!
//! A TOML description of the declarations of one round, and the in-process
//! [`DeclarationModel`] built from it.
//!
//! ```toml
//! [[declarations]]
//! name = "com.example.User"
//! kind = "class"
//! annotations = [{ name = "io.declsynth.annotations.Copy" }]
//! constructor = [
//!     { name = "age", type = "Int", binding = "val" },
//!     { name = "name", type = "String", binding = "val" },
//! ]
//! ```
//!
//! Loading runs three steps, mirroring a schema pipeline:
//!
//! 1. [`loader::parse_snapshot_from_str`]: TOML into [`schema`] types
//! 2. [`loader::convert_declarations`]: type text parsed, modifiers checked
//! 3. [`validator::validate_declarations`]: model invariants (unique names,
//!    vararg last, non-blank names)

pub mod loader;
pub mod schema;
pub mod validator;

use std::collections::HashMap;
use std::path::Path;

use declsynth_syntax::TypeName;

use crate::error::SnapshotError;
use crate::host::DeclarationModel;
use crate::model::TypeDeclaration;

/// Immutable declaration set for one round, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSnapshot {
    declarations: Vec<TypeDeclaration>,
    index: HashMap<String, usize>,
}

impl DeclarationSnapshot {
    /// Validate and index `declarations`.
    pub fn new(declarations: Vec<TypeDeclaration>) -> Result<Self, SnapshotError> {
        validator::validate_declarations(&declarations).into_result()?;
        let index = declarations
            .iter()
            .enumerate()
            .map(|(idx, decl)| (decl.qualified_name.to_string(), idx))
            .collect();
        Ok(Self {
            declarations,
            index,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SnapshotError> {
        let schema = loader::parse_snapshot_from_str(content)?;
        Self::new(loader::convert_declarations(&schema)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let schema = loader::parse_snapshot(path)?;
        Self::new(loader::convert_declarations(&schema)?)
    }

    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl DeclarationModel for DeclarationSnapshot {
    fn marked_with(&self, marker: &str) -> Vec<&TypeDeclaration> {
        self.declarations
            .iter()
            .filter(|decl| decl.is_marked(marker))
            .collect()
    }

    fn resolve(&self, ty: &TypeName, from_namespace: &str) -> Option<&TypeDeclaration> {
        if !from_namespace.is_empty() {
            let local = format!("{from_namespace}.{}", ty.name);
            if let Some(decl) = self.declaration(&local) {
                return Some(decl);
            }
        }
        self.declaration(&ty.name)
    }

    fn declaration(&self, qualified_name: &str) -> Option<&TypeDeclaration> {
        self.index
            .get(qualified_name)
            .and_then(|idx| self.declarations.get(*idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotation, DeclarationKind};

    fn class(name: &str, annotations: Vec<Annotation>) -> TypeDeclaration {
        TypeDeclaration::builder()
            .qualified_name(name)
            .kind(DeclarationKind::Class)
            .annotations(annotations)
            .build()
    }

    #[test]
    fn test_marked_with_keeps_discovery_order() {
        let snapshot = DeclarationSnapshot::new(vec![
            class("a.Post", vec![Annotation::new("ToNiceString")]),
            class("a.Plain", vec![]),
            class("b.User", vec![Annotation::new("io.declsynth.annotations.ToNiceString")]),
        ])
        .unwrap();
        let names: Vec<String> = snapshot
            .marked_with("io.declsynth.annotations.ToNiceString")
            .iter()
            .map(|decl| decl.qualified_name.to_string())
            .collect();
        assert_eq!(names, vec!["a.Post", "b.User"]);
    }

    #[test]
    fn test_resolve_prefers_requesting_namespace() {
        let snapshot = DeclarationSnapshot::new(vec![
            class("a.User", vec![]),
            class("User", vec![]),
            class("b.Post", vec![]),
        ])
        .unwrap();
        let user = TypeName::new("User");
        assert_eq!(
            snapshot.resolve(&user, "a").map(|d| d.qualified_name.as_str()),
            Some("a.User")
        );
        assert_eq!(
            snapshot.resolve(&user, "c").map(|d| d.qualified_name.as_str()),
            Some("User")
        );
        assert_eq!(
            snapshot
                .resolve(&TypeName::new("b.Post"), "a")
                .map(|d| d.qualified_name.as_str()),
            Some("b.Post")
        );
        assert!(snapshot.resolve(&TypeName::new("Missing"), "a").is_none());
    }

    #[test]
    fn test_invalid_declarations_are_rejected() {
        let result = DeclarationSnapshot::new(vec![class("a.User", vec![]), class("a.User", vec![])]);
        assert!(matches!(result, Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_from_toml_str() {
        let snapshot = DeclarationSnapshot::from_toml_str(
            r#"
[[declarations]]
name = "com.example.User"
kind = "class"
constructor = [{ name = "age", type = "Int", binding = "val" }]
"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.declaration("com.example.User").is_some());
    }
}
