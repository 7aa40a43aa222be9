//! Generated output units.

use std::path::PathBuf;

use declsynth_syntax::{FileSpec, Indent, TopLevel, UseSite};

use crate::markers::{Provenance, build_provenance_annotation};

/// One generated source file: a namespace, a fixed file identifier and the
/// top-level declarations that go into it.
///
/// Units are never empty and never cacheable across rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUnit {
    namespace: String,
    file_identifier: String,
    members: Vec<TopLevel>,
    provenance: Provenance,
}

impl GeneratedUnit {
    /// `None` when there is nothing to emit.
    pub fn new(
        namespace: impl Into<String>,
        file_identifier: impl Into<String>,
        members: Vec<TopLevel>,
        provenance: &Provenance,
    ) -> Option<Self> {
        if members.is_empty() {
            return None;
        }
        Some(Self {
            namespace: namespace.into(),
            file_identifier: file_identifier.into(),
            members,
            provenance: provenance.clone(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn file_identifier(&self) -> &str {
        &self.file_identifier
    }

    pub fn members(&self) -> &[TopLevel] {
        &self.members
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Generated source depends on the whole declaration snapshot, so a unit
    /// is regenerated on every round.
    pub fn is_cacheable(&self) -> bool {
        false
    }

    /// The file with its unit-level `@file:` provenance annotation.
    pub fn to_file_spec(&self, indent: Indent) -> FileSpec {
        let mut file = FileSpec::new(self.namespace.clone(), self.file_identifier.clone())
            .indent(indent)
            .annotation(build_provenance_annotation(&self.provenance).use_site(UseSite::File));
        if self.provenance.annotation_type.contains('.') {
            file = file.import(self.provenance.annotation_type.clone());
        }
        file.members = self.members.clone();
        file
    }

    pub fn render(&self, indent: Indent) -> String {
        self.to_file_spec(indent).render_to_string()
    }

    /// `com/example/CopyExtension.kt`
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        FileSpec::new(self.namespace.clone(), self.file_identifier.clone()).relative_path(extension)
    }
}
