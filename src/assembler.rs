//! Extension unit assembler.
//!
//! Batches the extension functions one driver generates into a single
//! [`GeneratedUnit`] per namespace, so every namespace gets one
//! `CopyExtension` and one `ToNiceStringExtension` file at most.

use std::collections::HashMap;

use declsynth_syntax::{FunSpec, TopLevel};

use crate::markers::Provenance;
use crate::unit::GeneratedUnit;

/// Groups functions by namespace, in first-discovery order.
#[derive(Debug, Clone)]
pub struct ExtensionUnitAssembler {
    file_identifier: String,
    groups: Vec<(String, Vec<FunSpec>)>,
    positions: HashMap<String, usize>,
}

impl ExtensionUnitAssembler {
    pub fn new(file_identifier: impl Into<String>) -> Self {
        Self {
            file_identifier: file_identifier.into(),
            groups: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn add(&mut self, namespace: &str, function: FunSpec) {
        let idx = match self.positions.get(namespace) {
            Some(idx) => *idx,
            None => {
                self.groups.push((namespace.to_string(), Vec::new()));
                let idx = self.groups.len() - 1;
                self.positions.insert(namespace.to_string(), idx);
                idx
            }
        };
        self.groups[idx].1.push(function);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn function_count(&self) -> usize {
        self.groups.iter().map(|(_, functions)| functions.len()).sum()
    }

    /// One unit per namespace that received at least one function.
    pub fn finish(self, provenance: &Provenance) -> Vec<GeneratedUnit> {
        let file_identifier = self.file_identifier;
        self.groups
            .into_iter()
            .filter_map(|(namespace, functions)| {
                let members = functions.into_iter().map(TopLevel::from).collect();
                GeneratedUnit::new(namespace, file_identifier.clone(), members, provenance)
            })
            .collect()
    }
}
