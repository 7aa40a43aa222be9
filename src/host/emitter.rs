use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use declsynth_syntax::Indent;

use crate::error::EmitError;
use crate::unit::GeneratedUnit;

/// Persists generated units. A failure aborts the round.
pub trait Emitter {
    fn submit(&mut self, unit: GeneratedUnit) -> Result<(), EmitError>;
}

/// Writes each unit to `<root>/<namespace as dirs>/<file>.<extension>`.
#[derive(Debug, Clone)]
pub struct FileSystemEmitter {
    root: PathBuf,
    extension: String,
    indent: Indent,
    written: Vec<PathBuf>,
}

impl FileSystemEmitter {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>, indent: Indent) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            indent,
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths written so far, in submission order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Emitter for FileSystemEmitter {
    fn submit(&mut self, unit: GeneratedUnit) -> Result<(), EmitError> {
        let path = self.root.join(unit.relative_path(&self.extension));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, unit.render(self.indent)).map_err(|source| EmitError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps submitted units in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    units: Vec<GeneratedUnit>,
    indent: Indent,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent: Indent) -> Self {
        Self {
            units: Vec::new(),
            indent,
        }
    }

    pub fn units(&self) -> &[GeneratedUnit] {
        &self.units
    }

    pub fn unit(&self, namespace: &str, file_identifier: &str) -> Option<&GeneratedUnit> {
        self.units
            .iter()
            .find(|unit| unit.namespace() == namespace && unit.file_identifier() == file_identifier)
    }

    /// Rendered source keyed by `namespace/file`.
    pub fn sources(&self) -> BTreeMap<String, String> {
        self.units
            .iter()
            .map(|unit| {
                (
                    format!("{}/{}", unit.namespace(), unit.file_identifier()),
                    unit.render(self.indent),
                )
            })
            .collect()
    }

    pub fn into_units(self) -> Vec<GeneratedUnit> {
        self.units
    }
}

impl Emitter for MemoryEmitter {
    fn submit(&mut self, unit: GeneratedUnit) -> Result<(), EmitError> {
        if self.unit(unit.namespace(), unit.file_identifier()).is_some() {
            return Err(EmitError::DuplicateUnit {
                namespace: unit.namespace().to_string(),
                file: unit.file_identifier().to_string(),
            });
        }
        self.units.push(unit);
        Ok(())
    }
}
