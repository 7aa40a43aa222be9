use std::collections::BTreeSet;
use std::path::PathBuf;

use derive_more::From;

use crate::annotation::AnnotationSpec;
use crate::names;
use crate::spec::class::ClassSpec;
use crate::spec::function::FunSpec;
use crate::spec::property::PropertySpec;
use crate::writer::{CodeWriter, Indent, Renderable};

/// A declaration that can appear at the top level of a file.
#[derive(Debug, Clone, PartialEq, From)]
pub enum TopLevel {
    Class(ClassSpec),
    Function(FunSpec),
    Property(PropertySpec),
}

impl TopLevel {
    pub fn name(&self) -> &str {
        match self {
            TopLevel::Class(class) => &class.name,
            TopLevel::Function(function) => &function.name,
            TopLevel::Property(property) => &property.name,
        }
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        match self {
            TopLevel::Class(class) => &class.annotations,
            TopLevel::Function(function) => &function.annotations,
            TopLevel::Property(property) => &property.annotations,
        }
    }
}

impl Renderable for TopLevel {
    fn render(&self, writer: &mut CodeWriter) {
        match self {
            TopLevel::Class(class) => class.render(writer),
            TopLevel::Function(function) => function.render(writer),
            TopLevel::Property(property) => property.render(writer),
        }
    }
}

/// One source file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    pub package: String,
    pub name: String,
    pub annotations: Vec<AnnotationSpec>,
    pub imports: BTreeSet<String>,
    pub members: Vec<TopLevel>,
    pub indent: Indent,
}

impl FileSpec {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            annotations: Vec::new(),
            imports: BTreeSet::new(),
            members: Vec::new(),
            indent: Indent::default(),
        }
    }

    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn import(mut self, qualified: impl Into<String>) -> Self {
        self.imports.insert(qualified.into());
        self
    }

    pub fn member(mut self, member: impl Into<TopLevel>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// `com/example/Name.<extension>` relative to an output root.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", self.name, extension));
        path
    }

    /// Render with the file's own indent.
    pub fn render_to_string(&self) -> String {
        let mut writer = CodeWriter::with_indent(self.indent);
        self.render(&mut writer);
        writer.finish()
    }
}

impl Renderable for FileSpec {
    fn render(&self, writer: &mut CodeWriter) {
        // imports shorten names everywhere, file annotations included
        writer.set_imports(self.imports.iter().cloned());

        let mut sections = 0;
        if !self.annotations.is_empty() {
            for annotation in &self.annotations {
                annotation.render(writer);
            }
            sections += 1;
        }
        if !self.package.is_empty() {
            if sections > 0 {
                writer.newline();
            }
            writer.line(&format!("package {}", names::escape_dotted(&self.package)));
            sections += 1;
        }
        if !self.imports.is_empty() {
            if sections > 0 {
                writer.newline();
            }
            for import in &self.imports {
                writer.line(&format!("import {}", names::escape_dotted(import)));
            }
            sections += 1;
        }
        for member in &self.members {
            if sections > 0 {
                writer.newline();
            }
            member.render(writer);
            sections += 1;
        }
    }

    fn to_source(&self) -> String {
        self.render_to_string()
    }
}
