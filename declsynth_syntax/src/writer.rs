//! The printer.
//!
//! [`CodeWriter`] is the only place where text is produced. It tracks the
//! indentation level, inserts the indent at the start of each line and knows
//! which qualified names the current file imports, so that [`TypeName`]s can be
//! written with their simple name.

use std::collections::BTreeSet;

use crate::names;
use crate::types::{TypeArg, TypeName};

/// Indentation unit, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub width: usize,
}

impl Indent {
    pub fn spaces(width: usize) -> Self {
        Self { width }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self { width: 4 }
    }
}

#[derive(Debug, Clone)]
pub struct CodeWriter {
    out: String,
    indent: Indent,
    level: usize,
    imports: BTreeSet<String>,
    at_line_start: bool,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_indent(Indent::default())
    }

    pub fn with_indent(indent: Indent) -> Self {
        Self {
            out: String::new(),
            indent,
            level: 0,
            imports: BTreeSet::new(),
            at_line_start: true,
        }
    }

    /// Names written from now on are shortened when they appear in `imports`.
    pub fn set_imports(&mut self, imports: impl IntoIterator<Item = String>) {
        self.imports = imports.into_iter().collect();
    }

    pub fn is_imported(&self, qualified: &str) -> bool {
        self.imports.contains(qualified)
    }

    /// Append text to the current line. Embedded newlines start new lines.
    pub fn write(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_fragment(first);
        }
        for line in lines {
            self.newline();
            self.write_fragment(line);
        }
    }

    fn write_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if self.at_line_start {
            let width = self.indent.width * self.level;
            self.out.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
        self.out.push_str(fragment);
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Render a type, shortening imported names.
    pub fn type_name(&self, ty: &TypeName) -> String {
        let mut text = if self.imports.contains(&ty.name) {
            names::escape_identifier(ty.simple_name()).into_owned()
        } else {
            names::escape_dotted(&ty.name)
        };
        if !ty.arguments.is_empty() {
            let arguments: Vec<String> = ty.arguments.iter().map(|arg| self.type_arg(arg)).collect();
            text.push('<');
            text.push_str(&arguments.join(", "));
            text.push('>');
        }
        if ty.nullable {
            text.push('?');
        }
        text
    }

    fn type_arg(&self, arg: &TypeArg) -> String {
        match arg {
            TypeArg::Star => "*".to_string(),
            TypeArg::Type {
                variance: Some(variance),
                ty,
            } => format!("{variance} {}", self.type_name(ty)),
            TypeArg::Type { variance: None, ty } => self.type_name(ty),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// A node the printer knows how to write.
pub trait Renderable {
    fn render(&self, writer: &mut CodeWriter);

    /// Render on a fresh writer with the default indent.
    fn to_source(&self) -> String {
        let mut writer = CodeWriter::new();
        self.render(&mut writer);
        writer.finish()
    }
}
