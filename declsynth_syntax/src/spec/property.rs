use std::collections::BTreeSet;

use crate::annotation::AnnotationSpec;
use crate::code::{Expr, Stmt};
use crate::names;
use crate::spec::modifier::{Modifier, modifier_prefix};
use crate::spec::{render_annotations, render_kdoc};
use crate::types::TypeName;
use crate::writer::{CodeWriter, Renderable};

/// Body of a `get()` or `set(value)` accessor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accessor {
    pub body: Vec<Stmt>,
}

impl Accessor {
    pub fn new(body: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            body: body.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    pub name: String,
    pub ty: TypeName,
    pub mutable: bool,
    pub kdoc: Option<String>,
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: BTreeSet<Modifier>,
    pub initializer: Option<Expr>,
    pub getter: Option<Accessor>,
    pub setter: Option<Accessor>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: TypeName, mutable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            mutable,
            kdoc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            initializer: None,
            getter: None,
            setter: None,
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn initializer(mut self, value: Expr) -> Self {
        self.initializer = Some(value);
        self
    }

    pub fn getter(mut self, accessor: Accessor) -> Self {
        self.getter = Some(accessor);
        self
    }

    pub fn setter(mut self, accessor: Accessor) -> Self {
        self.setter = Some(accessor);
        self
    }
}

fn render_accessor(writer: &mut CodeWriter, header: &str, accessor: &Accessor) {
    writer.line(&format!("{header} {{"));
    writer.indent();
    for statement in &accessor.body {
        statement.render(writer);
    }
    writer.dedent();
    writer.line("}");
}

impl Renderable for PropertySpec {
    fn render(&self, writer: &mut CodeWriter) {
        render_kdoc(writer, self.kdoc.as_deref());
        render_annotations(writer, &self.annotations);
        let mut declaration = modifier_prefix(&self.modifiers);
        declaration.push_str(if self.mutable { "var " } else { "val " });
        declaration.push_str(&names::escape_identifier(&self.name));
        declaration.push_str(": ");
        declaration.push_str(&writer.type_name(&self.ty));
        if let Some(initializer) = &self.initializer {
            declaration.push_str(" = ");
            declaration.push_str(&initializer.to_code(writer));
        }
        writer.line(&declaration);
        writer.indent();
        if let Some(getter) = &self.getter {
            render_accessor(writer, "get()", getter);
        }
        if let Some(setter) = self.setter.as_ref().filter(|_| self.mutable) {
            render_accessor(writer, "set(value)", setter);
        }
        writer.dedent();
    }
}
