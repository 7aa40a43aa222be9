use std::collections::BTreeSet;

use crate::annotation::AnnotationSpec;
use crate::code::Expr;
use crate::names;
use crate::spec::modifier::{Modifier, modifier_prefix};
use crate::types::TypeName;
use crate::writer::{CodeWriter, Renderable};

/// `val` / `var` on a primary constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PropertyBinding {
    Val,
    Var,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: TypeName,
    pub vararg: bool,
    pub default: Option<Expr>,
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: BTreeSet<Modifier>,
    /// Only meaningful in a primary constructor.
    pub binding: Option<PropertyBinding>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
            vararg: false,
            default: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            binding: None,
        }
    }

    pub fn vararg(mut self, vararg: bool) -> Self {
        self.vararg = vararg;
        self
    }

    pub fn default_value(mut self, value: Expr) -> Self {
        self.default = Some(value);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn binding(mut self, binding: PropertyBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Single-line form: `private vararg val name: Type = default`.
    pub fn to_code(&self, writer: &CodeWriter) -> String {
        let mut code = String::new();
        for annotation in &self.annotations {
            code.push_str(&annotation.to_code(writer));
            code.push(' ');
        }
        code.push_str(&modifier_prefix(&self.modifiers));
        if self.vararg {
            code.push_str("vararg ");
        }
        if let Some(binding) = self.binding {
            code.push_str(binding.as_ref());
            code.push(' ');
        }
        code.push_str(&names::escape_identifier(&self.name));
        code.push_str(": ");
        code.push_str(&writer.type_name(&self.ty));
        if let Some(default) = &self.default {
            code.push_str(" = ");
            code.push_str(&default.to_code(writer));
        }
        code
    }
}

impl Renderable for ParameterSpec {
    fn render(&self, writer: &mut CodeWriter) {
        let code = self.to_code(writer);
        writer.write(&code);
    }
}
