use std::collections::BTreeSet;

use crate::annotation::AnnotationSpec;
use crate::code::Stmt;
use crate::names;
use crate::spec::modifier::{Modifier, modifier_prefix};
use crate::spec::parameter::ParameterSpec;
use crate::spec::{render_annotations, render_kdoc, type_variables_decl, where_clause};
use crate::types::{TypeName, TypeVariable};
use crate::writer::{CodeWriter, Renderable};

/// A function with a block body. A `receiver` makes it an extension function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunSpec {
    pub name: String,
    pub kdoc: Option<String>,
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: BTreeSet<Modifier>,
    pub type_variables: Vec<TypeVariable>,
    pub receiver: Option<TypeName>,
    pub parameters: Vec<ParameterSpec>,
    pub returns: Option<TypeName>,
    pub body: Vec<Stmt>,
}

impl FunSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kdoc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            type_variables: Vec::new(),
            receiver: None,
            parameters: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    pub fn kdoc(mut self, kdoc: impl Into<String>) -> Self {
        self.kdoc = Some(kdoc.into());
        self
    }

    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn type_variables(mut self, variables: impl IntoIterator<Item = TypeVariable>) -> Self {
        self.type_variables.extend(variables);
        self
    }

    pub fn receiver(mut self, receiver: TypeName) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, ty: TypeName) -> Self {
        self.returns = Some(ty);
        self
    }

    pub fn statement(mut self, statement: Stmt) -> Self {
        self.body.push(statement);
        self
    }

    fn signature(&self, writer: &CodeWriter) -> String {
        let mut code = modifier_prefix(&self.modifiers);
        code.push_str("fun ");
        let type_variables = type_variables_decl(writer, &self.type_variables);
        if !type_variables.is_empty() {
            code.push_str(&type_variables);
            code.push(' ');
        }
        if let Some(receiver) = &self.receiver {
            code.push_str(&writer.type_name(receiver));
            code.push('.');
        }
        code.push_str(&names::escape_identifier(&self.name));
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_code(writer))
            .collect();
        code.push('(');
        code.push_str(&parameters.join(", "));
        code.push(')');
        if let Some(returns) = &self.returns {
            code.push_str(": ");
            code.push_str(&writer.type_name(returns));
        }
        code.push_str(&where_clause(writer, &self.type_variables));
        code
    }
}

impl Renderable for FunSpec {
    fn render(&self, writer: &mut CodeWriter) {
        render_kdoc(writer, self.kdoc.as_deref());
        render_annotations(writer, &self.annotations);
        let signature = self.signature(writer);
        writer.line(&format!("{signature} {{"));
        writer.indent();
        for statement in &self.body {
            statement.render(writer);
        }
        writer.dedent();
        writer.line("}");
    }
}
