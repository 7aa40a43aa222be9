use std::collections::BTreeSet;

use crate::annotation::AnnotationSpec;
use crate::names;
use crate::spec::function::FunSpec;
use crate::spec::modifier::{Modifier, modifier_prefix};
use crate::spec::parameter::ParameterSpec;
use crate::spec::property::PropertySpec;
use crate::spec::{render_annotations, render_kdoc, type_variables_decl, where_clause};
use crate::types::{TypeName, TypeVariable};
use crate::writer::{CodeWriter, Renderable};

/// An implemented interface (`Api<T>`) or an extended class (`Base()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supertype {
    pub ty: TypeName,
    pub constructor_call: bool,
}

impl Supertype {
    pub fn interface(ty: TypeName) -> Self {
        Self {
            ty,
            constructor_call: false,
        }
    }

    pub fn class(ty: TypeName) -> Self {
        Self {
            ty,
            constructor_call: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub name: String,
    pub kdoc: Option<String>,
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: BTreeSet<Modifier>,
    pub type_variables: Vec<TypeVariable>,
    pub constructor: Vec<ParameterSpec>,
    pub supertypes: Vec<Supertype>,
    pub properties: Vec<PropertySpec>,
    pub functions: Vec<FunSpec>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kdoc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            type_variables: Vec::new(),
            constructor: Vec::new(),
            supertypes: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
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

    pub fn type_variables(mut self, variables: impl IntoIterator<Item = TypeVariable>) -> Self {
        self.type_variables.extend(variables);
        self
    }

    pub fn constructor_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.constructor.push(parameter);
        self
    }

    pub fn supertype(mut self, supertype: Supertype) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn function(mut self, function: FunSpec) -> Self {
        self.functions.push(function);
        self
    }

    fn has_body(&self) -> bool {
        !self.properties.is_empty() || !self.functions.is_empty()
    }
}

impl Renderable for ClassSpec {
    fn render(&self, writer: &mut CodeWriter) {
        render_kdoc(writer, self.kdoc.as_deref());
        render_annotations(writer, &self.annotations);

        let mut header = modifier_prefix(&self.modifiers);
        header.push_str("class ");
        header.push_str(&names::escape_identifier(&self.name));
        header.push_str(&type_variables_decl(writer, &self.type_variables));
        if self.constructor.is_empty() {
            writer.write(&header);
        } else {
            writer.line(&format!("{header}("));
            writer.indent();
            for parameter in &self.constructor {
                let code = parameter.to_code(writer);
                writer.line(&format!("{code},"));
            }
            writer.dedent();
            writer.write(")");
        }

        let mut tail = String::new();
        if !self.supertypes.is_empty() {
            let supertypes: Vec<String> = self
                .supertypes
                .iter()
                .map(|supertype| {
                    let ty = writer.type_name(&supertype.ty);
                    if supertype.constructor_call {
                        format!("{ty}()")
                    } else {
                        ty
                    }
                })
                .collect();
            tail.push_str(" : ");
            tail.push_str(&supertypes.join(", "));
        }
        tail.push_str(&where_clause(writer, &self.type_variables));

        if !self.has_body() {
            writer.line(&tail);
            return;
        }
        writer.line(&format!("{tail} {{"));
        writer.indent();
        let mut first = true;
        for property in &self.properties {
            if !first {
                writer.newline();
            }
            first = false;
            property.render(writer);
        }
        for function in &self.functions {
            if !first {
                writer.newline();
            }
            first = false;
            function.render(writer);
        }
        writer.dedent();
        writer.line("}");
    }
}
