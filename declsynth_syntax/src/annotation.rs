//! Annotation nodes.

use crate::code::escape_literal;
use crate::names;
use crate::types::TypeName;
use crate::writer::{CodeWriter, Renderable};

/// Use-site target, written as `@file:Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum UseSite {
    File,
    Property,
    Field,
    Get,
    Set,
    Param,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<AnnotationValue>),
    Nested(AnnotationSpec),
    /// Written verbatim: enum constants, class literals.
    Raw(String),
}

impl AnnotationValue {
    fn to_code(&self, writer: &CodeWriter) -> String {
        match self {
            AnnotationValue::Str(text) => format!("\"{}\"", escape_literal(text)),
            AnnotationValue::Int(value) => value.to_string(),
            AnnotationValue::Float(value) => float_literal(*value),
            AnnotationValue::Bool(value) => value.to_string(),
            AnnotationValue::Array(values) => {
                let values: Vec<String> = values.iter().map(|v| v.to_code(writer)).collect();
                format!("[{}]", values.join(", "))
            }
            AnnotationValue::Nested(annotation) => annotation.body(writer),
            AnnotationValue::Raw(code) => code.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::Str(text) => Some(text),
            _ => None,
        }
    }
}

/// Non-finite values have no literal form and go through the `Double` constants.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value == f64::INFINITY {
        "Double.POSITIVE_INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "Double.NEGATIVE_INFINITY".to_string()
    } else {
        format!("{value:?}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationArgument {
    pub name: Option<String>,
    pub value: AnnotationValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    pub ty: TypeName,
    pub arguments: Vec<AnnotationArgument>,
    pub use_site: Option<UseSite>,
}

impl AnnotationSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ty: TypeName::new(name),
            arguments: Vec::new(),
            use_site: None,
        }
    }

    pub fn argument(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.arguments.push(AnnotationArgument {
            name: Some(name.into()),
            value,
        });
        self
    }

    pub fn positional(mut self, value: AnnotationValue) -> Self {
        self.arguments.push(AnnotationArgument { name: None, value });
        self
    }

    pub fn use_site(mut self, site: UseSite) -> Self {
        self.use_site = Some(site);
        self
    }

    /// `Name(args)` without the `@` or use-site.
    fn body(&self, writer: &CodeWriter) -> String {
        let mut code = writer.type_name(&self.ty);
        if !self.arguments.is_empty() {
            let arguments: Vec<String> = self
                .arguments
                .iter()
                .map(|arg| match &arg.name {
                    Some(name) => format!(
                        "{} = {}",
                        names::escape_identifier(name),
                        arg.value.to_code(writer)
                    ),
                    None => arg.value.to_code(writer),
                })
                .collect();
            code.push('(');
            code.push_str(&arguments.join(", "));
            code.push(')');
        }
        code
    }

    pub fn to_code(&self, writer: &CodeWriter) -> String {
        match self.use_site {
            Some(site) => format!("@{site}:{}", self.body(writer)),
            None => format!("@{}", self.body(writer)),
        }
    }
}

impl Renderable for AnnotationSpec {
    /// Declaration annotations go on their own line.
    fn render(&self, writer: &mut CodeWriter) {
        let code = self.to_code(writer);
        writer.line(&code);
    }
}
