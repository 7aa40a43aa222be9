//! Expressions and statements used in generated bodies.

use crate::names;
use crate::types::TypeName;
use crate::writer::{CodeWriter, Renderable};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare identifier, escaped on output.
    Name(String),
    /// A type used in expression position, e.g. a constructor callee.
    Type(TypeName),
    This,
    Member {
        receiver: Box<Expr>,
        name: String,
        /// `?.` instead of `.`
        safe: bool,
    },
    Call {
        callee: Box<Expr>,
        type_arguments: Vec<TypeName>,
        arguments: Vec<Argument>,
    },
    Template(StringTemplate),
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn member(self, name: impl Into<String>) -> Self {
        Expr::Member {
            receiver: Box::new(self),
            name: name.into(),
            safe: false,
        }
    }

    pub fn safe_member(self, name: impl Into<String>) -> Self {
        Expr::Member {
            receiver: Box::new(self),
            name: name.into(),
            safe: true,
        }
    }

    pub fn call(self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.call_generic(Vec::new(), arguments)
    }

    pub fn call_generic(
        self,
        type_arguments: Vec<TypeName>,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        Expr::Call {
            callee: Box::new(self),
            type_arguments,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Source text of this expression, on one line.
    pub fn to_code(&self, writer: &CodeWriter) -> String {
        match self {
            Expr::Name(name) => names::escape_identifier(name).into_owned(),
            Expr::Type(ty) => writer.type_name(ty),
            Expr::This => "this".to_string(),
            Expr::Member {
                receiver,
                name,
                safe,
            } => format!(
                "{}{}{}",
                receiver.to_code(writer),
                if *safe { "?." } else { "." },
                names::escape_identifier(name)
            ),
            Expr::Call {
                callee,
                type_arguments,
                arguments,
            } => {
                let mut code = callee.to_code(writer);
                if !type_arguments.is_empty() {
                    let types: Vec<String> =
                        type_arguments.iter().map(|ty| writer.type_name(ty)).collect();
                    code.push('<');
                    code.push_str(&types.join(", "));
                    code.push('>');
                }
                let arguments: Vec<String> =
                    arguments.iter().map(|arg| arg.to_code(writer)).collect();
                code.push('(');
                code.push_str(&arguments.join(", "));
                code.push(')');
                code
            }
            Expr::Template(template) => template.to_code(writer),
        }
    }
}

impl From<StringTemplate> for Expr {
    fn from(template: StringTemplate) -> Self {
        Expr::Template(template)
    }
}

impl Renderable for Expr {
    fn render(&self, writer: &mut CodeWriter) {
        let code = self.to_code(writer);
        writer.write(&code);
    }
}

/// A call argument: optionally named, optionally spread with `*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<String>,
    pub spread: bool,
    pub value: Expr,
}

impl Argument {
    pub fn positional(value: Expr) -> Self {
        Self {
            name: None,
            spread: false,
            value,
        }
    }

    pub fn spread(value: Expr) -> Self {
        Self {
            name: None,
            spread: true,
            value,
        }
    }

    pub fn named(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: Some(name.into()),
            spread: false,
            value,
        }
    }

    fn to_code(&self, writer: &CodeWriter) -> String {
        let mut code = String::new();
        if let Some(name) = &self.name {
            code.push_str(&names::escape_identifier(name));
            code.push_str(" = ");
        }
        if self.spread {
            code.push('*');
        }
        code.push_str(&self.value.to_code(writer));
        code
    }
}

impl From<Expr> for Argument {
    fn from(value: Expr) -> Self {
        Argument::positional(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Interpolation(Expr),
}

/// A string literal with `${...}` interpolations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringTemplate {
    pub parts: Vec<TemplatePart>,
}

impl StringTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text. Adjacent literals are merged.
    pub fn literal(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if text.is_empty() {
            return self;
        }
        match self.parts.last_mut() {
            Some(TemplatePart::Literal(last)) => last.push_str(text),
            _ => self.parts.push(TemplatePart::Literal(text.to_string())),
        }
        self
    }

    pub fn interpolate(mut self, expr: Expr) -> Self {
        self.parts.push(TemplatePart::Interpolation(expr));
        self
    }

    pub fn to_code(&self, writer: &CodeWriter) -> String {
        let mut code = String::from("\"");
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => escape_literal_into(text, &mut code),
                TemplatePart::Interpolation(expr) => {
                    code.push_str("${");
                    code.push_str(&expr.to_code(writer));
                    code.push('}');
                }
            }
        }
        code.push('"');
        code
    }
}

/// Escape text for a double-quoted literal. `$` is escaped so it can never
/// start an interpolation.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_literal_into(text, &mut out);
    out
}

fn escape_literal_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Val { name: String, value: Expr },
    Expr(Expr),
    Assign { target: Expr, value: Expr },
    Return(Option<Expr>),
}

impl Renderable for Stmt {
    fn render(&self, writer: &mut CodeWriter) {
        let code = match self {
            Stmt::Val { name, value } => format!(
                "val {} = {}",
                names::escape_identifier(name),
                value.to_code(writer)
            ),
            Stmt::Expr(expr) => expr.to_code(writer),
            Stmt::Assign { target, value } => {
                format!("{} = {}", target.to_code(writer), value.to_code(writer))
            }
            Stmt::Return(Some(value)) => format!("return {}", value.to_code(writer)),
            Stmt::Return(None) => "return".to_string(),
        };
        writer.line(&code);
    }
}
