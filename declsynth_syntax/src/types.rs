//! Type names and type variables.
//!
//! A [`TypeName`] is kept exactly as the declaration wrote it: a dotted name
//! (qualified or not), its type arguments and its nullability. The printer may
//! shorten a qualified name to its simple name when the file imports it.

use std::fmt;

use crate::error::TypeParseError;
use crate::names;

/// Declaration-site or use-site variance of a type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum Variance {
    #[strum(serialize = "in")]
    In,
    #[strum(serialize = "out")]
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArg {
    /// `*`
    Star,
    Type {
        variance: Option<Variance>,
        ty: TypeName,
    },
}

impl From<TypeName> for TypeArg {
    fn from(ty: TypeName) -> Self {
        TypeArg::Type { variance: None, ty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub name: String,
    pub arguments: Vec<TypeArg>,
    pub nullable: bool,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Apply type arguments, e.g. `ApiService` + `[T]` -> `ApiService<T>`.
    pub fn parameterized_by<I, A>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<TypeArg>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }

    /// `Unit` carries no value; functions returning it are treated as void.
    pub fn is_unit(&self) -> bool {
        !self.nullable
            && self.arguments.is_empty()
            && matches!(self.name.as_str(), "Unit" | "kotlin.Unit")
    }

    /// Parse a type in source form.
    ///
    /// Accepts dotted names, backticked identifiers, type arguments with
    /// `in`/`out` variance or `*`, and a trailing `?`.
    ///
    /// ```
    /// use declsynth_syntax::{TypeArg, TypeName};
    ///
    /// let ty = TypeName::parse("Map<String, List<out Number>>?").unwrap();
    /// assert_eq!(ty.name, "Map");
    /// assert!(ty.nullable);
    /// assert_eq!(ty.arguments.len(), 2);
    /// assert_eq!(ty.to_string(), "Map<String, List<out Number>>?");
    /// ```
    pub fn parse(text: &str) -> Result<Self, TypeParseError> {
        let mut parser = Parser::new(text);
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos < parser.chars.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(ty)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&names::escape_dotted(&self.name))?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (idx, arg) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Star => f.write_str("*"),
            TypeArg::Type { variance: Some(v), ty } => write!(f, "{v} {ty}"),
            TypeArg::Type { variance: None, ty } => write!(f, "{ty}"),
        }
    }
}

/// A type parameter in declaration position: name plus upper bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    pub name: String,
    pub bounds: Vec<TypeName>,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded_by(mut self, bounds: impl IntoIterator<Item = TypeName>) -> Self {
        self.bounds = bounds.into_iter().collect();
        self
    }

    /// The variable used as a type argument (`T`).
    pub fn as_type(&self) -> TypeName {
        TypeName::new(self.name.clone())
    }

    /// More than one bound cannot be written inline and needs a `where` clause.
    pub fn needs_where_clause(&self) -> bool {
        self.bounds.len() > 1
    }
}

struct Parser<'a> {
    text: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, message: &str) -> TypeParseError {
        TypeParseError::new(self.text, self.pos, message)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_type(&mut self) -> Result<TypeName, TypeParseError> {
        self.skip_whitespace();
        let name = self.parse_dotted_name()?;
        let mut arguments = Vec::new();
        if self.eat('<') {
            loop {
                arguments.push(self.parse_argument()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected `,` or `>`"));
            }
        }
        let nullable = self.eat('?');
        Ok(TypeName {
            name,
            arguments,
            nullable,
        })
    }

    fn parse_argument(&mut self) -> Result<TypeArg, TypeParseError> {
        if self.eat('*') {
            return Ok(TypeArg::Star);
        }
        self.skip_whitespace();
        let start = self.pos;
        let variance = match self.parse_identifier()?.as_str() {
            "in" if self.followed_by_type() => Some(Variance::In),
            "out" if self.followed_by_type() => Some(Variance::Out),
            _ => {
                self.pos = start;
                None
            }
        };
        let ty = self.parse_type()?;
        Ok(TypeArg::Type { variance, ty })
    }

    /// After `in`/`out`: whitespace then the start of another identifier.
    fn followed_by_type(&self) -> bool {
        let mut idx = self.pos;
        let mut saw_space = false;
        while self.chars.get(idx).is_some_and(|c| c.is_whitespace()) {
            saw_space = true;
            idx += 1;
        }
        saw_space
            && self
                .chars
                .get(idx)
                .is_some_and(|c| *c == '`' || *c == '_' || c.is_alphabetic())
    }

    fn parse_dotted_name(&mut self) -> Result<String, TypeParseError> {
        let mut name = self.parse_identifier()?;
        while self.peek() == Some('.') {
            self.pos += 1;
            name.push('.');
            name.push_str(&self.parse_identifier()?);
        }
        Ok(name)
    }

    fn parse_identifier(&mut self) -> Result<String, TypeParseError> {
        match self.peek() {
            Some('`') => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != '`') {
                    self.pos += 1;
                }
                if self.peek() != Some('`') {
                    return Err(self.error("unterminated backticked identifier"));
                }
                let ident: String = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                if ident.is_empty() {
                    return Err(self.error("empty backticked identifier"));
                }
                Ok(ident)
            }
            Some(c) if c == '_' || c.is_alphabetic() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c == '_' || c.is_alphanumeric()) {
                    self.pos += 1;
                }
                Ok(self.chars[start..self.pos].iter().collect())
            }
            _ => Err(self.error("expected identifier")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_nullable() {
        assert_eq!(TypeName::parse("Int").unwrap(), TypeName::new("Int"));
        let ty = TypeName::parse("Boolean?").unwrap();
        assert!(ty.nullable);
        assert_eq!(ty.name, "Boolean");
    }

    #[test]
    fn test_parse_nested_arguments() {
        let ty = TypeName::parse("kotlin.collections.Map<String, List<Int?>>").unwrap();
        assert_eq!(ty.name, "kotlin.collections.Map");
        assert_eq!(ty.simple_name(), "Map");
        assert_eq!(
            ty.arguments[1],
            TypeArg::from(TypeName::new("List").parameterized_by([TypeName::new("Int").with_nullable(true)]))
        );
    }

    #[test]
    fn test_parse_variance_and_star() {
        let ty = TypeName::parse("Pair<out T, *>").unwrap();
        assert_eq!(
            ty.arguments,
            vec![
                TypeArg::Type {
                    variance: Some(Variance::Out),
                    ty: TypeName::new("T")
                },
                TypeArg::Star
            ]
        );
    }

    #[test]
    fn test_type_named_like_variance_keyword() {
        // `out` directly followed by `>` is a type, not a projection
        let ty = TypeName::parse("Box<out>").unwrap();
        assert_eq!(ty.arguments, vec![TypeArg::from(TypeName::new("out"))]);
    }

    #[test]
    fn test_parse_backticked_identifier() {
        let ty = TypeName::parse("com.`in`.Thing").unwrap();
        assert_eq!(ty.name, "com.in.Thing");
        assert_eq!(ty.to_string(), "com.`in`.Thing");
    }

    #[test]
    fn test_parse_errors() {
        assert!(TypeName::parse("").is_err());
        assert!(TypeName::parse("List<Int").is_err());
        assert!(TypeName::parse("(Int) -> Unit").is_err());
        let err = TypeName::parse("Int>").unwrap_err();
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_is_unit() {
        assert!(TypeName::new("Unit").is_unit());
        assert!(TypeName::new("kotlin.Unit").is_unit());
        assert!(!TypeName::new("Unit").with_nullable(true).is_unit());
        assert!(!TypeName::new("Int").is_unit());
    }

    #[test]
    fn test_display_round_trips_source_form() {
        for text in ["Int", "List<String>?", "Map<K, out V>", "Array<*>"] {
            assert_eq!(TypeName::parse(text).unwrap().to_string(), text);
        }
    }
}
