//! # declsynth_syntax
//!
//! Structured syntax tree for the Kotlin source produced by `declsynth`, and the
//! single printer that turns it into text.
//!
//! Generators never concatenate source text themselves. They build nodes
//! ([`FileSpec`], [`ClassSpec`], [`FunSpec`], [`PropertySpec`], [`ParameterSpec`],
//! [`Expr`], [`Stmt`]) and hand them to [`CodeWriter`], which owns indentation,
//! keyword escaping, import shortening and string-template escaping.
//!
//! ```
//! use declsynth_syntax::{Expr, FunSpec, Renderable, Stmt, StringTemplate, TypeName};
//!
//! let fun = FunSpec::new("greeting")
//!     .returns(TypeName::new("String"))
//!     .statement(Stmt::Return(Some(Expr::Template(
//!         StringTemplate::new().literal("Hello \"").interpolate(Expr::name("name")).literal("\""),
//!     ))));
//!
//! assert_eq!(
//!     fun.to_source(),
//!     "fun greeting(): String {\n    return \"Hello \\\"${name}\\\"\"\n}\n"
//! );
//! ```

pub mod annotation;
pub mod code;
pub mod error;
pub mod names;
pub mod spec;
pub mod types;
pub mod writer;

pub use annotation::{AnnotationArgument, AnnotationSpec, AnnotationValue, UseSite};
pub use code::{Argument, Expr, Stmt, StringTemplate, TemplatePart};
pub use error::TypeParseError;
pub use spec::{
    Accessor, ClassSpec, FileSpec, FunSpec, Modifier, ParameterSpec, PropertyBinding,
    PropertySpec, Supertype, TopLevel,
};
pub use types::{TypeArg, TypeName, TypeVariable, Variance};
pub use writer::{CodeWriter, Indent, Renderable};
