//! # Declaration Model
//!
//! An immutable, normalized view of the type declarations handed over by the
//! host for one synthesis round. Generators read it and never mutate it.
//!
//! ## Shape
//!
//! - [`TypeDeclaration`]: one class, interface, object or enum, with its
//!   primary constructor, declared functions and declared properties
//! - [`TypeRef`]: a declared type, either resolved to a [`TypeName`] or kept
//!   as the host's unresolved text
//! - [`Annotation`]: a marker or any other annotation, with ordered arguments
//!
//! Declarations are usually built by the [snapshot loader](crate::snapshot),
//! but tests construct them directly with [`TypeDeclaration::builder`].
//!
//! [`TypeName`]: declsynth_syntax::TypeName

mod annotation;
mod declaration;
mod member;
mod name;
mod type_ref;

pub use annotation::Annotation;
pub use declaration::{DeclarationKind, TypeDeclaration, TypeParameter, Visibility};
pub use member::{ConstructorParameter, FieldBinding, FunctionMember, Parameter, PropertyMember};
pub use name::QualifiedName;
pub use type_ref::{TypeRef, UNRESOLVED_TYPE};
