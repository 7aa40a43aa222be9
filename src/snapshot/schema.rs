//! Snapshot schema type definitions
//!
//! The serde types a declaration snapshot is parsed into. Types are kept as
//! source text here and parsed during conversion into the model.

use serde::{Deserialize, Serialize};

use crate::model::{DeclarationKind, FieldBinding, Visibility};

/// Root of a snapshot document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotSchema {
    #[serde(default)]
    pub declarations: Vec<DeclarationSchema>,
}

/// One `[[declarations]]` entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationSchema {
    /// Qualified name
    pub name: String,
    pub namespace: Option<String>,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterSchema>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSchema>,
    pub doc: Option<String>,
    /// Absent: no primary constructor. `[]`: an empty one.
    pub constructor: Option<Vec<ConstructorParameterSchema>>,
    #[serde(default)]
    pub functions: Vec<FunctionSchema>,
    #[serde(default)]
    pub properties: Vec<PropertySchema>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TypeParameterSchema {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationSchema {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentSchema>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentSchema {
    pub name: Option<String>,
    pub value: ValueSchema,
}

/// An annotation argument value.
///
/// `{ raw = "Level.HIGH" }` is written verbatim; `{ name = "...", arguments = [...] }`
/// is a nested annotation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ValueSchema {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<ValueSchema>),
    Raw { raw: String },
    Nested(AnnotationSchema),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorParameterSchema {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub binding: FieldBinding,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub vararg: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSchema {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub vararg: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionSchema {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterSchema>,
    /// Absent: no value.
    pub returns: Option<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterSchema>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSchema>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySchema {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub annotations: Vec<AnnotationSchema>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub doc: Option<String>,
}
