use std::collections::BTreeSet;

use declsynth_syntax::{Modifier, TypeName};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use typed_builder::TypedBuilder;

use crate::model::annotation::Annotation;
use crate::model::member::{ConstructorParameter, FunctionMember, PropertyMember};
use crate::model::name::QualifiedName;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Interface,
    Object,
    Enum,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Readable from a top-level function in the same module.
    pub fn is_visible_outside(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }
}

/// A declared type parameter. Empty `bounds` means unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<TypeName>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: TypeName) -> Self {
        self.bounds.push(bound);
        self
    }
}

/// One type declaration.
///
/// ```
/// use declsynth::model::{ConstructorParameter, DeclarationKind, TypeDeclaration};
/// use declsynth_syntax::TypeName;
///
/// let user = TypeDeclaration::builder()
///     .qualified_name("com.example.User")
///     .kind(DeclarationKind::Class)
///     .primary_constructor(vec![
///         ConstructorParameter::new("age", TypeName::new("Int")).val(),
///     ])
///     .build();
///
/// assert_eq!(user.namespace(), "com.example");
/// assert_eq!(user.type_path(), "User");
/// ```
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct TypeDeclaration {
    #[builder(setter(into))]
    pub qualified_name: QualifiedName,

    /// Package of the declaration. Defaults to everything before the last
    /// segment of the qualified name, which is wrong for nested types.
    #[builder(default, setter(strip_option, into))]
    pub namespace: Option<String>,

    pub kind: DeclarationKind,

    #[builder(default)]
    pub visibility: Visibility,

    #[builder(default)]
    pub modifiers: BTreeSet<Modifier>,

    #[builder(default)]
    pub type_parameters: Vec<TypeParameter>,

    #[builder(default)]
    pub annotations: Vec<Annotation>,

    #[builder(default, setter(strip_option, into))]
    pub doc: Option<String>,

    /// `None`: no primary constructor. `Some(vec![])`: an empty one.
    #[builder(default, setter(strip_option))]
    pub primary_constructor: Option<Vec<ConstructorParameter>>,

    #[builder(default)]
    pub functions: Vec<FunctionMember>,

    #[builder(default)]
    pub properties: Vec<PropertyMember>,
}

impl TypeDeclaration {
    pub fn namespace(&self) -> &str {
        match &self.namespace {
            Some(namespace) => namespace,
            None => declsynth_syntax::names::package_of(self.qualified_name.as_str()),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.qualified_name.simple_name()
    }

    /// Name as seen from inside the namespace, e.g. `Outer.Inner`.
    pub fn type_path(&self) -> &str {
        self.qualified_name.relative_to(self.namespace())
    }

    /// The declared type applied to its own type parameters: `ApiService<T>`.
    pub fn declared_type(&self) -> TypeName {
        TypeName::new(self.type_path()).parameterized_by(
            self.type_parameters
                .iter()
                .map(|param| TypeName::new(param.name.clone())),
        )
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    pub fn is_abstract_class(&self) -> bool {
        self.kind == DeclarationKind::Class
            && (self.has_modifier(Modifier::Abstract) || self.has_modifier(Modifier::Sealed))
    }

    /// How diagnostics refer to the kind: `interface`, `abstract class`, ...
    pub fn kind_label(&self) -> String {
        match self.kind {
            DeclarationKind::Class if self.has_modifier(Modifier::Data) => "data class".to_string(),
            DeclarationKind::Class if self.has_modifier(Modifier::Sealed) => {
                "sealed class".to_string()
            }
            DeclarationKind::Class if self.has_modifier(Modifier::Abstract) => {
                "abstract class".to_string()
            }
            kind => kind.to_string(),
        }
    }

    /// First annotation matching `marker`.
    pub fn annotation(&self, marker: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|annotation| annotation.is(marker))
    }

    pub fn is_marked(&self, marker: &str) -> bool {
        self.annotation(marker).is_some()
    }
}
