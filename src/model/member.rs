use std::collections::BTreeSet;

use declsynth_syntax::Modifier;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::annotation::Annotation;
use crate::model::declaration::{TypeParameter, Visibility};
use crate::model::type_ref::TypeRef;

/// Whether a primary constructor parameter also declares a field.
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
pub enum FieldBinding {
    /// Plain parameter, no field.
    #[default]
    Plain,
    Val,
    Var,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorParameter {
    pub name: String,
    pub ty: TypeRef,
    pub binding: FieldBinding,
    /// Visibility of the declared field; ignored without a binding.
    pub field_visibility: Visibility,
    pub vararg: bool,
}

impl ConstructorParameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            binding: FieldBinding::Plain,
            field_visibility: Visibility::Public,
            vararg: false,
        }
    }

    pub fn val(mut self) -> Self {
        self.binding = FieldBinding::Val;
        self
    }

    pub fn var(mut self) -> Self {
        self.binding = FieldBinding::Var;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.field_visibility = visibility;
        self
    }

    pub fn vararg(mut self) -> Self {
        self.vararg = true;
        self
    }

    pub fn is_mutable(&self) -> bool {
        self.binding == FieldBinding::Var
    }

    /// A field that code outside the class can read.
    pub fn is_exposed(&self) -> bool {
        self.binding != FieldBinding::Plain && self.field_visibility.is_visible_outside()
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    pub vararg: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            vararg: false,
        }
    }

    pub fn vararg(mut self) -> Self {
        self.vararg = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionMember {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// `None` when the function returns no value.
    pub return_type: Option<TypeRef>,
    pub type_parameters: Vec<TypeParameter>,
    pub annotations: Vec<Annotation>,
    pub modifiers: BTreeSet<Modifier>,
    pub doc: Option<String>,
}

impl FunctionMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            type_parameters: Vec::new(),
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            doc: None,
        }
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    pub name: String,
    pub ty: TypeRef,
    pub mutable: bool,
    pub annotations: Vec<Annotation>,
    pub modifiers: BTreeSet<Modifier>,
    pub doc: Option<String>,
}

impl PropertyMember {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>, mutable: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            mutable,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            doc: None,
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }
}

#[cfg(test)]
mod tests {
    use declsynth_syntax::TypeName;

    use super::*;

    #[test]
    fn test_exposure_depends_on_binding_and_visibility() {
        let int = TypeName::new("Int");
        assert!(!ConstructorParameter::new("a", int.clone()).is_exposed());
        assert!(ConstructorParameter::new("a", int.clone()).val().is_exposed());
        assert!(
            ConstructorParameter::new("a", int.clone())
                .var()
                .visibility(Visibility::Internal)
                .is_exposed()
        );
        assert!(
            !ConstructorParameter::new("a", int.clone())
                .val()
                .visibility(Visibility::Private)
                .is_exposed()
        );
        assert!(
            !ConstructorParameter::new("a", int)
                .val()
                .visibility(Visibility::Protected)
                .is_exposed()
        );
    }
}
