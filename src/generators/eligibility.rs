//! Checks that decide whether a marked declaration can produce output.

use declsynth_syntax::{Modifier, TypeName};

use crate::error::EligibilityError;
use crate::markers::{self, Directive, MarkerSet};
use crate::model::{ConstructorParameter, DeclarationKind, TypeDeclaration, TypeRef};

pub fn check_not_private(decl: &TypeDeclaration) -> Result<(), EligibilityError> {
    if decl.is_private() {
        return Err(EligibilityError::PrivateDeclaration {
            name: decl.qualified_name.to_string(),
            kind: decl.kind.to_string(),
        });
    }
    Ok(())
}

/// The wrapper target must be an interface, or an abstract class whose
/// primary constructor (if any) takes no parameters.
pub fn check_wrappable(decl: &TypeDeclaration) -> Result<(), EligibilityError> {
    check_not_private(decl)?;
    match decl.kind {
        DeclarationKind::Interface => Ok(()),
        DeclarationKind::Class
            if decl.has_modifier(Modifier::Abstract) && !decl.has_modifier(Modifier::Sealed) =>
        {
            match decl.primary_constructor.as_deref() {
                None | Some([]) => Ok(()),
                Some(_) => Err(EligibilityError::AbstractWithConstructor {
                    name: decl.qualified_name.to_string(),
                }),
            }
        }
        _ => Err(unsupported(decl, Directive::Loggable)),
    }
}

/// A constructor parameter together with its resolved type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParameter<'a> {
    pub param: &'a ConstructorParameter,
    pub ty: &'a TypeName,
}

/// Shared by `copy` and `toNiceString`: a concrete, non-private class that is
/// not value-semantic, with a non-empty primary constructor whose parameter
/// types all resolved. Parameters come back in declaration order.
pub fn structural_constructor(
    decl: &TypeDeclaration,
    directive: Directive,
) -> Result<Vec<ResolvedParameter<'_>>, EligibilityError> {
    check_not_private(decl)?;
    if decl.kind != DeclarationKind::Class || decl.is_abstract_class() {
        return Err(unsupported(decl, directive));
    }
    if markers::is_value_semantic(decl) {
        return Err(EligibilityError::ValueSemantic {
            name: decl.qualified_name.to_string(),
            directive: directive.to_string(),
        });
    }
    let params = decl.primary_constructor.as_deref().ok_or_else(|| {
        EligibilityError::MissingPrimaryConstructor {
            name: decl.qualified_name.to_string(),
        }
    })?;
    if params.is_empty() {
        return Err(EligibilityError::EmptyPrimaryConstructor {
            name: decl.qualified_name.to_string(),
        });
    }
    params
        .iter()
        .map(|param| match &param.ty {
            TypeRef::Resolved(ty) => Ok(ResolvedParameter { param, ty }),
            TypeRef::Unresolved(text) => Err(EligibilityError::UnresolvedType {
                name: decl.qualified_name.to_string(),
                member: param.name.clone(),
                text: text.clone(),
            }),
        })
        .collect()
}

/// Constructor parameters split into readable fields and the rest.
#[allow(clippy::type_complexity)]
pub fn readable_fields(
    decl: &TypeDeclaration,
) -> Result<(Vec<ResolvedParameter<'_>>, Vec<ResolvedParameter<'_>>), EligibilityError> {
    let params = structural_constructor(decl, Directive::ToNiceString)?;
    let (readable, hidden): (Vec<_>, Vec<_>) =
        params.into_iter().partition(|resolved| resolved.param.is_exposed());
    if readable.is_empty() {
        return Err(EligibilityError::NoReadableFields {
            name: decl.qualified_name.to_string(),
        });
    }
    Ok((readable, hidden))
}

/// True when a `toNiceString` is generated for `decl` in this round.
pub fn is_renderable(decl: &TypeDeclaration, markers: &MarkerSet) -> bool {
    decl.is_marked(&markers.qualified(Directive::ToNiceString)) && readable_fields(decl).is_ok()
}

fn unsupported(decl: &TypeDeclaration, directive: Directive) -> EligibilityError {
    EligibilityError::UnsupportedKind {
        name: decl.qualified_name.to_string(),
        kind: decl.kind_label(),
        directive: directive.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotation, Visibility};

    fn class(name: &str) -> TypeDeclaration {
        TypeDeclaration::builder()
            .qualified_name(name)
            .kind(DeclarationKind::Class)
            .build()
    }

    #[test]
    fn test_private_declaration_is_rejected_first() {
        let mut decl = class("a.Secret");
        decl.visibility = Visibility::Private;
        let err = structural_constructor(&decl, Directive::Copy).unwrap_err();
        assert_eq!(err.to_string(), "a.Secret class cannot be private");

        let mut api = class("a.Api");
        api.kind = DeclarationKind::Interface;
        api.visibility = Visibility::Private;
        assert_eq!(
            check_wrappable(&api).unwrap_err().to_string(),
            "a.Api interface cannot be private"
        );
    }

    #[test]
    fn test_constructor_requirements() {
        let decl = class("a.NoCtor");
        assert!(matches!(
            structural_constructor(&decl, Directive::Copy),
            Err(EligibilityError::MissingPrimaryConstructor { .. })
        ));

        let mut empty = class("a.Empty");
        empty.primary_constructor = Some(Vec::new());
        assert!(matches!(
            structural_constructor(&empty, Directive::Copy),
            Err(EligibilityError::EmptyPrimaryConstructor { .. })
        ));

        let mut broken = class("a.Broken");
        broken.primary_constructor = Some(vec![ConstructorParameter::new(
            "x",
            TypeRef::Unresolved("<ERROR TYPE>".into()),
        )]);
        assert!(matches!(
            structural_constructor(&broken, Directive::Copy),
            Err(EligibilityError::UnresolvedType { member, .. }) if member == "x"
        ));
    }

    #[test]
    fn test_constructor_comes_back_resolved_and_complete() {
        let mut point = class("a.Point3");
        point.primary_constructor = Some(vec![
            ConstructorParameter::new("x", TypeName::new("Int")).val(),
            ConstructorParameter::new("y", TypeName::parse("List<Int>?").unwrap()),
            ConstructorParameter::new("z", TypeName::new("Long")).var(),
        ]);
        let resolved = structural_constructor(&point, Directive::Copy).unwrap();
        let names: Vec<&str> = resolved.iter().map(|r| r.param.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
        assert!(resolved[1].ty.nullable);

        // One unresolved parameter rejects the whole constructor, wherever it sits.
        point.primary_constructor.as_mut().unwrap().push(ConstructorParameter::new(
            "w",
            TypeRef::Unresolved("<ERROR TYPE>".into()),
        ));
        assert!(matches!(
            structural_constructor(&point, Directive::Copy),
            Err(EligibilityError::UnresolvedType { member, .. }) if member == "w"
        ));
    }

    #[test]
    fn test_kinds() {
        let mut data = class("a.Point");
        data.modifiers.insert(Modifier::Data);
        let err = structural_constructor(&data, Directive::Copy).unwrap_err();
        assert!(err.is_warning());

        let mut object = class("a.Singleton");
        object.kind = DeclarationKind::Object;
        assert_eq!(
            structural_constructor(&object, Directive::ToNiceString)
                .unwrap_err()
                .to_string(),
            "@ToNiceString cannot be applied to object a.Singleton"
        );

        let mut base = class("a.Base");
        base.modifiers.insert(Modifier::Abstract);
        assert!(check_wrappable(&base).is_ok());
        base.primary_constructor = Some(vec![ConstructorParameter::new("x", TypeName::new("Int"))]);
        assert!(matches!(
            check_wrappable(&base),
            Err(EligibilityError::AbstractWithConstructor { .. })
        ));
        assert!(matches!(
            check_wrappable(&class("a.Concrete")),
            Err(EligibilityError::UnsupportedKind { .. })
        ));
    }

    #[test]
    fn test_renderable_needs_marker_and_readable_field() {
        let markers = MarkerSet::new("io.declsynth.annotations");
        let mut user = class("a.User");
        user.primary_constructor = Some(vec![ConstructorParameter::new("age", TypeName::new("Int"))]);
        user.annotations.push(Annotation::new("ToNiceString"));
        assert!(!is_renderable(&user, &markers));

        user.primary_constructor = Some(vec![
            ConstructorParameter::new("age", TypeName::new("Int")).val(),
        ]);
        assert!(is_renderable(&user, &markers));

        user.annotations.clear();
        assert!(!is_renderable(&user, &markers));
    }
}
