use declsynth_syntax::{Accessor, Expr, Modifier, PropertySpec, Stmt, StringTemplate};

use super::WrapperScope;
use crate::error::EligibilityError;
use crate::generators::naming::{DELEGATE_FIELD, RESULT_LOCAL};
use crate::model::PropertyMember;

/// An override with the same type and mutability that reads and writes
/// through the delegate.
pub(super) fn override_property(
    property: &PropertyMember,
    scope: &WrapperScope<'_>,
) -> Result<PropertySpec, EligibilityError> {
    let ty = property
        .ty
        .resolved()
        .ok_or_else(|| EligibilityError::UnresolvedType {
            name: scope.owner.to_string(),
            member: property.name.clone(),
            text: property.ty.to_string(),
        })?;
    let logged = scope.should_log(&property.annotations);
    let target = Expr::name(DELEGATE_FIELD).member(property.name.clone());

    let mut getter = vec![Stmt::Val {
        name: RESULT_LOCAL.to_string(),
        value: target.clone(),
    }];
    if logged {
        getter.push(scope.log(
            StringTemplate::new()
                .literal(format!("{}: get {}=", scope.tag, property.name))
                .interpolate(Expr::name(RESULT_LOCAL)),
        ));
    }
    getter.push(Stmt::Return(Some(Expr::name(RESULT_LOCAL))));

    let mut spec = PropertySpec::new(property.name.clone(), ty.clone(), property.mutable)
        .modifier(Modifier::Override)
        .getter(Accessor::new(getter));
    spec.kdoc = property.doc.clone();
    spec.annotations = scope.carried_annotations(&property.annotations);

    if property.mutable {
        let mut setter = vec![Stmt::Assign {
            target,
            value: Expr::name("value"),
        }];
        if logged {
            setter.push(scope.log(
                StringTemplate::new()
                    .literal(format!("{}: set {}=", scope.tag, property.name))
                    .interpolate(Expr::name("value")),
            ));
        }
        spec = spec.setter(Accessor::new(setter));
    }

    Ok(spec)
}
