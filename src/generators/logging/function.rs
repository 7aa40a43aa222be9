use declsynth_syntax::{
    Argument, Expr, FunSpec, Modifier, ParameterSpec, Stmt, StringTemplate, TypeName,
};

use super::WrapperScope;
use crate::error::EligibilityError;
use crate::generators::naming::{DELEGATE_FIELD, RESULT_LOCAL, fresh_name};
use crate::markers;
use crate::model::{FunctionMember, TypeRef};

/// Modifiers an override may repeat.
const CARRIED_MODIFIERS: [Modifier; 3] = [Modifier::Suspend, Modifier::Operator, Modifier::Infix];

/// The forwarding override of `function`, and a warning when its return type
/// could not be resolved and the call was degraded to a void call.
pub(super) fn override_function(
    function: &FunctionMember,
    scope: &WrapperScope<'_>,
) -> Result<(FunSpec, Option<String>), EligibilityError> {
    let mut fun = FunSpec::new(function.name.clone())
        .modifier(Modifier::Override)
        .type_variables(function.type_parameters.iter().map(markers::to_type_variable));
    fun.kdoc = function.doc.clone();
    fun.annotations = scope.carried_annotations(&function.annotations);
    for modifier in CARRIED_MODIFIERS {
        if function.modifiers.contains(&modifier) {
            fun = fun.modifier(modifier);
        }
    }

    for param in &function.parameters {
        let ty = param
            .ty
            .resolved()
            .ok_or_else(|| EligibilityError::UnresolvedType {
                name: scope.owner.to_string(),
                member: format!("{}.{}", function.name, param.name),
                text: param.ty.to_string(),
            })?;
        fun = fun.parameter(ParameterSpec::new(param.name.clone(), ty.clone()).vararg(param.vararg));
    }

    let mut warning = None;
    let returns = match &function.return_type {
        Some(TypeRef::Resolved(ty)) if !ty.is_unit() => Some(ty.clone()),
        Some(TypeRef::Unresolved(text)) => {
            warning = Some(format!(
                "{}: return type of `{}` could not be resolved (`{text}`), forwarding without a result",
                scope.owner, function.name
            ));
            None
        }
        _ => None,
    };

    let shadowed = function
        .parameters
        .iter()
        .any(|param| param.name == DELEGATE_FIELD);
    let receiver = if shadowed {
        Expr::This.member(DELEGATE_FIELD)
    } else {
        Expr::name(DELEGATE_FIELD)
    };
    let call = receiver.member(function.name.clone()).call_generic(
        function
            .type_parameters
            .iter()
            .map(|param| TypeName::new(param.name.clone()))
            .collect(),
        function.parameters.iter().map(|param| {
            if param.vararg {
                Argument::spread(Expr::name(param.name.clone()))
            } else {
                Argument::positional(Expr::name(param.name.clone()))
            }
        }),
    );
    let result = fresh_name(RESULT_LOCAL, |name| {
        function.parameters.iter().any(|param| param.name == name)
    });

    let mut message = StringTemplate::new().literal(format!("{}: {}(", scope.tag, function.name));
    for (idx, param) in function.parameters.iter().enumerate() {
        if idx > 0 {
            message = message.literal(", ");
        }
        let value = if param.vararg {
            Expr::name(param.name.clone()).member("toList").call([])
        } else {
            Expr::name(param.name.clone())
        };
        message = message.literal(format!("{}=", param.name)).interpolate(value);
    }
    message = message.literal(")");

    match returns {
        Some(ty) => {
            fun = fun.returns(ty).statement(Stmt::Val {
                name: result.clone(),
                value: call,
            });
            if scope.should_log(&function.annotations) {
                message = message.literal("->").interpolate(Expr::name(result.clone()));
                fun = fun.statement(scope.log(message));
            }
            fun = fun.statement(Stmt::Return(Some(Expr::name(result))));
        }
        None => {
            fun = fun.statement(Stmt::Expr(call));
            if scope.should_log(&function.annotations) {
                fun = fun.statement(scope.log(message));
            }
        }
    }

    Ok((fun, warning))
}
