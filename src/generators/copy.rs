//! `copy` extension functions for classes that are not data classes.
//!
//! ```kotlin
//! fun User.copy(age: Int = this.age, name: String = this.name): User {
//!     return User(age, name)
//! }
//! ```

use declsynth_syntax::{Argument, Expr, FunSpec, ParameterSpec, Stmt, TypeName};

use crate::error::EligibilityError;
use crate::generators::eligibility::ResolvedParameter;
use crate::generators::naming::COPY_FUNCTION;
use crate::generators::{SynthesisContext, Synthesized, eligibility};
use crate::markers::{self, Directive};
use crate::model::TypeDeclaration;

pub fn generate_copy(
    decl: &TypeDeclaration,
    ctx: &SynthesisContext<'_>,
) -> Result<Synthesized<FunSpec>, EligibilityError> {
    let params = eligibility::structural_constructor(decl, Directive::Copy)?;
    let declared = decl.declared_type();

    let mut fun = FunSpec::new(COPY_FUNCTION)
        .annotation(ctx.provenance_annotation())
        .type_variables(decl.type_parameters.iter().map(markers::to_type_variable))
        .receiver(declared.clone());

    let mut arguments = Vec::with_capacity(params.len());
    for ResolvedParameter { param, ty } in params {
        let mut spec = ParameterSpec::new(param.name.clone(), ty.clone()).vararg(param.vararg);
        if param.is_exposed() {
            spec = spec.default_value(Expr::This.member(param.name.clone()));
        }
        fun = fun.parameter(spec);

        let value = Expr::name(param.name.clone());
        arguments.push(if param.vararg {
            Argument::spread(value)
        } else {
            Argument::positional(value)
        });
    }

    let type_arguments = decl
        .type_parameters
        .iter()
        .map(|param| TypeName::new(param.name.clone()))
        .collect();
    let construct = Expr::Type(TypeName::new(decl.type_path())).call_generic(type_arguments, arguments);

    Ok(Synthesized::new(
        fun.returns(declared).statement(Stmt::Return(Some(construct))),
    ))
}
