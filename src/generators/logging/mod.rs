//! # Logging Wrapper Generator
//!
//! For an interface (or constructor-less abstract class) marked `@Loggable`,
//! builds a class that implements it by forwarding every member to a stored
//! `delegate`, logging each call and property access on the way.
//!
//! ```kotlin
//! class ApiServiceLoggerImpl<T>(
//!     private val delegate: ApiService<T>,
//! ) : ApiService<T> {
//!     override fun testVararg(a: Int, vararg f: Float) {
//!         delegate.testVararg(a, *f)
//!         println("MyLogTag: testVararg(a=${a}, f=${f.toList()})")
//!     }
//! }
//! ```
//!
//! The log line goes through the configured log function
//! ([`SynthesisConfig::log_function`](crate::config::SynthesisConfig::log_function)),
//! `println` by default. Members annotated `@NoLog` forward without logging.

mod function;
mod property;

use declsynth_syntax::{
    AnnotationValue, Argument, ClassSpec, Expr, Modifier, ParameterSpec, PropertyBinding, Stmt,
    StringTemplate, Supertype,
};

use crate::error::EligibilityError;
use crate::generators::eligibility;
use crate::generators::naming::{DELEGATE_FIELD, logger_impl_name};
use crate::generators::{SynthesisContext, Synthesized};
use crate::markers::{self, Directive, MarkerSet};
use crate::model::{Annotation, DeclarationKind, TypeDeclaration};

/// Build `<Name>LoggerImpl` for `decl`.
pub fn generate_logger(
    decl: &TypeDeclaration,
    ctx: &SynthesisContext<'_>,
) -> Result<Synthesized<ClassSpec>, EligibilityError> {
    eligibility::check_wrappable(decl)?;
    if let Some(clash) = decl
        .properties
        .iter()
        .find(|property| property.name == DELEGATE_FIELD)
    {
        return Err(EligibilityError::DelegateClash {
            name: decl.qualified_name.to_string(),
            member: clash.name.clone(),
        });
    }

    let class_name = logger_impl_name(decl);
    let scope = WrapperScope {
        owner: decl.qualified_name.as_str(),
        tag: resolve_tag(decl, &ctx.marker(Directive::Loggable), &class_name),
        log_function: log_callee(&ctx.config.log_function),
        markers: &ctx.markers,
    };

    let declared = decl.declared_type();
    let supertype = match decl.kind {
        DeclarationKind::Interface => Supertype::interface(declared.clone()),
        _ => Supertype::class(declared.clone()),
    };
    let mut class = ClassSpec::new(class_name)
        .annotation(ctx.provenance_annotation())
        .type_variables(decl.type_parameters.iter().map(markers::to_type_variable))
        .constructor_parameter(
            ParameterSpec::new(DELEGATE_FIELD, declared)
                .modifier(Modifier::Private)
                .binding(PropertyBinding::Val),
        )
        .supertype(supertype);
    class.kdoc = decl.doc.clone();

    let overridable = |modifiers: &std::collections::BTreeSet<Modifier>| {
        decl.kind == DeclarationKind::Interface
            || modifiers.contains(&Modifier::Abstract)
            || modifiers.contains(&Modifier::Open)
    };

    for member in decl
        .properties
        .iter()
        .filter(|property| !property.modifiers.contains(&Modifier::Private))
        .filter(|property| overridable(&property.modifiers))
    {
        class = class.property(property::override_property(member, &scope)?);
    }

    let mut warnings = Vec::new();
    for member in decl
        .functions
        .iter()
        .filter(|function| !function.modifiers.contains(&Modifier::Private))
        .filter(|function| overridable(&function.modifiers))
    {
        let (fun, warning) = function::override_function(member, &scope)?;
        warnings.extend(warning);
        class = class.function(fun);
    }

    Ok(Synthesized::with_warnings(class, warnings))
}

/// What every member of one wrapper shares.
struct WrapperScope<'a> {
    /// Qualified name of the wrapped declaration, for diagnostics.
    owner: &'a str,
    tag: String,
    log_function: Expr,
    markers: &'a MarkerSet,
}

impl WrapperScope<'_> {
    fn log(&self, message: StringTemplate) -> Stmt {
        Stmt::Expr(
            self.log_function
                .clone()
                .call([Argument::positional(Expr::Template(message))]),
        )
    }

    fn should_log(&self, annotations: &[Annotation]) -> bool {
        markers::logging_enabled(annotations, self.markers)
    }

    /// Annotations worth repeating on the override: everything but markers.
    fn carried_annotations(&self, annotations: &[Annotation]) -> Vec<declsynth_syntax::AnnotationSpec> {
        annotations
            .iter()
            .filter(|annotation| !self.markers.is_marker(annotation))
            .map(Annotation::to_spec)
            .collect()
    }
}

/// The `tag` of the marker, or the generated class name when it is blank.
fn resolve_tag(decl: &TypeDeclaration, marker: &str, class_name: &str) -> String {
    decl.annotation(marker)
        .and_then(|annotation| {
            annotation.argument("tag").or_else(|| match annotation.arguments.as_slice() {
                [only] if only.name.is_none() => Some(&only.value),
                _ => None,
            })
        })
        .and_then(AnnotationValue::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .unwrap_or(class_name)
        .to_string()
}

/// `Log.d` becomes a member chain so each segment is escaped on its own.
fn log_callee(log_function: &str) -> Expr {
    let mut segments = log_function.split('.');
    let first = segments.next().unwrap_or_default();
    segments.fold(Expr::name(first), |callee, segment| callee.member(segment))
}
