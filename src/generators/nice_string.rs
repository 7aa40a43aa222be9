//! `toNiceString` extension functions.
//!
//! The rendered text lists the readable constructor fields in declaration
//! order. A field whose type gets its own `toNiceString` in the same round is
//! rendered through it, so nested values print structurally:
//!
//! ```kotlin
//! fun Post.toNiceString(): String {
//!     return "Post(name=${name}, user=${user.toNiceString()})"
//! }
//! ```

use declsynth_syntax::{Expr, FunSpec, Stmt, StringTemplate, TypeName};

use crate::error::EligibilityError;
use crate::generators::eligibility::ResolvedParameter;
use crate::generators::naming::NICE_STRING_FUNCTION;
use crate::generators::{SynthesisContext, Synthesized, eligibility};
use crate::markers;
use crate::model::TypeDeclaration;

pub fn generate_nice_string(
    decl: &TypeDeclaration,
    ctx: &SynthesisContext<'_>,
) -> Result<Synthesized<FunSpec>, EligibilityError> {
    let (readable, hidden) = eligibility::readable_fields(decl)?;
    let warnings = hidden
        .iter()
        .map(|resolved| {
            format!(
                "{}: constructor parameter `{}` is not a readable field and is left out of {NICE_STRING_FUNCTION}",
                decl.qualified_name, resolved.param.name
            )
        })
        .collect();

    let mut template = StringTemplate::new().literal(format!("{}(", decl.simple_name()));
    for (idx, resolved) in readable.iter().enumerate() {
        if idx > 0 {
            template = template.literal(", ");
        }
        template = template
            .literal(format!("{}=", resolved.param.name))
            .interpolate(field_value(resolved, decl, ctx));
    }
    template = template.literal(")");

    let fun = FunSpec::new(NICE_STRING_FUNCTION)
        .annotation(ctx.provenance_annotation())
        .type_variables(decl.type_parameters.iter().map(markers::to_type_variable))
        .receiver(decl.declared_type())
        .returns(TypeName::new("String"))
        .statement(Stmt::Return(Some(Expr::Template(template))));

    Ok(Synthesized::with_warnings(fun, warnings))
}

fn field_value(
    resolved: &ResolvedParameter<'_>,
    owner: &TypeDeclaration,
    ctx: &SynthesisContext<'_>,
) -> Expr {
    let ResolvedParameter { param, ty } = *resolved;
    let field = Expr::name(param.name.clone());
    if param.vararg {
        return field.member("toList").call([]);
    }
    match ctx.model.resolve(ty, owner.namespace()) {
        Some(nested) if eligibility::is_renderable(nested, &ctx.markers) => {
            let call = if ty.nullable {
                field.safe_member(NICE_STRING_FUNCTION)
            } else {
                field.member(NICE_STRING_FUNCTION)
            };
            call.call([])
        }
        _ => field,
    }
}

#[cfg(test)]
mod tests {
    use declsynth_syntax::Renderable;

    use super::*;
    use crate::generators::test_support::{config, context, snapshot, ty};
    use crate::model::{Annotation, ConstructorParameter, DeclarationKind};

    fn marked(name: &str, constructor: Vec<ConstructorParameter>) -> TypeDeclaration {
        TypeDeclaration::builder()
            .qualified_name(name)
            .kind(DeclarationKind::Class)
            .annotations(vec![Annotation::new("ToNiceString")])
            .primary_constructor(constructor)
            .build()
    }

    fn user() -> TypeDeclaration {
        marked(
            "com.example.User",
            vec![
                ConstructorParameter::new("age", ty("Int")).val(),
                ConstructorParameter::new("name", ty("String")).val(),
            ],
        )
    }

    fn post() -> TypeDeclaration {
        marked(
            "com.example.Post",
            vec![
                ConstructorParameter::new("name", ty("String")).val(),
                ConstructorParameter::new("likes", ty("Int")).var(),
                ConstructorParameter::new("comments", ty("List<String>")).val(),
                ConstructorParameter::new("user", ty("User")).val(),
                ConstructorParameter::new("editor", ty("com.example.User?")).val(),
            ],
        )
    }

    fn body(fun: &FunSpec) -> String {
        match &fun.body[..] {
            [statement] => statement.to_source(),
            other => panic!("expected one statement, got {other:?}"),
        }
    }

    #[test]
    fn test_flat_class() {
        let config = config();
        let model = snapshot(vec![user()]);
        let ctx = context(&model, &config);
        let generated = generate_nice_string(&model.declarations()[0], &ctx).unwrap();
        assert!(generated.warnings.is_empty());
        assert_eq!(generated.item.receiver, Some(TypeName::new("User")));
        assert_eq!(body(&generated.item), "return \"User(age=${age}, name=${name})\"\n");
    }

    #[test]
    fn test_nested_marked_type_recurses() {
        let config = config();
        let model = snapshot(vec![post(), user()]);
        let ctx = context(&model, &config);
        let generated = generate_nice_string(&model.declarations()[0], &ctx).unwrap();
        assert_eq!(
            body(&generated.item),
            "return \"Post(name=${name}, likes=${likes}, comments=${comments}, user=${user.toNiceString()}, editor=${editor?.toNiceString()})\"\n"
        );
    }

    #[test]
    fn test_unmarked_nested_type_is_raw() {
        let config = config();
        let mut plain_user = user();
        plain_user.annotations.clear();
        let model = snapshot(vec![post(), plain_user]);
        let ctx = context(&model, &config);
        let generated = generate_nice_string(&model.declarations()[0], &ctx).unwrap();
        assert!(body(&generated.item).contains("user=${user}, editor=${editor})"));
    }

    #[test]
    fn test_hidden_parameters_are_skipped_with_warning() {
        let config = config();
        let decl = marked(
            "a.Token",
            vec![
                ConstructorParameter::new("raw", ty("String")),
                ConstructorParameter::new("id", ty("Int")).val(),
                ConstructorParameter::new("parts", ty("String")).val().vararg(),
            ],
        );
        let model = snapshot(vec![decl]);
        let ctx = context(&model, &config);
        let generated = generate_nice_string(&model.declarations()[0], &ctx).unwrap();
        assert_eq!(generated.warnings.len(), 1);
        assert!(generated.warnings[0].contains("`raw`"));
        assert_eq!(
            body(&generated.item),
            "return \"Token(id=${id}, parts=${parts.toList()})\"\n"
        );
    }

    #[test]
    fn test_no_readable_field() {
        let config = config();
        let decl = marked("a.Opaque", vec![ConstructorParameter::new("raw", ty("String"))]);
        let model = snapshot(vec![decl]);
        let ctx = context(&model, &config);
        assert!(matches!(
            generate_nice_string(&model.declarations()[0], &ctx),
            Err(EligibilityError::NoReadableFields { .. })
        ));
    }
}
