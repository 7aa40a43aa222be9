//! Declaration nodes: files, classes, functions, properties, parameters.

mod class;
mod file;
mod function;
mod modifier;
mod parameter;
mod property;

pub use class::{ClassSpec, Supertype};
pub use file::{FileSpec, TopLevel};
pub use function::FunSpec;
pub use modifier::Modifier;
pub use parameter::{ParameterSpec, PropertyBinding};
pub use property::{Accessor, PropertySpec};

use crate::annotation::AnnotationSpec;
use crate::types::TypeVariable;
use crate::writer::{CodeWriter, Renderable};

fn render_kdoc(writer: &mut CodeWriter, kdoc: Option<&str>) {
    let Some(kdoc) = kdoc.map(str::trim).filter(|doc| !doc.is_empty()) else {
        return;
    };
    writer.line("/**");
    for line in kdoc.lines() {
        let line = line.trim_end().replace("*/", "*&#47;");
        if line.is_empty() {
            writer.line(" *");
        } else {
            writer.line(&format!(" * {line}"));
        }
    }
    writer.line(" */");
}

fn render_annotations(writer: &mut CodeWriter, annotations: &[AnnotationSpec]) {
    for annotation in annotations {
        annotation.render(writer);
    }
}

/// `<T : Number, R>`; variables with several bounds list only the name here.
fn type_variables_decl(writer: &CodeWriter, variables: &[TypeVariable]) -> String {
    if variables.is_empty() {
        return String::new();
    }
    let variables: Vec<String> = variables
        .iter()
        .map(|variable| {
            let name = crate::names::escape_identifier(&variable.name).into_owned();
            match variable.bounds.as_slice() {
                [bound] => format!("{name} : {}", writer.type_name(bound)),
                _ => name,
            }
        })
        .collect();
    format!("<{}>", variables.join(", "))
}

/// ` where T : A, T : B`, or nothing.
fn where_clause(writer: &CodeWriter, variables: &[TypeVariable]) -> String {
    let constraints: Vec<String> = variables
        .iter()
        .filter(|variable| variable.needs_where_clause())
        .flat_map(|variable| {
            let name = crate::names::escape_identifier(&variable.name).into_owned();
            variable
                .bounds
                .iter()
                .map(move |bound| format!("{name} : {}", writer.type_name(bound)))
        })
        .collect();
    if constraints.is_empty() {
        String::new()
    } else {
        format!(" where {}", constraints.join(", "))
    }
}
