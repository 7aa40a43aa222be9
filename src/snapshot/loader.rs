//! Snapshot parser
//!
//! Reads TOML snapshot documents and converts them into model declarations.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use declsynth_syntax::{AnnotationArgument, AnnotationValue, Modifier, TypeName};

use crate::error::SnapshotError;
use crate::model::{
    Annotation, ConstructorParameter, FunctionMember, Parameter, PropertyMember, TypeDeclaration,
    TypeParameter, TypeRef,
};
use crate::snapshot::schema::*;

/// Parse a snapshot document from a TOML file
pub fn parse_snapshot<P: AsRef<Path>>(path: P) -> Result<SnapshotSchema, SnapshotError> {
    let content = fs::read_to_string(&path).map_err(|source| SnapshotError::Read {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    parse_snapshot_from_str(&content)
}

/// Parse a snapshot document from a TOML string
pub fn parse_snapshot_from_str(content: &str) -> Result<SnapshotSchema, SnapshotError> {
    Ok(toml::from_str(content)?)
}

/// Convert parsed schema entries into declarations, in document order.
pub fn convert_declarations(schema: &SnapshotSchema) -> Result<Vec<TypeDeclaration>, SnapshotError> {
    schema.declarations.iter().map(convert_declaration).collect()
}

fn convert_declaration(schema: &DeclarationSchema) -> Result<TypeDeclaration, SnapshotError> {
    let symbol = schema.name.as_str();
    let primary_constructor = schema
        .constructor
        .as_ref()
        .map(|params| {
            params
                .iter()
                .map(|param| {
                    let location = format!("{symbol}.<init>.{}", param.name);
                    Ok(ConstructorParameter {
                        name: param.name.clone(),
                        ty: parse_type_ref(&location, &param.r#type)?,
                        binding: param.binding,
                        field_visibility: param.visibility,
                        vararg: param.vararg,
                    })
                })
                .collect::<Result<Vec<_>, SnapshotError>>()
        })
        .transpose()?;

    Ok(TypeDeclaration {
        qualified_name: schema.name.as_str().into(),
        namespace: schema.namespace.clone(),
        kind: schema.kind,
        visibility: schema.visibility,
        modifiers: convert_modifiers(symbol, &schema.modifiers)?,
        type_parameters: convert_type_parameters(symbol, &schema.type_parameters)?,
        annotations: schema.annotations.iter().map(convert_annotation).collect(),
        doc: schema.doc.clone(),
        primary_constructor,
        functions: schema
            .functions
            .iter()
            .map(|function| convert_function(symbol, function))
            .collect::<Result<_, _>>()?,
        properties: schema
            .properties
            .iter()
            .map(|property| convert_property(symbol, property))
            .collect::<Result<_, _>>()?,
    })
}

fn convert_function(owner: &str, schema: &FunctionSchema) -> Result<FunctionMember, SnapshotError> {
    let symbol = format!("{owner}.{}", schema.name);
    let parameters = schema
        .parameters
        .iter()
        .map(|param| {
            Ok(Parameter {
                name: param.name.clone(),
                ty: parse_type_ref(&format!("{symbol}.{}", param.name), &param.r#type)?,
                vararg: param.vararg,
            })
        })
        .collect::<Result<Vec<_>, SnapshotError>>()?;
    let return_type = schema
        .returns
        .as_deref()
        .map(|text| parse_type_ref(&symbol, text))
        .transpose()?;

    Ok(FunctionMember {
        name: schema.name.clone(),
        parameters,
        return_type,
        type_parameters: convert_type_parameters(&symbol, &schema.type_parameters)?,
        annotations: schema.annotations.iter().map(convert_annotation).collect(),
        modifiers: convert_modifiers(&symbol, &schema.modifiers)?,
        doc: schema.doc.clone(),
    })
}

fn convert_property(owner: &str, schema: &PropertySchema) -> Result<PropertyMember, SnapshotError> {
    let symbol = format!("{owner}.{}", schema.name);
    Ok(PropertyMember {
        name: schema.name.clone(),
        ty: parse_type_ref(&symbol, &schema.r#type)?,
        mutable: schema.mutable,
        annotations: schema.annotations.iter().map(convert_annotation).collect(),
        modifiers: convert_modifiers(&symbol, &schema.modifiers)?,
        doc: schema.doc.clone(),
    })
}

fn convert_type_parameters(
    symbol: &str,
    params: &[TypeParameterSchema],
) -> Result<Vec<TypeParameter>, SnapshotError> {
    params
        .iter()
        .map(|param| {
            let bounds = param
                .bounds
                .iter()
                .map(|bound| {
                    TypeName::parse(bound).map_err(|source| SnapshotError::InvalidType {
                        symbol: format!("{symbol}<{}>", param.name),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TypeParameter {
                name: param.name.clone(),
                bounds,
            })
        })
        .collect()
}

fn convert_modifiers(symbol: &str, modifiers: &[String]) -> Result<BTreeSet<Modifier>, SnapshotError> {
    modifiers
        .iter()
        .map(|text| {
            Modifier::from_str(text.trim()).map_err(|_| SnapshotError::UnknownModifier {
                symbol: symbol.to_string(),
                modifier: text.clone(),
            })
        })
        .collect()
}

fn convert_annotation(schema: &AnnotationSchema) -> Annotation {
    Annotation {
        name: schema.name.clone(),
        arguments: schema
            .arguments
            .iter()
            .map(|arg| AnnotationArgument {
                name: arg.name.clone(),
                value: convert_value(&arg.value),
            })
            .collect(),
    }
}

fn convert_value(schema: &ValueSchema) -> AnnotationValue {
    match schema {
        ValueSchema::Bool(value) => AnnotationValue::Bool(*value),
        ValueSchema::Int(value) => AnnotationValue::Int(*value),
        ValueSchema::Float(value) => AnnotationValue::Float(*value),
        ValueSchema::Str(value) => AnnotationValue::Str(value.clone()),
        ValueSchema::Array(values) => AnnotationValue::Array(values.iter().map(convert_value).collect()),
        ValueSchema::Raw { raw } => AnnotationValue::Raw(raw.clone()),
        ValueSchema::Nested(annotation) => AnnotationValue::Nested(convert_annotation(annotation).to_spec()),
    }
}

fn parse_type_ref(symbol: &str, text: &str) -> Result<TypeRef, SnapshotError> {
    TypeRef::parse(text).map_err(|source| SnapshotError::InvalidType {
        symbol: symbol.to_string(),
        source,
    })
}
