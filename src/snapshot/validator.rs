//! Declaration model validator
//!
//! Checks the invariants every round relies on, collecting all violations
//! instead of stopping at the first one.

use std::collections::HashSet;

use crate::error::{IssueKind, SnapshotError, SnapshotIssue};
use crate::model::TypeDeclaration;

/// Collected violations.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<SnapshotIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn add_issue(&mut self, location: impl Into<String>, message: impl Into<String>, kind: IssueKind) {
        self.issues.push(SnapshotIssue {
            location: location.into(),
            message: message.into(),
            kind,
        });
    }

    pub fn into_result(self) -> Result<(), SnapshotError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SnapshotError::Invalid(self.issues))
        }
    }
}

/// Validate a full declaration set
pub fn validate_declarations(declarations: &[TypeDeclaration]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for decl in declarations {
        let location = decl.qualified_name.to_string();
        validate_name(&location, &mut result);

        if !seen.insert(decl.qualified_name.as_str()) {
            result.add_issue(
                &location,
                "declared more than once",
                IssueKind::DuplicateDeclaration,
            );
        }

        if let Some(namespace) = &decl.namespace {
            let qualified = decl.qualified_name.as_str();
            let inside = namespace.is_empty()
                || qualified
                    .strip_prefix(namespace.as_str())
                    .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1);
            if !inside {
                result.add_issue(
                    &location,
                    format!("namespace `{namespace}` is not a prefix of the qualified name"),
                    IssueKind::InvalidNamespace,
                );
            }
        }

        for param in &decl.type_parameters {
            if param.name.trim().is_empty() {
                result.add_issue(&location, "blank type parameter name", IssueKind::BlankName);
            }
        }

        if let Some(constructor) = &decl.primary_constructor {
            let params = constructor
                .iter()
                .map(|param| (param.name.as_str(), param.vararg));
            validate_parameter_list(&format!("{location}.<init>"), params, &mut result);
        }

        for function in &decl.functions {
            let function_location = format!("{location}.{}", function.name);
            if function.name.trim().is_empty() {
                result.add_issue(&location, "blank function name", IssueKind::BlankName);
            }
            let params = function
                .parameters
                .iter()
                .map(|param| (param.name.as_str(), param.vararg));
            validate_parameter_list(&function_location, params, &mut result);
        }

        let mut properties = HashSet::new();
        for property in &decl.properties {
            if property.name.trim().is_empty() {
                result.add_issue(&location, "blank property name", IssueKind::BlankName);
            } else if !properties.insert(property.name.as_str()) {
                result.add_issue(
                    format!("{location}.{}", property.name),
                    "property declared more than once",
                    IssueKind::DuplicateMember,
                );
            }
        }
    }

    result
}

fn validate_name(qualified: &str, result: &mut ValidationResult) {
    if qualified.split('.').any(|segment| segment.trim().is_empty()) {
        result.add_issue(
            qualified,
            "qualified name has a blank segment",
            IssueKind::BlankName,
        );
    }
}

/// Names are non-blank and unique; a vararg may only come last.
fn validate_parameter_list<'a>(
    location: &str,
    params: impl ExactSizeIterator<Item = (&'a str, bool)>,
    result: &mut ValidationResult,
) {
    let last = params.len().saturating_sub(1);
    let mut names = HashSet::new();
    for (idx, (name, vararg)) in params.enumerate() {
        if name.trim().is_empty() {
            result.add_issue(location, "blank parameter name", IssueKind::BlankName);
            continue;
        }
        if !names.insert(name) {
            result.add_issue(
                location,
                format!("parameter `{name}` declared more than once"),
                IssueKind::DuplicateMember,
            );
        }
        if vararg && idx != last {
            result.add_issue(
                location,
                format!("vararg parameter `{name}` must be last"),
                IssueKind::VarargNotLast,
            );
        }
    }
}
