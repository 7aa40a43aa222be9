//! Fixed names of generated artifacts.

use crate::model::TypeDeclaration;

pub const LOGGER_IMPL_SUFFIX: &str = "LoggerImpl";
pub const COPY_EXTENSION_FILE: &str = "CopyExtension";
pub const NICE_STRING_EXTENSION_FILE: &str = "ToNiceStringExtension";
pub const COPY_FUNCTION: &str = "copy";
pub const NICE_STRING_FUNCTION: &str = "toNiceString";
/// The wrapper's stored delegate, also its only constructor parameter.
pub const DELEGATE_FIELD: &str = "delegate";
pub const RESULT_LOCAL: &str = "result";

/// `ApiService` -> `ApiServiceLoggerImpl`
pub fn logger_impl_name(decl: &TypeDeclaration) -> String {
    format!("{}{LOGGER_IMPL_SUFFIX}", decl.simple_name())
}

/// `base`, or `base` followed by as many underscores as needed to avoid `taken`.
pub fn fresh_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut name = base.to_string();
    while taken(&name) {
        name.push('_');
    }
    name
}
