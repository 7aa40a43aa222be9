use thiserror::Error;

/// Failure to read a type written in source form, e.g. `Map<String, List<Int>>?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid type `{text}` at offset {position}: {message}")]
pub struct TypeParseError {
    pub text: String,
    pub position: usize,
    pub message: String,
}

impl TypeParseError {
    pub(crate) fn new(text: &str, position: usize, message: impl Into<String>) -> Self {
        Self {
            text: text.to_string(),
            position,
            message: message.into(),
        }
    }
}
