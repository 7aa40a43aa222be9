//! Identifier handling shared by the printer and by the generators.

use std::borrow::Cow;

/// Hard keywords can never be used as bare identifiers.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

pub fn is_hard_keyword(name: &str) -> bool {
    HARD_KEYWORDS.contains(&name)
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Wrap `name` in backticks when it cannot appear bare.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if is_hard_keyword(name) || !is_plain_identifier(name) {
        Cow::Owned(format!("`{name}`"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Escape every segment of a dotted name (`com.in.model` -> ``com.`in`.model``).
pub fn escape_dotted(name: &str) -> String {
    name.split('.')
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Last segment of a dotted name (e.g., `com.example.User` -> `User`)
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Everything before the last segment, empty for an unqualified name.
pub fn package_of(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_identifier() {
        assert_eq!(escape_identifier("name"), "name");
        assert_eq!(escape_identifier("in"), "`in`");
        assert_eq!(escape_identifier("object"), "`object`");
        assert_eq!(escape_identifier("my name"), "`my name`");
        // soft keywords stay bare
        assert_eq!(escape_identifier("value"), "value");
        assert_eq!(escape_identifier("delegate"), "delegate");
    }

    #[test]
    fn test_escape_dotted() {
        assert_eq!(escape_dotted("com.in.model"), "com.`in`.model");
        assert_eq!(escape_dotted("kotlin.String"), "kotlin.String");
    }

    #[test]
    fn test_simple_name_and_package() {
        assert_eq!(simple_name("com.example.User"), "User");
        assert_eq!(simple_name("User"), "User");
        assert_eq!(package_of("com.example.User"), "com.example");
        assert_eq!(package_of("User"), "");
    }
}
