use derive_more::{Display, From, Into};
use declsynth_syntax::names;

/// Fully qualified declaration name, e.g. `com.example.Outer.Inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment.
    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.0)
    }

    /// The name with `namespace.` stripped, e.g. `Outer.Inner`.
    pub fn relative_to(&self, namespace: &str) -> &str {
        if namespace.is_empty() {
            return &self.0;
        }
        self.0
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
