use declsynth_syntax::{AnnotationArgument, AnnotationSpec, AnnotationValue, TypeName, names};

/// An annotation as written on a declaration or member.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Qualified when the host resolved it, otherwise as written.
    pub name: String,
    pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.arguments.push(AnnotationArgument {
            name: Some(name.into()),
            value,
        });
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }

    /// Matches `marker` by qualified name, or by simple name when the
    /// annotation itself is unqualified.
    pub fn is(&self, marker: &str) -> bool {
        self.name == marker || (!self.name.contains('.') && self.name == names::simple_name(marker))
    }

    /// Named argument value.
    pub fn argument(&self, name: &str) -> Option<&AnnotationValue> {
        self.arguments
            .iter()
            .find(|arg| arg.name.as_deref() == Some(name))
            .map(|arg| &arg.value)
    }

    pub fn to_spec(&self) -> AnnotationSpec {
        AnnotationSpec {
            ty: TypeName::new(self.name.clone()),
            arguments: self.arguments.clone(),
            use_site: None,
        }
    }
}
