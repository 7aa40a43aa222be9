use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Declaration modifiers.
///
/// Variant order is the conventional source order, so a sorted set of
/// modifiers prints the way a person would write them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Internal,
    Expect,
    Actual,
    Final,
    Open,
    Abstract,
    Sealed,
    Const,
    External,
    Override,
    Lateinit,
    Tailrec,
    Suspend,
    Inner,
    Enum,
    Annotation,
    Companion,
    Inline,
    Value,
    Infix,
    Operator,
    Data,
}

impl Modifier {
    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Protected | Modifier::Private | Modifier::Internal
        )
    }
}

/// Space-separated modifiers followed by a trailing space, or nothing.
pub(crate) fn modifier_prefix<'a>(modifiers: impl IntoIterator<Item = &'a Modifier>) -> String {
    let mut prefix = String::new();
    for modifier in modifiers {
        prefix.push_str(modifier.as_ref());
        prefix.push(' ');
    }
    prefix
}
