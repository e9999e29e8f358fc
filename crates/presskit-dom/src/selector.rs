//! Selector subset understood by every [`crate::Dom`] implementation.

use std::fmt::{self, Display, Formatter};

/// Simple selector: one class, one attribute presence test, or one tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `.class`
    Class(&'a str),
    /// `[attribute]`
    Attribute(&'a str),
    /// `tag`
    Tag(&'a str),
}

impl Selector<'_> {
    /// CSS text for `querySelectorAll`.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Display for Selector<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(formatter, ".{class}"),
            Self::Attribute(name) => write!(formatter, "[{name}]"),
            Self::Tag(tag) => formatter.write_str(tag),
        }
    }
}
