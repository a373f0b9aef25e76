use std::fmt;

/// One position in an aligned line: a grapheme cluster, or an absence
/// marker that only exists to keep old and new sequences the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterSlot {
    Present(String),
    Placeholder,
}

impl CharacterSlot {
    pub fn present(grapheme: impl Into<String>) -> Self {
        Self::Present(grapheme.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// The grapheme in this slot, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(g) => Some(g),
            Self::Placeholder => None,
        }
    }
}

impl From<&str> for CharacterSlot {
    fn from(grapheme: &str) -> Self {
        Self::Present(grapheme.to_owned())
    }
}

impl fmt::Display for CharacterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(g) => f.write_str(g),
            Self::Placeholder => Ok(()),
        }
    }
}
