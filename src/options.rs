/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '.';

/// Accessor options. Fixed once an [`crate::Accessor`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Character splitting a path into property names.
    pub separator: char,
}

impl Options {
    pub const fn new() -> Self {
        Self { separator: DEFAULT_SEPARATOR }
    }

    pub const fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
