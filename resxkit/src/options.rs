//! Options controlling how a [`crate::Session`] loads and edits files.

/// Behavior options for [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Reject file names that do not end in `.resx` (any letter case).
    pub strict_extension: bool,
    /// Trim surrounding whitespace from names, values and comments on add/edit.
    pub trim_input: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            strict_extension: false,
            trim_input: true,
        }
    }
}

impl SessionOptions {
    /// Creates default session options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables the `.resx` extension check.
    pub fn with_strict_extension(mut self, strict_extension: bool) -> Self {
        self.strict_extension = strict_extension;
        self
    }

    /// Enables/disables input trimming.
    pub fn with_trim_input(mut self, trim_input: bool) -> Self {
        self.trim_input = trim_input;
        self
    }
}
