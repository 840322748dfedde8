//! All error types for the resxkit crate.
//!
//! Parsing is the only fallible part of the codec. Everything else here is
//! raised by the editing session or by file I/O around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown file `{0}`")]
    UnknownFile(String),

    #[error("unknown group `{0}`")]
    UnknownGroup(String),

    #[error("entry `{name}` not found in {file}")]
    EntryNotFound { file: String, name: String },

    #[error("unsupported file: {0}")]
    UnsupportedFile(String),
}

impl Error {
    /// Creates a new malformed-document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedDocument(message.into())
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(value: quick_xml::Error) -> Self {
        Error::MalformedDocument(value.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedDocument(value.to_string())
    }
}
