//! Reading and writing whole documents.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::error::Error;

/// A document that is read and written as one unit.
///
/// Implementors decode raw bytes and serialize themselves; reading from a
/// reader or a path goes through [`Parser::from_bytes`], so every source is
/// decoded the same way.
///
/// # Example
///
/// ```rust,no_run
/// use resxkit::traits::Parser;
/// let document = resxkit::resx::ResxDocument::read_from("Resources.resx")?;
/// document.write_to("Resources.copy.resx")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser: Sized {
    /// Parse already-decoded text.
    fn from_str(s: &str) -> Result<Self, Error>;

    /// Decode and parse raw file content.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Read everything from `reader`, then [`Parser::from_bytes`].
    fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }
}
