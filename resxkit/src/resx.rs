//! Support for the Microsoft `.resx` resource format.
//!
//! Only string `data` entries (name, value, comment) are modeled. Schema,
//! `resheader`, `metadata` and `assembly` elements are skipped on read and
//! regenerated from a fixed template on write, so a written file always
//! carries the standard header block.

use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

use encoding_rs::{Encoding, UTF_8};
use indoc::indoc;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{error::Error, traits::Parser, types::ResourceEntry};

const ENTRIES_SLOT: &str = "{entries}";

/// Everything in a written `.resx` file except the `data` elements.
///
/// Must stay byte-for-byte stable; .NET matches the reader/writer type names verbatim.
pub const RESX_TEMPLATE: &str = indoc! {r#"
    <?xml version="1.0" encoding="utf-8"?>
    <root>
      <xsd:schema id="root" xmlns="" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:msdata="urn:schemas-microsoft-com:xml-msdata">
        <xsd:import namespace="http://www.w3.org/XML/1998/namespace" />
        <xsd:element name="root" msdata:IsDataSet="true">
          <xsd:complexType>
            <xsd:choice maxOccurs="unbounded">
              <xsd:element name="metadata">
                <xsd:complexType>
                  <xsd:sequence>
                    <xsd:element name="value" type="xsd:string" minOccurs="0" />
                  </xsd:sequence>
                  <xsd:attribute name="name" use="required" type="xsd:string" />
                  <xsd:attribute name="type" type="xsd:string" />
                  <xsd:attribute name="mimetype" type="xsd:string" />
                  <xsd:attribute ref="xml:space" />
                </xsd:complexType>
              </xsd:element>
              <xsd:element name="assembly">
                <xsd:complexType>
                  <xsd:attribute name="alias" type="xsd:string" />
                  <xsd:attribute name="name" type="xsd:string" />
                </xsd:complexType>
              </xsd:element>
              <xsd:element name="data">
                <xsd:complexType>
                  <xsd:sequence>
                    <xsd:element name="value" type="xsd:string" minOccurs="0" />
                    <xsd:element name="comment" type="xsd:string" minOccurs="0" />
                  </xsd:sequence>
                  <xsd:attribute name="name" use="required" type="xsd:string" />
                  <xsd:attribute name="type" type="xsd:string" />
                  <xsd:attribute name="mimetype" type="xsd:string" />
                  <xsd:attribute ref="xml:space" />
                </xsd:complexType>
              </xsd:element>
              <xsd:element name="resheader">
                <xsd:complexType>
                  <xsd:sequence>
                    <xsd:element name="value" type="xsd:string" minOccurs="0" />
                  </xsd:sequence>
                  <xsd:attribute name="name" use="required" type="xsd:string" />
                </xsd:complexType>
              </xsd:element>
            </xsd:choice>
          </xsd:complexType>
        </xsd:element>
      </xsd:schema>
      <resheader name="resmimetype">
        <value>text/microsoft-resx</value>
      </resheader>
      <resheader name="version">
        <value>2.0</value>
      </resheader>
      <resheader name="reader">
        <value>System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
      </resheader>
      <resheader name="writer">
        <value>System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
      </resheader>
    {entries}</root>"#};

/// Parses `.resx` text into its string entries, in document order.
///
/// `data` elements are read only as direct children of the top-level
/// `root` element. A `data` element without a (non-empty) `name` attribute
/// is skipped. Missing `value` or `comment` children read as empty strings.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] if `xml` is not well-formed.
pub fn parse(xml: &str) -> Result<Vec<ResourceEntry>, Error> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    read_entries(xml.as_bytes())
}

/// Builds a complete `.resx` document from `entries`.
///
/// Deterministic: the same entries always yield the same string.
pub fn build(entries: &[ResourceEntry]) -> String {
    let mut body = String::new();
    for entry in entries {
        push_data_element(&mut body, entry);
    }
    RESX_TEMPLATE.replacen(ENTRIES_SLOT, &body, 1)
}

/// Escapes `&`, `<`, `>`, `"` and `'` as XML entities.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Decodes raw file bytes, honoring a UTF-8 or UTF-16 byte-order mark.
/// Input without a BOM is read as UTF-8.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] if the bytes are not valid in the
/// detected encoding. Nothing is replaced with U+FFFD, so a file that loads
/// can be written back without losing characters.
pub fn decode_text(bytes: &[u8]) -> Result<String, Error> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(Cow::into_owned)
        .ok_or_else(|| Error::malformed(format!("document is not valid {}", encoding.name())))
}

fn push_data_element(out: &mut String, entry: &ResourceEntry) {
    out.push_str("  <data name=\"");
    out.push_str(&escape_xml(&entry.name));
    out.push_str("\" xml:space=\"preserve\">\n");
    out.push_str("    <value>");
    out.push_str(&escape_xml(&entry.value));
    out.push_str("</value>\n");
    if !entry.comment.is_empty() {
        out.push_str("    <comment>");
        out.push_str(&escape_xml(&entry.comment));
        out.push_str("</comment>\n");
    }
    out.push_str("  </data>\n");
}

/// A parsed `.resx` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResxDocument {
    pub entries: Vec<ResourceEntry>,
}

impl ResxDocument {
    pub fn new(entries: Vec<ResourceEntry>) -> Self {
        Self { entries }
    }
}

impl Parser for ResxDocument {
    fn from_str(s: &str) -> Result<Self, Error> {
        parse(s).map(Self::new)
    }

    /// Visual Studio writes `.resx` files with a UTF-8 BOM; UTF-16 files
    /// carry their own BOM.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_str(&decode_text(bytes)?)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer
            .write_all(build(&self.entries).as_bytes())
            .map_err(Error::Io)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Value,
    Comment,
}

/// A `data` element whose end tag has not been read yet.
#[derive(Debug, Default)]
struct PendingEntry {
    name: Option<String>,
    value: String,
    comment: String,
}

impl PendingEntry {
    fn from_start(e: &BytesStart) -> Result<Self, Error> {
        let mut name = None;
        for attr in e.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"name" {
                name = Some(attr.unescape_value()?.into_owned());
            }
        }
        Ok(Self {
            name,
            ..Self::default()
        })
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Value => &mut self.value,
            Field::Comment => &mut self.comment,
        }
    }

    fn finish(self) -> Option<ResourceEntry> {
        let name = self.name.filter(|name| !name.is_empty())?;
        Some(ResourceEntry {
            name,
            value: self.value,
            comment: self.comment,
        })
    }
}

/// Fails on unquoted, duplicated or badly escaped attributes, wherever the
/// element sits.
fn check_attributes(e: &BytesStart) -> Result<(), Error> {
    for attr in e.attributes() {
        attr?.unescape_value()?;
    }
    Ok(())
}

// Open-element count when a start tag is read: 1 for `data` under `root`,
// 2 for the `value`/`comment` inside it.
const DATA_DEPTH: usize = 1;
const FIELD_DEPTH: usize = 2;

fn read_entries<R: BufRead>(reader: R) -> Result<Vec<ResourceEntry>, Error> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.config_mut().check_end_names = true;

    let mut buf = Vec::new();
    let mut entries = Vec::new();

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut resx_root = false;
    let mut pending: Option<PendingEntry> = None;
    let mut field: Option<Field> = None;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                check_attributes(e)?;
                match depth {
                    0 => {
                        if seen_root {
                            return Err(Error::malformed("more than one root element"));
                        }
                        seen_root = true;
                        resx_root = e.name().as_ref() == b"root";
                    }
                    DATA_DEPTH if resx_root && e.name().as_ref() == b"data" => {
                        pending = Some(PendingEntry::from_start(e)?);
                    }
                    FIELD_DEPTH if pending.is_some() => {
                        field = match e.name().as_ref() {
                            b"value" => Some(Field::Value),
                            b"comment" => Some(Field::Comment),
                            _ => None,
                        };
                        if let (Some(field), Some(entry)) = (field, pending.as_mut()) {
                            entry.slot(field).clear();
                        }
                    }
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                check_attributes(e)?;
                match depth {
                    0 => {
                        if seen_root {
                            return Err(Error::malformed("more than one root element"));
                        }
                        seen_root = true;
                    }
                    DATA_DEPTH if resx_root && e.name().as_ref() == b"data" => {
                        if let Some(entry) = PendingEntry::from_start(e)?.finish() {
                            entries.push(entry);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::malformed("unexpected closing tag"))?;
                match depth {
                    FIELD_DEPTH => field = None,
                    DATA_DEPTH => {
                        if let Some(entry) = pending.take().and_then(PendingEntry::finish) {
                            entries.push(entry);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref t) => {
                if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(Error::malformed("text outside the root element"));
                }
                // Unescaped everywhere so a bad entity fails the whole document.
                let text = t.unescape()?;
                if depth == FIELD_DEPTH + 1 {
                    if let (Some(field), Some(entry)) = (field, pending.as_mut()) {
                        entry.slot(field).push_str(&text);
                    }
                }
            }
            Event::CData(t) => {
                if depth == 0 {
                    return Err(Error::malformed("CDATA outside the root element"));
                }
                if depth == FIELD_DEPTH + 1 {
                    if let (Some(field), Some(entry)) = (field, pending.as_mut()) {
                        entry
                            .slot(field)
                            .push_str(&String::from_utf8_lossy(&t.into_inner()));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(Error::malformed("no root element"));
    }
    if depth != 0 {
        return Err(Error::malformed("unexpected end of document inside an element"));
    }

    Ok(entries)
}
