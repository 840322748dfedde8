#![forbid(unsafe_code)]
//! Toolkit for Microsoft `.resx` resource files.
//!
//! Parses and writes `.resx` documents, recognizes locale variants of one
//! resource from their file names (`Resources.resx`, `Resources.fr-FR.resx`,
//! `Resources_de.resx`), groups them, and tracks edits in a [`Session`].
//!
//! # Quick Start
//!
//! ```rust
//! use resxkit::{ResourceEntry, Session, resx};
//!
//! let content = resx::build(&[ResourceEntry::new("Greeting", "Hello")]);
//!
//! let mut session = Session::new();
//! let base = session.load(&content, "Resources.resx")?;
//! let french = session.load(&content, "Resources.fr-FR.resx")?;
//! session.edit_entry(french, "Greeting", "Bonjour", "")?;
//!
//! let group = &session.groups()[0];
//! assert_eq!(group.members, vec![base, french]);
//!
//! for export in session.export_modified() {
//!     assert_eq!(export.file_name, "Resources.fr-FR.resx");
//! }
//! # Ok::<(), resxkit::Error>(())
//! ```
//!
//! The codec, classifier and grouping engine are pure functions over
//! in-memory strings; only [`Session::load_path`] and the [`traits::Parser`]
//! helpers touch the file system.

pub mod classify;
pub mod error;
pub mod grouping;
pub mod options;
pub mod report;
pub mod resx;
pub mod session;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    classify::{Classification, classify, language_display_name, short_display_name},
    error::Error,
    grouping::group_files,
    options::SessionOptions,
    report::SessionReport,
    resx::ResxDocument,
    session::{Export, Session},
    types::{DEFAULT_LOCALE, FileGroup, FileId, FileRecord, ResourceEntry},
};
