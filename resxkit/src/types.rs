//! Core types for resxkit.
//! The codec decodes into [`ResourceEntry`]; the session wraps entries in
//! [`FileRecord`]s; the grouping engine projects records into [`FileGroup`]s.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Locale tag assigned to files without a recognizable locale suffix.
pub const DEFAULT_LOCALE: &str = "default";

/// One name/value/comment triple inside a `.resx` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ResourceEntry {
    /// Entry key. Unique within a file as far as the editing session is concerned.
    pub name: String,

    pub value: String,

    /// Optional comment for translators; empty when absent.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub comment: String,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry {{ name: {}, value: {} }}", self.name, self.value)
    }
}

/// Opaque identifier of a loaded file, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FileId(pub u64);

impl Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// A loaded `.resx` file and its current (possibly edited) entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileRecord {
    pub id: FileId,

    /// Name shown to the user; the grouping engine classifies this one.
    pub display_file_name: String,

    /// Name the file had on disk; exports are written back under it.
    pub original_file_name: String,

    pub entries: Vec<ResourceEntry>,

    /// Whether `entries` differs from the last loaded or saved snapshot.
    pub dirty: bool,

    /// `None` until the file has been classified.
    #[serde(default)]
    pub locale_tag: Option<String>,

    /// `None` until the file has been classified.
    #[serde(default)]
    pub base_name: Option<String>,
}

impl FileRecord {
    /// Creates an untagged, clean record.
    pub fn new(id: FileId, file_name: impl Into<String>, entries: Vec<ResourceEntry>) -> Self {
        let file_name = file_name.into();
        Self {
            id,
            display_file_name: file_name.clone(),
            original_file_name: file_name,
            entries,
            dirty: false,
            locale_tag: None,
            base_name: None,
        }
    }

    pub fn with_tags(mut self, base_name: impl Into<String>, locale_tag: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self.locale_tag = Some(locale_tag.into());
        self
    }

    pub fn find_entry(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn has_entry(&self, name: &str) -> bool {
        self.find_entry(name).is_some()
    }
}

/// Files sharing one base name, ordered for display.
///
/// Groups are disposable projections of the session's file list: they hold
/// file ids, never the records themselves, and are rebuilt on every change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileGroup {
    /// `group-` followed by the base name.
    pub id: String,
    pub base_name: String,
    /// Default locale first, then ascending by locale tag.
    pub members: Vec<FileId>,
    pub active_member_id: Option<FileId>,
}

impl FileGroup {
    pub fn group_id_for(base_name: &str) -> String {
        format!("group-{}", base_name)
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.members.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_comment_skipped_when_empty() {
        let entry = ResourceEntry::new("Greeting", "Hello");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Greeting","value":"Hello"}"#);

        let back: ResourceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_file_id_display() {
        assert_eq!(FileId(3).to_string(), "file-3");
    }

    #[test]
    fn test_record_starts_clean_and_untagged() {
        let record = FileRecord::new(FileId(1), "Resources.resx", vec![]);
        assert!(!record.dirty);
        assert_eq!(record.display_file_name, record.original_file_name);
        assert!(record.base_name.is_none());
        assert!(record.locale_tag.is_none());
    }

    #[test]
    fn test_group_id_for() {
        assert_eq!(FileGroup::group_id_for("Resources"), "group-Resources");
    }
}
