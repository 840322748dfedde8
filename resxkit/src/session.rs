//! The editing session: loaded files, their rows, and the current selection.
//!
//! A [`Session`] owns every [`FileRecord`]. Groups are recomputed from the
//! records with [`group_files`] whenever the file set changes, never patched
//! in place. A failed load leaves the session exactly as it was.

use std::{collections::HashMap, fs, path::Path};

use tracing::{debug, info};

use crate::{
    classify::{classify, strip_resx_extension},
    error::Error,
    grouping::group_files,
    options::SessionOptions,
    report::SessionReport,
    resx,
    types::{FileGroup, FileId, FileRecord, ResourceEntry},
};

/// A serialized file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_id: FileId,
    /// The name the file was loaded under.
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct Session {
    options: SessionOptions,
    files: Vec<FileRecord>,
    /// Entries as last loaded or saved, for dirty tracking.
    snapshots: HashMap<FileId, Vec<ResourceEntry>>,
    groups: Vec<FileGroup>,
    /// Members picked with [`Session::select_file`], by group id.
    chosen_members: HashMap<String, FileId>,
    active_group_id: Option<String>,
    active_file_id: Option<FileId>,
    next_id: u64,
}

impl Session {
    /// Creates an empty session with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Parses `content`, classifies `file_name`, and adds the file.
    ///
    /// The first file loaded into a session without an active group becomes
    /// the active file, and its group the active group.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedDocument`] if `content` is not well-formed XML;
    /// [`Error::UnsupportedFile`] if strict extension checking is on and
    /// `file_name` does not end in `.resx`.
    pub fn load(&mut self, content: &str, file_name: &str) -> Result<FileId, Error> {
        if self.options.strict_extension && strip_resx_extension(file_name) == file_name {
            return Err(Error::UnsupportedFile(format!(
                "{} is not a .resx file",
                file_name
            )));
        }

        let entries = resx::parse(content)?;
        let classification = classify(file_name);

        let id = FileId(self.next_id);
        self.next_id += 1;

        info!(
            file = %file_name,
            entries = entries.len(),
            base_name = %classification.base_name,
            locale = %classification.locale_tag,
            "loaded resource file"
        );

        self.snapshots.insert(id, entries.clone());
        self.files.push(
            FileRecord::new(id, file_name, entries)
                .with_tags(classification.base_name, classification.locale_tag),
        );

        let had_active_group = self.active_group_id.is_some();
        self.regroup();
        if !had_active_group {
            self.activate(id)?;
        }

        Ok(id)
    }

    /// Like [`Session::load`], decoding raw bytes first (UTF-8 or UTF-16 with BOM).
    pub fn load_bytes(&mut self, bytes: &[u8], file_name: &str) -> Result<FileId, Error> {
        self.load(&resx::decode_text(bytes)?, file_name)
    }

    /// Reads the file at `path` and loads it under its file name.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<FileId, Error> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::UnsupportedFile(path.display().to_string()))?
            .to_string();
        let bytes = fs::read(path)?;
        self.load_bytes(&bytes, &file_name)
    }

    /// Drops every file, group and selection.
    pub fn reset(&mut self) {
        info!(files = self.files.len(), "resetting session");
        self.files.clear();
        self.snapshots.clear();
        self.groups.clear();
        self.chosen_members.clear();
        self.active_group_id = None;
        self.active_file_id = None;
    }

    /// Removes one file from the session and returns its record.
    pub fn remove_file(&mut self, id: FileId) -> Result<FileRecord, Error> {
        let position = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| Error::UnknownFile(id.to_string()))?;
        let record = self.files.remove(position);
        self.snapshots.remove(&id);
        info!(file = %record.display_file_name, "removed resource file");
        self.regroup();
        Ok(record)
    }

    /// Changes the name a file is displayed and grouped under, then regroups.
    /// Exports keep using the name the file was loaded with.
    pub fn rename_file(&mut self, id: FileId, display_file_name: &str) -> Result<(), Error> {
        let classification = classify(display_file_name);
        let record = self.file_mut(id)?;
        record.display_file_name = display_file_name.to_string();
        record.base_name = Some(classification.base_name);
        record.locale_tag = Some(classification.locale_tag);
        self.regroup();
        Ok(())
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    fn file_mut(&mut self, id: FileId) -> Result<&mut FileRecord, Error> {
        self.files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::UnknownFile(id.to_string()))
    }

    /// Finds a file by its display or original file name.
    pub fn find_file(&self, file_name: &str) -> Option<&FileRecord> {
        self.files
            .iter()
            .find(|f| f.display_file_name == file_name || f.original_file_name == file_name)
    }

    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&FileGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn active_group(&self) -> Option<&FileGroup> {
        self.active_group_id.as_deref().and_then(|id| self.group(id))
    }

    pub fn active_file(&self) -> Option<&FileRecord> {
        self.active_file_id.and_then(|id| self.file(id))
    }

    /// Activates a group and, with it, the group's active member.
    pub fn select_group(&mut self, group_id: &str) -> Result<(), Error> {
        let group = self
            .group(group_id)
            .ok_or_else(|| Error::UnknownGroup(group_id.to_string()))?;
        let file_id = group.active_member_id.or_else(|| group.members.first().copied());
        self.active_group_id = Some(group.id.clone());
        if file_id.is_some() {
            self.active_file_id = file_id;
        }
        debug!(group = group_id, "selected group");
        Ok(())
    }

    /// Activates a file, making it its group's active member.
    ///
    /// The choice survives later regroups for as long as the file stays in
    /// that group.
    pub fn select_file(&mut self, id: FileId) -> Result<(), Error> {
        let group_id = self.activate(id)?;
        self.chosen_members.insert(group_id, id);
        debug!(file = %id, "selected file");
        Ok(())
    }

    fn activate(&mut self, id: FileId) -> Result<String, Error> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.contains(id))
            .ok_or_else(|| Error::UnknownFile(id.to_string()))?;
        group.active_member_id = Some(id);
        self.active_group_id = Some(group.id.clone());
        self.active_file_id = Some(id);
        Ok(group.id.clone())
    }

    /// Adds an entry at the top of the file.
    ///
    /// The name must be non-empty and unique within the file; the value must
    /// be non-empty. Inputs are trimmed unless trimming is disabled.
    pub fn add_entry(
        &mut self,
        id: FileId,
        name: &str,
        value: &str,
        comment: &str,
    ) -> Result<(), Error> {
        let trim = self.options.trim_input;
        let name = normalize(name, trim);
        let value = normalize(value, trim);
        let comment = normalize(comment, trim);

        if name.trim().is_empty() {
            return Err(Error::validation_error("Name is required"));
        }
        if value.trim().is_empty() {
            return Err(Error::validation_error("Value is required"));
        }

        let record = self.file_mut(id)?;
        if record.has_entry(name) {
            return Err(Error::validation_error(format!(
                "Name `{}` already exists. Names must be unique.",
                name
            )));
        }
        record
            .entries
            .insert(0, ResourceEntry::new(name, value).with_comment(comment));
        debug!(file = %id, name, "added entry");
        self.refresh_dirty(id)
    }

    /// Replaces the value and comment of the entry called `name`.
    pub fn edit_entry(
        &mut self,
        id: FileId,
        name: &str,
        value: &str,
        comment: &str,
    ) -> Result<(), Error> {
        let trim = self.options.trim_input;
        let value = normalize(value, trim);
        let comment = normalize(comment, trim);
        if value.trim().is_empty() {
            return Err(Error::validation_error("Value is required"));
        }

        let record = self.file_mut(id)?;
        let file = record.display_file_name.clone();
        let entry = record
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::EntryNotFound {
                file,
                name: name.to_string(),
            })?;
        entry.value = value.to_string();
        entry.comment = comment.to_string();
        debug!(file = %id, name, "edited entry");
        self.refresh_dirty(id)
    }

    /// Removes the entry called `name` and returns it.
    pub fn delete_entry(&mut self, id: FileId, name: &str) -> Result<ResourceEntry, Error> {
        let record = self.file_mut(id)?;
        let position = record
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| Error::EntryNotFound {
                file: record.display_file_name.clone(),
                name: name.to_string(),
            })?;
        let removed = record.entries.remove(position);
        debug!(file = %id, name, "deleted entry");
        self.refresh_dirty(id)?;
        Ok(removed)
    }

    /// Replaces all rows of a file at once.
    pub fn set_entries(&mut self, id: FileId, entries: Vec<ResourceEntry>) -> Result<(), Error> {
        self.file_mut(id)?.entries = entries;
        self.refresh_dirty(id)
    }

    /// Files whose rows differ from what was loaded or last saved.
    pub fn modified_files(&self) -> Vec<&FileRecord> {
        self.files.iter().filter(|f| f.dirty).collect()
    }

    /// Serializes one file under the name it was loaded with.
    pub fn export(&self, id: FileId) -> Result<Export, Error> {
        let record = self
            .file(id)
            .ok_or_else(|| Error::UnknownFile(id.to_string()))?;
        Ok(Export {
            file_id: id,
            file_name: record.original_file_name.clone(),
            content: resx::build(&record.entries),
        })
    }

    /// Serializes every modified file.
    pub fn export_modified(&self) -> Vec<Export> {
        self.files
            .iter()
            .filter(|f| f.dirty)
            .map(|f| Export {
                file_id: f.id,
                file_name: f.original_file_name.clone(),
                content: resx::build(&f.entries),
            })
            .collect()
    }

    /// Records the current rows as saved.
    pub fn mark_saved(&mut self, id: FileId) -> Result<(), Error> {
        let record = self.file_mut(id)?;
        let entries = record.entries.clone();
        record.dirty = false;
        self.snapshots.insert(id, entries);
        Ok(())
    }

    /// Summary of files, groups and selection.
    pub fn report(&self) -> SessionReport {
        SessionReport::from_session(self)
    }

    fn refresh_dirty(&mut self, id: FileId) -> Result<(), Error> {
        let snapshot = self.snapshots.get(&id).cloned().unwrap_or_default();
        let record = self.file_mut(id)?;
        record.dirty = record.entries != snapshot;
        Ok(())
    }

    fn regroup(&mut self) {
        let mut groups = group_files(&self.files);

        self.chosen_members
            .retain(|group_id, id| groups.iter().any(|g| g.id == *group_id && g.contains(*id)));
        for group in &mut groups {
            if let Some(id) = self.chosen_members.get(&group.id) {
                group.active_member_id = Some(*id);
            }
        }
        self.groups = groups;

        let active_file_id = self.active_file_id;
        let active_group = self
            .active_group_id
            .as_deref()
            .and_then(|id| self.groups.iter_mut().find(|g| g.id == id));
        match active_group {
            Some(group) => match active_file_id.filter(|id| group.contains(*id)) {
                // The open file stays open and is what its group shows.
                Some(id) => group.active_member_id = Some(id),
                None => self.active_file_id = group.active_member_id,
            },
            None => match self.groups.first() {
                Some(first) => {
                    self.active_group_id = Some(first.id.clone());
                    self.active_file_id = first.active_member_id;
                }
                None => {
                    self.active_group_id = None;
                    self.active_file_id = None;
                }
            },
        }

        debug!(
            files = self.files.len(),
            groups = self.groups.len(),
            active_group = ?self.active_group_id,
            "regrouped files"
        );
    }
}

fn normalize(text: &str, trim: bool) -> &str {
    if trim { text.trim() } else { text }
}
