//! Serializable snapshot of a session, for debugging and `--json` output.

use std::fmt::Display;

use serde::Serialize;

use crate::{
    classify::short_display_name,
    grouping::resolve_tags,
    session::Session,
    types::FileId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub file_count: usize,
    pub group_count: usize,
    /// Base name of the active group.
    pub active_group: Option<String>,
    /// Display name of the active file.
    pub active_file: Option<String>,
    pub files: Vec<FileSummary>,
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub id: FileId,
    pub file_name: String,
    pub base_name: String,
    pub locale_tag: String,
    pub entry_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub id: String,
    pub base_name: String,
    pub members: Vec<MemberSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub id: FileId,
    pub file_name: String,
    pub locale_tag: String,
    /// `Resources` for the default file, `French (France)` for `fr-FR`, etc.
    pub label: String,
    pub active: bool,
}

impl SessionReport {
    pub fn from_session(session: &Session) -> Self {
        let files: Vec<FileSummary> = session
            .files()
            .iter()
            .map(|record| {
                let tags = resolve_tags(record);
                FileSummary {
                    id: record.id,
                    file_name: record.display_file_name.clone(),
                    base_name: tags.base_name,
                    locale_tag: tags.locale_tag,
                    entry_count: record.entries.len(),
                    dirty: record.dirty,
                }
            })
            .collect();

        let groups = session
            .groups()
            .iter()
            .map(|group| GroupSummary {
                id: group.id.clone(),
                base_name: group.base_name.clone(),
                members: group
                    .members
                    .iter()
                    .filter_map(|id| files.iter().find(|f| f.id == *id))
                    .map(|file| MemberSummary {
                        id: file.id,
                        file_name: file.file_name.clone(),
                        locale_tag: file.locale_tag.clone(),
                        label: short_display_name(&file.file_name, &file.locale_tag),
                        active: group.active_member_id == Some(file.id),
                    })
                    .collect(),
            })
            .collect();

        SessionReport {
            file_count: files.len(),
            group_count: session.groups().len(),
            active_group: session.active_group().map(|g| g.base_name.clone()),
            active_file: session.active_file().map(|f| f.display_file_name.clone()),
            files,
            groups,
        }
    }
}

impl Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} files loaded, {} groups created",
            self.file_count, self.group_count
        )?;
        writeln!(
            f,
            "Active: {} / {}",
            self.active_group.as_deref().unwrap_or("none"),
            self.active_file.as_deref().unwrap_or("none")
        )?;

        writeln!(f, "\nLoaded files:")?;
        if self.files.is_empty() {
            writeln!(f, "  No files loaded")?;
        }
        for (i, file) in self.files.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} (base: {}, lang: {}){}",
                i + 1,
                file.file_name,
                file.base_name,
                file.locale_tag,
                if file.dirty { " *modified*" } else { "" }
            )?;
        }

        writeln!(f, "\nFile groups:")?;
        if self.groups.is_empty() {
            writeln!(f, "  No groups created")?;
        }
        for (i, group) in self.groups.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} ({} files)",
                i + 1,
                group.base_name,
                group.members.len()
            )?;
            for (j, member) in group.members.iter().enumerate() {
                writeln!(
                    f,
                    "     {}.{} {} ({}){}",
                    i + 1,
                    j + 1,
                    member.file_name,
                    member.locale_tag,
                    if member.active { " <- active" } else { "" }
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resx, types::ResourceEntry};

    #[test]
    fn test_report_of_empty_session() {
        let report = Session::new().report();
        assert_eq!(report.file_count, 0);
        assert!(report.active_group.is_none());
        let text = report.to_string();
        assert!(text.contains("No files loaded"));
        assert!(text.contains("No groups created"));
    }

    #[test]
    fn test_report_lists_groups_in_member_order() {
        let mut session = Session::new();
        let content = resx::build(&[ResourceEntry::new("k", "v")]);
        session.load(&content, "Resources.fr-FR.resx").unwrap();
        session.load(&content, "Resources.resx").unwrap();

        let report = session.report();
        assert_eq!(report.file_count, 2);
        assert_eq!(report.group_count, 1);
        assert_eq!(report.active_group.as_deref(), Some("Resources"));
        assert_eq!(report.active_file.as_deref(), Some("Resources.fr-FR.resx"));

        let members = &report.groups[0].members;
        assert_eq!(members[0].label, "Resources");
        assert_eq!(members[1].label, "French (France)");
        assert!(members[1].active);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["groups"][0]["id"], "group-Resources");
        assert_eq!(json["files"][0]["entry_count"], 1);
    }
}
