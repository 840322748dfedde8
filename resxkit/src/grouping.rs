//! Groups loaded files that share a base name.
//!
//! The grouping is a projection of the file list. Callers rebuild it from
//! scratch whenever the list changes: renaming one file can move it into
//! another group and reorder both.

use std::{cmp::Ordering, collections::HashMap};

use crate::{
    classify::{Classification, classify},
    types::{DEFAULT_LOCALE, FileGroup, FileId, FileRecord},
};

/// Returns the record's base name and locale tag, classifying its display
/// name when either is missing.
pub fn resolve_tags(record: &FileRecord) -> Classification {
    match (&record.base_name, &record.locale_tag) {
        (Some(base_name), Some(locale_tag)) => Classification {
            base_name: base_name.clone(),
            locale_tag: locale_tag.clone(),
        },
        _ => classify(&record.display_file_name),
    }
}

/// Orders locale tags for display: the default locale first, the rest by
/// ascending byte-wise comparison.
pub fn compare_locale_tags(a: &str, b: &str) -> Ordering {
    match (a == DEFAULT_LOCALE, b == DEFAULT_LOCALE) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Partitions `files` into groups keyed by base name.
///
/// Groups appear in the order their base name first occurs in `files`.
/// Members are sorted with [`compare_locale_tags`]; the sort is stable, so
/// records with equal tags keep their input order. Each group's active
/// member is its first member.
pub fn group_files(files: &[FileRecord]) -> Vec<FileGroup> {
    let mut order: Vec<(String, Vec<(String, FileId)>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in files {
        let Classification {
            base_name,
            locale_tag,
        } = resolve_tags(record);
        let slot = *index.entry(base_name.clone()).or_insert_with(|| {
            order.push((base_name, Vec::new()));
            order.len() - 1
        });
        order[slot].1.push((locale_tag, record.id));
    }

    order
        .into_iter()
        .map(|(base_name, mut members)| {
            members.sort_by(|(a, _), (b, _)| compare_locale_tags(a, b));
            let members: Vec<FileId> = members.into_iter().map(|(_, id)| id).collect();
            FileGroup {
                id: FileGroup::group_id_for(&base_name),
                active_member_id: members.first().copied(),
                base_name,
                members,
            }
        })
        .collect()
}
