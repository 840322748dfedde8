use resxkit::{FileGroup, Session, grouping::resolve_tags, short_display_name};
use unicode_width::UnicodeWidthChar;

/// Column budget for values and comments unless `--full` is passed.
pub const MAX_VALUE_WIDTH: usize = 50;

/// Cut `value` to at most `max_width` terminal columns, marking the cut with `...`.
pub fn truncate_to_width(value: &str, max_width: usize) -> String {
    let mut width = 0;
    for (i, ch) in value.char_indices() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            return format!("{}...", &value[..i]);
        }
        width += w;
    }
    value.to_string()
}

fn display_value(value: &str, full: bool) -> String {
    if full {
        value.to_string()
    } else {
        truncate_to_width(value, MAX_VALUE_WIDTH)
    }
}

/// Groups to show: all of them, or the one whose base name is `group_filter`.
pub fn select_groups<'a>(
    session: &'a Session,
    group_filter: Option<&str>,
) -> Result<Vec<&'a FileGroup>, String> {
    match group_filter {
        None => Ok(session.groups().iter().collect()),
        Some(base) => session
            .groups()
            .iter()
            .find(|g| g.base_name == base)
            .map(|g| vec![g])
            .ok_or_else(|| format!("No group named '{}'", base)),
    }
}

/// Print a view of the groups and entries in a session.
pub fn print_view(session: &Session, group_filter: Option<&str>, full: bool) -> Result<(), String> {
    let groups = select_groups(session, group_filter)?;
    if groups.is_empty() {
        return Err("No resources found".to_string());
    }

    println!("✅ Found {} group(s)", groups.len());

    for (i, group) in groups.iter().enumerate() {
        println!("\n=== Group {}: {} ===", i + 1, group.base_name);
        println!("Files: {}", group.members.len());

        for id in &group.members {
            let Some(record) = session.file(*id) else {
                continue;
            };
            let tags = resolve_tags(record);
            println!(
                "\n  --- {} [{}] ---",
                short_display_name(&record.display_file_name, &tags.locale_tag),
                record.display_file_name
            );
            println!("  Entries: {}", record.entries.len());

            for (j, entry) in record.entries.iter().enumerate() {
                println!("\n    Entry {}: {}", j + 1, entry.name);
                println!("      Value: {}", display_value(&entry.value, full));
                if !entry.comment.is_empty() {
                    println!("      Comment: {}", display_value(&entry.comment, full));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resxkit::{ResourceEntry, resx};

    #[test]
    fn test_short_values_are_untouched() {
        assert_eq!(truncate_to_width("Hello", 50), "Hello");
        assert_eq!(truncate_to_width("", 50), "");
    }

    #[test]
    fn test_truncates_by_columns() {
        let long = "a".repeat(60);
        assert_eq!(truncate_to_width(&long, 50), format!("{}...", "a".repeat(50)));

        // Each ideograph takes two columns.
        let wide = "日本語のテキスト";
        assert_eq!(truncate_to_width(wide, 6), "日本語...");
    }

    #[test]
    fn test_select_groups() {
        let content = resx::build(&[ResourceEntry::new("k", "v")]);
        let mut session = Session::new();
        session.load(&content, "Resources.resx").unwrap();
        session.load(&content, "Errors.de.resx").unwrap();

        assert_eq!(select_groups(&session, None).unwrap().len(), 2);
        let only = select_groups(&session, Some("Errors")).unwrap();
        assert_eq!(only[0].base_name, "Errors");
        assert!(select_groups(&session, Some("Missing")).is_err());
    }
}
