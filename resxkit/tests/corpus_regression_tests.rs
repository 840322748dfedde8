use resxkit::traits::Parser;
use resxkit::{Error, ResourceEntry, ResxDocument, Session, resx};
use std::path::{Path, PathBuf};

fn corpus_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn expected_base_entries() -> Vec<ResourceEntry> {
    vec![
        ResourceEntry::new("WelcomeMessage", "Hello, World!").with_comment("Shown on the start page"),
        ResourceEntry::new("XmlEntities", "Use <tag> & value"),
        ResourceEntry::new("AccentText", "Café crème brûlée"),
        ResourceEntry::new("MultiLine", "First line\nSecond line"),
    ]
}

#[test]
fn visual_studio_file_with_bom_parses_entries_only() {
    let document = ResxDocument::read_from(corpus_root().join("Resources.resx")).unwrap();
    assert_eq!(document.entries, expected_base_entries());
}

#[test]
fn data_without_name_is_skipped() {
    let document = ResxDocument::read_from(corpus_root().join("Errors_de.resx")).unwrap();
    assert_eq!(
        document.entries,
        vec![ResourceEntry::new("NotFound", "Nicht gefunden")]
    );
}

#[test]
fn truncated_file_is_malformed() {
    let result = ResxDocument::read_from(corpus_root().join("Broken.resx"));
    assert!(matches!(result, Err(Error::MalformedDocument(_))));
}

#[test]
fn written_file_reads_back_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("Resources.resx");

    let document = ResxDocument::read_from(corpus_root().join("Resources.resx")).unwrap();
    document.write_to(&output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(!written.starts_with('\u{feff}'));
    assert_eq!(written, resx::build(&expected_base_entries()));

    let reread = ResxDocument::read_from(&output).unwrap();
    assert_eq!(reread, document);
}

#[test]
fn session_groups_corpus_files() {
    let mut session = Session::new();
    for name in ["Resources.fr-FR.resx", "Errors_de.resx", "Resources.resx"] {
        session.load_path(corpus_root().join(name)).unwrap();
    }

    let groups = session.groups();
    let bases: Vec<_> = groups.iter().map(|g| g.base_name.as_str()).collect();
    assert_eq!(bases, ["Resources", "Errors"]);

    let resources = &groups[0];
    let locales: Vec<_> = resources
        .members
        .iter()
        .map(|id| session.file(*id).unwrap().locale_tag.clone().unwrap())
        .collect();
    assert_eq!(locales, ["default", "fr-FR"]);

    // The first file loaded stays selected.
    assert_eq!(
        session.active_file().unwrap().display_file_name,
        "Resources.fr-FR.resx"
    );
}

#[test]
fn session_rejects_broken_file_without_side_effects() {
    let mut session = Session::new();
    session.load_path(corpus_root().join("Resources.resx")).unwrap();

    let err = session.load_path(corpus_root().join("Broken.resx")).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
    assert_eq!(session.files().len(), 1);
    assert_eq!(session.groups().len(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let mut session = Session::new();
    let err = session.load_path(corpus_root().join("DoesNotExist.resx")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn invalid_utf8_is_rejected_by_every_load_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("Latin1.resx");
    std::fs::write(
        &path,
        b"<root><data name=\"Cafe\"><value>Caf\xe9</value></data></root>",
    )
    .unwrap();

    let document = ResxDocument::read_from(&path);
    assert!(matches!(document, Err(Error::MalformedDocument(_))));

    let mut session = Session::new();
    let err = session.load_path(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
    assert!(session.files().is_empty());
}
