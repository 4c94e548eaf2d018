use super::*;
use std::fs;
use std::io::Read;
use tempfile::TempDir;
use zip::ZipArchive;

fn read_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn read_file(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    contents
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/nested")).unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();
    fs::write(dir.path().join("src/main.js"), "console.log(1);\n").unwrap();
    fs::write(dir.path().join("src/nested/deep.txt"), "deep").unwrap();
    fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();
    dir
}

#[test]
fn test_collect_entries_walk_order() {
    let dir = sample_tree();
    let entries = collect_entries(dir.path()).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.relative_path.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "README.md",
            "empty/",
            "src/",
            "src/main.js",
            "src/nested/",
            "src/nested/deep.txt"
        ]
    );
}

#[test]
fn test_collect_entries_kinds_and_bytes() {
    let dir = sample_tree();
    let entries = collect_entries(dir.path()).unwrap();

    let empty = entries.iter().find(|e| e.relative_path == "empty/").unwrap();
    assert!(empty.is_directory);
    assert_eq!(empty.bytes, None);
    assert_eq!(empty.size(), 0);

    let deep = entries
        .iter()
        .find(|e| e.relative_path == "src/nested/deep.txt")
        .unwrap();
    assert!(!deep.is_directory);
    assert_eq!(deep.bytes.as_deref(), Some(&b"deep"[..]));
}

#[test]
fn test_archive_preserves_empty_directories() {
    let dir = sample_tree();
    let bytes = archive(dir.path()).unwrap().bytes;
    let names = read_names(&bytes);

    assert!(names.contains(&"empty/".to_string()));
    assert!(names.contains(&"src/nested/".to_string()));
}

#[test]
fn test_archive_file_contents() {
    let dir = sample_tree();
    let bytes = archive(dir.path()).unwrap().bytes;

    assert_eq!(read_file(&bytes, "src/main.js"), "console.log(1);\n");
    assert_eq!(read_file(&bytes, "README.md"), "# Readme\n");
}

#[test]
fn test_archive_excludes_root_and_uses_forward_slashes() {
    let dir = sample_tree();
    let archived = archive(dir.path()).unwrap();
    assert_eq!(archived.entry_count, 6);
    let bytes = archived.bytes;

    for name in read_names(&bytes) {
        assert!(!name.contains('\\'), "backslash in {}", name);
        assert!(!name.starts_with('/'), "absolute entry {}", name);
        assert!(!name.is_empty());
    }
    assert_eq!(read_names(&bytes).len(), 6);
}

#[test]
fn test_archive_directory_entries_are_directories() {
    let dir = sample_tree();
    let bytes = archive(dir.path()).unwrap().bytes;
    let mut zip = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

    let empty = zip.by_name("empty/").unwrap();
    assert!(empty.is_dir());
    assert_eq!(empty.size(), 0);
}

#[test]
fn test_archive_empty_root_is_valid_zip() {
    let dir = TempDir::new().unwrap();
    let bytes = archive(dir.path()).unwrap().bytes;

    let zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(zip.len(), 0);
}

#[test]
fn test_write_zip_from_entries() {
    let entries = vec![
        ArchiveEntry::directory("docs/"),
        ArchiveEntry::file("docs/guide.txt", b"guide".to_vec()),
    ];
    let bytes = write_zip(&entries).unwrap();

    assert_eq!(read_names(&bytes), vec!["docs/", "docs/guide.txt"]);
    assert_eq!(read_file(&bytes, "docs/guide.txt"), "guide");
}

#[test]
fn test_archive_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = archive(&dir.path().join("missing"));
    assert!(matches!(result, Err(ArchiveError::Walk(_))));
}
