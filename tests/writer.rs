use std::fs;

use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use oui_compact::domain::OuiEntry;
use oui_compact::error::OuiError;
use oui_compact::writer::write_output;

fn entry(assignment: &str, org: &str) -> OuiEntry {
    OuiEntry::new(assignment.parse().unwrap(), org)
}

#[test]
fn write_creates_parents_and_overwrites() {
    let temp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    let path = root.join("src-tauri").join("resources").join("oui.csv");

    write_output(&path, &[entry("AABBCC", "Acme"), entry("112233", "Line\nBreak")]).unwrap();
    assert_eq!(
        fs::read_to_string(path.as_std_path()).unwrap(),
        "assignment,org\nAABBCC,Acme\n112233,\"Line\nBreak\"\n"
    );

    write_output(&path, &[entry("445566", "Say \"hi\"")]).unwrap();
    let content = fs::read_to_string(path.as_std_path()).unwrap();
    assert_eq!(content, "assignment,org\n445566,\"Say \"\"hi\"\"\"\n");
    assert!(!content.contains('\r'));
}

#[test]
fn write_into_file_as_directory_fails() {
    let temp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    let blocker = root.join("blocker");
    fs::write(blocker.as_std_path(), b"not a directory").unwrap();

    let err = write_output(&blocker.join("oui.csv"), &[entry("AABBCC", "Acme")]).unwrap_err();
    assert_matches!(err, OuiError::Filesystem(_));
}
