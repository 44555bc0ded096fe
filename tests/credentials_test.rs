use odyssey_project::{read_credentials, ConfigError};
use std::path::Path;

#[test]
fn test_trims_and_drops_blank_lines_preserving_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.txt");
    std::fs::write(&path, "  first \n\n second\n\t\nthird").unwrap();

    let credentials = read_credentials(&path).unwrap();

    assert_eq!(credentials, vec!["first", "second", "third"]);
}

#[test]
fn test_empty_file_yields_no_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.txt");
    std::fs::write(&path, "\n\n  \n").unwrap();

    assert!(read_credentials(&path).unwrap().is_empty());
}

#[test]
fn test_missing_file_is_config_error() {
    let err = read_credentials(Path::new("no/such/dir/query.txt")).unwrap_err();

    match err {
        ConfigError::FileNotFound { path } => assert!(path.contains("query.txt")),
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}
