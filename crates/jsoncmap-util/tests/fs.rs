use jsoncmap_util::fs::find_ancestor_with;
use std::fs;
use tempfile::TempDir;

#[test]
fn find_ancestor_with_finds_marker_in_parent() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".publish.env"), "A=1\n").unwrap();
    let nested = tmp.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();

    let found = find_ancestor_with(&nested, ".publish.env").unwrap();
    assert_eq!(found, tmp.path());
}

#[test]
fn find_ancestor_with_prefers_nearest_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("sub");
    fs::create_dir_all(&nested).unwrap();
    fs::write(tmp.path().join(".publish.env"), "A=outer\n").unwrap();
    fs::write(nested.join(".publish.env"), "A=inner\n").unwrap();

    let found = find_ancestor_with(&nested, ".publish.env").unwrap();
    assert_eq!(found, nested);
}

#[test]
fn find_ancestor_with_returns_none_when_absent() {
    let tmp = TempDir::new().unwrap();
    assert!(find_ancestor_with(tmp.path(), "no-such-marker-file").is_none());
}
