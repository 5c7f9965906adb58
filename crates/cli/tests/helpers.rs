use std::path::Path;

use ipconf::{canonicalize_or_current, resolve_against_root};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_directory() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    std::fs::create_dir_all(&nested).expect("create nested");

    let result = canonicalize_or_current(&nested.to_string_lossy()).expect("canonicalize");
    assert_eq!(result, nested.canonicalize().expect("canonicalize nested"));
}

#[test]
fn canonicalize_or_current_joins_missing_relative_path_with_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    let result = canonicalize_or_current("does-not-exist-yet").expect("fallback");
    assert_eq!(result, cwd.join("does-not-exist-yet"));
}

#[test]
fn resolve_against_root_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let absolute = tmp.path().join("design.yaml");
    let root = Path::new("/some/root");
    assert_eq!(resolve_against_root(root, &absolute.to_string_lossy()), absolute);
    assert_eq!(resolve_against_root(root, "sub/design.yaml"), root.join("sub/design.yaml"));
}
