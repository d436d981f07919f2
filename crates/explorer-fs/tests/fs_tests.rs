//! Tests for the LocalFs collaborator primitives

use assert_fs::prelude::*;
use explorer_fs::{Error, FileSystem, LocalFs, NormalizedPath, RawEntry};
use predicates::prelude::*;

fn sorted(mut entries: Vec<RawEntry>) -> Vec<RawEntry> {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

#[test]
fn list_missing_directory_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = NormalizedPath::new(temp.path().join("nope"));

    let err = LocalFs.list_directory(&missing).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn create_file_and_dir() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = NormalizedPath::new(temp.path());

    LocalFs.create_file(&root.join("notes.md")).unwrap();
    LocalFs.create_dir(&root.join("docs")).unwrap();

    temp.child("notes.md").assert(predicate::path::is_file());
    temp.child("docs").assert(predicate::path::is_dir());
    assert_eq!(
        sorted(LocalFs.list_directory(&root).unwrap()),
        vec![RawEntry::dir("docs"), RawEntry::file("notes.md")]
    );
}

#[test]
fn create_file_refuses_to_overwrite() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("notes.md").write_str("keep me").unwrap();
    let root = NormalizedPath::new(temp.path());

    let err = LocalFs.create_file(&root.join("notes.md")).unwrap_err();

    assert!(matches!(err, Error::AlreadyExists { .. }));
    temp.child("notes.md").assert("keep me");
}

#[test]
fn rename_moves_entry() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("old.txt").write_str("data").unwrap();
    let root = NormalizedPath::new(temp.path());

    LocalFs.rename(&root.join("old.txt"), &root.join("new.txt")).unwrap();

    temp.child("old.txt").assert(predicate::path::missing());
    temp.child("new.txt").assert("data");
}

#[test]
fn remove_directory_recursively() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("build/out/app.js").write_str("x").unwrap();
    let root = NormalizedPath::new(temp.path());

    LocalFs.remove(&root.join("build")).unwrap();

    temp.child("build").assert(predicate::path::missing());
}

#[test]
fn copy_directory_recursively() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/components/Button.jsx").write_str("button").unwrap();
    temp.child("src/index.js").write_str("index").unwrap();
    let root = NormalizedPath::new(temp.path());

    LocalFs.copy(&root.join("src"), &root.join("src-copy")).unwrap();

    temp.child("src-copy/components/Button.jsx").assert("button");
    temp.child("src-copy/index.js").assert("index");
    temp.child("src/index.js").assert("index");
}

#[test]
fn copy_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("alpha").unwrap();
    let root = NormalizedPath::new(temp.path());

    LocalFs.copy(&root.join("a.txt"), &root.join("b.txt")).unwrap();

    temp.child("b.txt").assert("alpha");
}
