//! Integration tests for note commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::assistant_cmd;

const NOTES: &str = "add note\nBuy milk\nshopping, Home\n\
                     add note\nCall plumber\nhome todo\n\
                     add note\nQuarterly report\n\n";

#[test]
fn test_show_notes_empty() {
    let temp = TempDir::new().unwrap();

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin("show notes\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn test_notes_persist_with_and_without_tags() {
    let temp = TempDir::new().unwrap();

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin(format!("{}exit\n", NOTES))
        .assert()
        .success();

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin("show notes\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Buy milk  [shopping, Home]"))
        .stdout(predicate::str::contains("2. Call plumber  [home, todo]"))
        .stdout(predicate::str::contains("3. Quarterly report\n"))
        .stdout(predicate::str::contains("Tags: #Home #home #shopping #todo"));
}

#[test]
fn test_search_text_ignores_case_but_tags_do_not() {
    let temp = TempDir::new().unwrap();

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin(format!("{}search note\nREPORT\nexit\n", NOTES))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Quarterly report"));

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin("search note\nTODO\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_edit_updates_every_match() {
    let temp = TempDir::new().unwrap();

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin(format!("{}edit note\nHOME\n\nhouse\nexit\n", NOTES))
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated."));

    let saved = fs::read_to_string(temp.path().join("notes.toml")).unwrap();
    assert_eq!(saved.matches("house").count(), 2);
    assert!(!saved.contains("todo"));
}

#[test]
fn test_delete_by_shared_tag_counts_removals() {
    let temp = TempDir::new().unwrap();

    assistant_cmd()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin(format!(
            "{}edit note\nhome\n\nhome\ndelete note\nhome\ndelete note\nnothing\nexit\n",
            NOTES
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 note(s)."))
        .stdout(predicate::str::contains("Note not found: nothing"));

    let saved = fs::read_to_string(temp.path().join("notes.toml")).unwrap();
    assert!(saved.contains("Quarterly report"));
    assert!(!saved.contains("Buy milk"));
}
