use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn libris(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.arg("--file").arg(data_file).env_remove("LIBRARY_FILE");
    cmd
}

#[test]
fn test_missing_file_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found. Starting with empty inventory."))
        .stdout(predicate::str::contains(" -- Inventory is empty --"))
        .stdout(predicate::str::contains("Goodbye!"));

    // Nothing was mutated, so nothing was written
    assert!(!data_file.exists());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");
    fs::write(&data_file, "{ definitely not a book list").unwrap();

    libris(&data_file)
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is corrupted. Starting empty."))
        .stdout(predicate::str::contains(" -- Inventory is empty --"));
}

#[test]
fn test_books_persist_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .write_stdin("1\nHarry Potter\nJ.K. Rowling\n123\n1\nDune\nFrank Herbert\n456\n4\n456\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added 'Harry Potter'"))
        .stdout(predicate::str::contains("Book Issued Successfully."));

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data_file).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!([
            {"title": "Harry Potter", "author": "J.K. Rowling", "isbn": "123", "status": "available"},
            {"title": "Dune", "author": "Frank Herbert", "isbn": "456", "status": "issued"}
        ])
    );

    libris(&data_file)
        .write_stdin("2\n5\n456\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 books from storage."))
        .stdout(predicate::str::contains("[ISSUED] Dune by Frank Herbert (ISBN: 456)"))
        .stdout(predicate::str::contains("Book Returned."))
        .stdout(predicate::str::contains("[AVAILABLE] Dune by Frank Herbert (ISBN: 456)"));
}

#[test]
fn test_file_uses_four_space_indent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .write_stdin("1\nEmma\nJane Austen\n9\n6\n")
        .assert()
        .success();

    let raw = fs::read_to_string(&data_file).unwrap();
    assert!(raw.contains("\n    {\n        \"title\": \"Emma\","));
}

#[test]
fn test_invalid_choice_and_errors_keep_running() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .write_stdin("x\n1\nA\nx\n1\n1\nB\ny\n1\n4\n7\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Book with ISBN 1 already exists."))
        .stdout(predicate::str::contains("Book not found: ISBN 7"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .write_stdin("1\nHarry Potter\nJ.K. Rowling\n123\n3\nharry\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[AVAILABLE] Harry Potter by J.K. Rowling (ISBN: 123)"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_env_var_selects_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("from-env.json");

    Command::cargo_bin("libris")
        .unwrap()
        .current_dir(temp_dir.path())
        .env("LIBRARY_FILE", &data_file)
        .write_stdin("1\nEmma\nJane Austen\n9\n6\n")
        .assert()
        .success();

    assert!(data_file.exists());
    assert!(!temp_dir.path().join("library.json").exists());
}

#[test]
fn test_default_file_in_working_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("libris")
        .unwrap()
        .current_dir(temp_dir.path())
        .env_remove("LIBRARY_FILE")
        .write_stdin("1\nEmma\nJane Austen\n9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'library.json' not found"));

    assert!(temp_dir.path().join("library.json").exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    libris(&data_file)
        .arg("--verbose")
        .write_stdin("1\nEmma\nJane Austen\n9\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("event=book_add"))
        .stdout(predicate::str::contains("event=").not());
}
