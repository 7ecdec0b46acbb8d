use std::fs;
use std::path::PathBuf;

use santa_ingest::{
    HeaderMode, IngestError, IngestOptions, read_history, read_roster, read_roster_with_options,
};
use santa_model::{Participant, PriorAssignment};

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_roster_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "employees.csv",
        "name,email,secretChildName,secretChildEmail\r\n\
         Alice,a@x,,\r\n\
         \"Bob, Jr.\",b@x,,\r\n\
         Cara,c@x,,\r\n\
         ,,,\r\n",
    );
    let roster = read_roster(&path).expect("read roster");
    assert_eq!(
        roster,
        vec![
            Participant::new("Alice", "a@x"),
            Participant::new("Bob, Jr.", "b@x"),
            Participant::new("Cara", "c@x"),
        ]
    );
}

#[test]
fn reads_previous_output_as_history() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "SecretSantaAssignments.csv",
        "name,email,secretChildName,secretChildEmail\n\
         Alice,a@x,Cara,c@x\n\
         Bob,b@x,Alice,a@x\n\
         Cara,c@x,Bob,b@x\n",
    );
    let history = read_history(&path).expect("read history");
    assert_eq!(history.len(), 3);
    assert_eq!(history[0], PriorAssignment::new("a@x", "c@x"));
    assert_eq!(history[2], PriorAssignment::new("c@x", "b@x"));
}

#[test]
fn previous_output_also_reads_as_roster() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "last_year.csv",
        "name,email,secretChildName,secretChildEmail\nAlice,a@x,Bob,b@x\nBob,b@x,Alice,a@x\n",
    );
    let roster = read_roster(&path).expect("read roster");
    assert_eq!(roster[1], Participant::new("Bob", "b@x"));
}

#[test]
fn absent_header_mode_keeps_header_like_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "odd.csv", "name,email\nAlice,a@x\n");
    let options = IngestOptions::default().with_header(HeaderMode::Absent);
    let roster = read_roster_with_options(&path, options).expect("read roster");
    assert_eq!(roster[0], Participant::new("name", "email"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_roster(&dir.path().join("nope.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
