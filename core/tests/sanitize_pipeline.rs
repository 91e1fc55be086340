use std::fs;

use triage_core::error::CoreError;
use triage_core::sanitize::pipeline::{sanitize_file, sanitize_text};

const CONFLICTING: &str = r#"{"case":"c1","scenario":"s","failure_message":"f","slack_message":"m","commits":[{"hash":"abc123","author":{"name":"Bob"},"relevant_developers":[{"name":"Bob"}]}]}"#;

const CLEAN: &str = r#"{"case":"c1","scenario":"s","failure_message":"f","slack_message":"m","commits":[{"hash":"abc123","author":{"name":"Bob"},"relevant_developers":[{"name":"Carol"}]}]}"#;

const CLEAN_RENDERED: &str = r#"{
  "case": "c1",
  "commits": [
    {
      "author": {
        "name": "Bob"
      },
      "hash": "abc123",
      "relevant_developers": [
        {
          "name": "Carol"
        }
      ]
    }
  ],
  "failure_message": "f",
  "scenario": "s",
  "slack_message": "m"
}
"#;

#[test]
fn developer_matching_the_commit_author_fails_and_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    fs::write(&path, CONFLICTING).unwrap();

    let err = sanitize_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::Invariant { .. }));
    assert!(err
        .to_string()
        .contains("commits[0].relevant_developers[0]"));

    assert_eq!(fs::read_to_string(&path).unwrap(), CONFLICTING);
}

#[test]
fn clean_payload_is_rewritten_with_sorted_keys_and_two_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    fs::write(&path, CLEAN).unwrap();

    sanitize_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), CLEAN_RENDERED);
}

#[test]
fn sanitizing_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    fs::write(&path, CLEAN).unwrap();

    sanitize_file(&path).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    sanitize_file(&path).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sanitizing_stays_idempotent_when_person_fields_need_trimming() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    let raw = r#"{"case":"c1","scenario":"s","failure_message":"f","slack_message":"m","commits":[{"hash":"abc123","author":{"name":" @Bob ","login":" bob ","slack_id":"  "}}]}"#;
    fs::write(&path, raw).unwrap();

    sanitize_file(&path).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    assert!(first.contains("\"login\": \"bob\""));
    assert!(first.contains("\"name\": \"Bob\""));

    sanitize_file(&path).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn whitespace_only_login_never_reaches_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    let raw = r#"{"case":"c1","scenario":"s","failure_message":"f","slack_message":"m","commits":[{"hash":"abc123","author":{"name":"Bob","login":"   "}}]}"#;
    fs::write(&path, raw).unwrap();

    let err = sanitize_file(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "schema violation at commits[0].author.login: must be a non-empty string"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn wrapped_output_is_recovered_and_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    fs::write(&path, format!("<content>{}</content>", CLEAN)).unwrap();

    sanitize_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), CLEAN_RENDERED);
}

#[test]
fn mention_markers_count_against_the_author_identity() {
    let raw = r#"{"case":"c1","scenario":"s","failure_message":"f","slack_message":"m","commits":[{"hash":"abc123","author":{"name":"alice"},"relevant_developers":[{"name":"@Alice"}]}]}"#;
    let err = sanitize_text(raw).unwrap_err();
    assert!(matches!(err, CoreError::Invariant { .. }));
    assert!(err.to_string().contains("matches the author of commits[0]"));
}

#[test]
fn optional_fields_survive_the_rewrite() {
    let raw = r#"{"case":"c1","scenario":"s","failure_message":"f","slack_message":"m","notes":"","failing_run_url":"https://ci.example.com/run/7","commits":[],"relevant_files":["src/lib.rs"]}"#;
    let payload = sanitize_text(raw).unwrap();
    assert_eq!(payload.notes.as_deref(), Some(""));
    assert_eq!(
        payload.failing_run_url.as_deref(),
        Some("https://ci.example.com/run/7")
    );
    assert_eq!(
        payload.relevant_files.as_deref(),
        Some(&["src/lib.rs".to_string()][..])
    );
}

#[test]
fn unparseable_input_surfaces_the_last_candidate_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slack_message.json");
    fs::write(&path, "not json at all").unwrap();

    let err = sanitize_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
}
