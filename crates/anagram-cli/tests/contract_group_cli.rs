use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn anagram() -> Command {
    let mut cmd = Command::cargo_bin("anagram").unwrap();
    cmd.env_remove("ANAGRAM_FORMAT")
        .env_remove("ANAGRAM_INPUT_FORMAT")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn group_text_from_stdin_in_first_seen_order() {
    anagram()
        .arg("group")
        .write_stdin("eat\ntea\ntan\nate\nnat\nbat\n")
        .assert()
        .success()
        .stdout("eat tea ate\ntan nat\nbat\n");
}

#[test]
fn group_json_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("words.json");
    fs::write(&input, r#"["", "a", "ab", "ba"]"#).unwrap();

    let out = anagram()
        .arg("group")
        .arg(&input)
        .args(["--input-format", "json", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).expect("stdout must be JSON");
    assert_eq!(v, serde_json::json!([[""], ["a"], ["ab", "ba"]]));
}

#[test]
fn group_writes_output_file_with_keys() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("words.yaml");
    let output = dir.path().join("groups.json");
    fs::write(&input, "- tan\n- bat\n- nat\n").unwrap();

    anagram()
        .arg("group")
        .arg(&input)
        .args(["--input-format", "yaml", "--format", "json", "--with-keys", "--order", "size"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let v: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        v,
        serde_json::json!([
            {"key": "ant", "members": ["tan", "nat"]},
            {"key": "abt", "members": ["bat"]}
        ])
    );
}

#[test]
fn empty_input_prints_nothing() {
    anagram()
        .arg("group")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn malformed_json_exits_with_input_error() {
    anagram()
        .args(["group", "--input-format", "json"])
        .write_stdin("{not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse word list"));
}

#[test]
fn missing_file_exits_with_input_error() {
    let dir = tempdir().unwrap();
    anagram()
        .arg("group")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read word list"));
}

#[test]
fn format_can_come_from_env() {
    let out = anagram()
        .arg("group")
        .env("ANAGRAM_FORMAT", "json")
        .write_stdin("ab\nba\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, serde_json::json!([["ab", "ba"]]));
}

#[test]
fn bytes_flag_merges_words_with_equal_utf8_bytes() {
    let out = anagram()
        .args(["group", "--bytes", "--format", "json"])
        .write_stdin("éģ\nãĩ\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, serde_json::json!([["éģ", "ãĩ"]]));

    anagram()
        .arg("group")
        .write_stdin("éģ\nãĩ\n")
        .assert()
        .success()
        .stdout("éģ\nãĩ\n");
}

#[test]
fn unspecified_order_yields_same_groups() {
    let out = anagram()
        .args(["group", "--order", "unspecified", "--format", "json"])
        .write_stdin("eat\ntea\ntan\nate\nnat\nbat\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let mut groups: Vec<Vec<String>> = serde_json::from_slice(&out).unwrap();
    groups.sort();
    assert_eq!(
        groups,
        vec![
            vec!["bat".to_string()],
            vec!["eat".to_string(), "tea".to_string(), "ate".to_string()],
            vec!["tan".to_string(), "nat".to_string()],
        ]
    );
}

#[test]
fn input_format_can_come_from_env() {
    anagram()
        .arg("group")
        .env("ANAGRAM_INPUT_FORMAT", "json")
        .write_stdin(r#"["no", "on", "ox"]"#)
        .assert()
        .success()
        .stdout("no on\nox\n");
}

#[test]
fn version_prints_package_version() {
    anagram()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
