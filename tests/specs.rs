//! Behavioral specifications for the acmatch CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;

const REFERENCE: [&str; 12] = [
    "-p", "a", "-p", "ab", "-p", "aca", "-p", "ba", "-p", "c", "-p", "cab",
];

// =============================================================================
// COMMAND SPECS
// =============================================================================

/// > acmatch (bare invocation) shows help
#[test]
fn bare_invocation_shows_help() {
    acmatch_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

/// > -V shows version
#[test]
fn short_version_flag_works() {
    acmatch_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

/// > Exit code 2 for unknown commands
#[test]
fn unknown_command_fails() {
    acmatch_cmd()
        .arg("unknown")
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unrecognized|unknown)").unwrap());
}

// =============================================================================
// SEARCH SPECS
// =============================================================================

/// > matches print as `start,end: word` in scan order
#[test]
fn search_stdin_prints_reference_lines() {
    let project = Project::empty();
    project
        .cmd()
        .arg("search")
        .args(REFERENCE)
        .write_stdin("caba")
        .assert()
        .success()
        .stdout("0,0: c\n1,1: a\n0,2: cab\n1,2: ab\n2,3: ba\n3,3: a\n");
}

/// > exit code 1 when nothing matches
#[test]
fn search_without_matches_exits_one() {
    let project = Project::empty();
    project
        .cmd()
        .args(["search", "-p", "zzz"])
        .write_stdin("caba")
        .assert()
        .code(1)
        .stdout("");
}

/// > offsets count characters, not bytes
#[test]
fn search_unicode_offsets() {
    let project = Project::empty();
    project
        .cmd()
        .args(["search", "-p", "llo"])
        .write_stdin("héllo")
        .assert()
        .success()
        .stdout("2,4: llo\n");
}

/// > multiple inputs are prefixed with their path
#[test]
fn search_multiple_files_prefix_source() {
    let project = Project::empty();
    project.file("one.txt", "she");
    project.file("two.txt", "nothing");

    project
        .cmd()
        .args(["search", "-p", "he", "one.txt", "two.txt"])
        .assert()
        .success()
        .stdout("one.txt:1,2: he\n");
}

/// > --count prints the number of matches
#[test]
fn search_count() {
    let project = Project::empty();
    project
        .cmd()
        .args(["search", "-p", "a", "--count"])
        .write_stdin("banana")
        .assert()
        .success()
        .stdout("3\n");
}

/// > -o json produces a JSON document
#[test]
fn search_json_output() {
    let project = Project::empty();
    let output = project
        .cmd()
        .args(["search", "-p", "he", "-p", "she", "-o", "json"])
        .write_stdin("ushers")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(json["total"], 2);
    assert_eq!(json["inputs"][0]["source"], "-");
    assert_eq!(json["inputs"][0]["matches"][0]["pattern"], "she");
    assert_eq!(json["inputs"][0]["matches"][0]["start"], 1);
    assert_eq!(json["inputs"][0]["matches"][1]["pattern"], "he");
}

/// > patterns can come from a file, one per line
#[test]
fn search_pattern_file() {
    let project = Project::empty();
    project.file("words.txt", "he\nshe\n\nhers\n");

    project
        .cmd()
        .args(["search", "-f", "words.txt", "--count"])
        .write_stdin("ushers")
        .assert()
        .success()
        .stdout("3\n");
}

/// > duplicate patterns report the later index unless --first-wins
#[test]
fn search_duplicate_policy() {
    let project = Project::empty();
    let index = |extra: &[&str]| {
        let output = project
            .cmd()
            .args(["search", "-p", "cat", "-p", "cat", "-o", "json"])
            .args(extra)
            .write_stdin("cat")
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        json["inputs"][0]["matches"][0]["index"].as_u64().unwrap()
    };

    assert_eq!(index(&[]), 1);
    assert_eq!(index(&["--first-wins"]), 0);
}

/// > no patterns at all is a usage error
#[test]
fn search_without_patterns_fails() {
    let project = Project::empty();
    project
        .cmd()
        .arg("search")
        .write_stdin("text")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no patterns"));
}

/// > a missing input file is reported
#[test]
fn search_missing_input_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["search", "-p", "a", "missing.txt"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("missing.txt"));
}

// =============================================================================
// CONFIG SPECS
// =============================================================================

/// > acmatch.toml supplies patterns and output format
#[test]
fn config_patterns_and_format() {
    let project = Project::with_config(
        r#"version = 1

[patterns]
words = ["he"]
files = ["lists/more.txt"]

[output]
format = "json"
"#,
    );
    project.file("lists/more.txt", "she\n");

    let output = project.cmd().arg("search").write_stdin("she").output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 2);
}

/// > -C points at an explicit config file
#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    let config = project.file("custom.toml", "version = 1\n[patterns]\nwords = [\"x\"]\n");

    project
        .cmd()
        .args(["-C", config.to_str().unwrap(), "search", "--count"])
        .write_stdin("xx")
        .assert()
        .success()
        .stdout("2\n");
}

/// > a missing explicit config is a config error
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["-C", "nope.toml", "search", "-p", "a"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > Unknown keys are warnings
#[test]
fn unknown_config_key_warns() {
    let project = Project::with_config("version = 1\nunknown_key = true\n");
    project
        .cmd()
        .args(["search", "-p", "a"])
        .write_stdin("a")
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `unknown_key`"));
}

/// > unsupported version is a config error
#[test]
fn unsupported_config_version_fails() {
    let project = Project::with_config("version = 7\n");
    project
        .cmd()
        .args(["search", "-p", "a"])
        .write_stdin("a")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

// =============================================================================
// STATS AND LOGGING SPECS
// =============================================================================

/// > stats reports dictionary and automaton sizes
#[test]
fn stats_reports_sizes() {
    let project = Project::empty();
    project
        .cmd()
        .arg("stats")
        .args(REFERENCE)
        .assert()
        .success()
        .stdout("patterns: 6\ndistinct: 6\nstates: 10\nmax depth: 3\n");
}

/// > ACMATCH_LOG=debug enables debug logging to stderr
#[test]
fn env_log_enables_debug() {
    let project = Project::empty();
    project
        .cmd()
        .args(["search", "-p", "a"])
        .env("ACMATCH_LOG", "debug")
        .write_stdin("a")
        .assert()
        .success()
        .stderr(predicates::str::contains("DEBUG").and(predicates::str::contains("compiled automaton")));
}
