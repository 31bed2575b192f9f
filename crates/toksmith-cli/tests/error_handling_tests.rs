//! Error-path integration tests: every failure must abort loudly, with an
//! actionable message and the right exit code, and must never leave partial
//! output behind.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn toksmith() -> Command {
    Command::cargo_bin("toksmith").unwrap()
}

#[test]
fn missing_source_exits_not_found() {
    let temp = TempDir::new().unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["build", "missing.def"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("toksmith init"));
}

#[test]
fn assignment_before_marker_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tokens.def"), "FONT_SIZE_BASE = 16px\n").unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["check", "tokens.def"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("before any group marker"))
        .stderr(predicate::str::contains("// Token:"));
}

#[test]
fn duplicate_variant_reports_group_and_key() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tokens.def"),
        "// Token: GAP\nGAP_BASE = 16px\nGAP_BASE = 24px\n",
    )
    .unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["check", "tokens.def"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("duplicate variant 'base'"))
        .stderr(predicate::str::contains("'gap'"));
}

#[test]
fn malformed_line_reports_line_number() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tokens.def"),
        "// Token: GAP\nGAP_BASE = 16px\nnot an assignment\n",
    )
    .unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["check", "tokens.def"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn ambiguous_alias_is_fatal_at_load_time() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tokens.def"), "// Token: GAP\nGAP_BASE = 16px\n").unwrap();
    fs::write(
        temp.path().join("deprecated.json"),
        r#"{ "gap-base": ["gap-size-4"], "gap-large": ["gap-size-4"] }"#,
    )
    .unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["check", "tokens.def", "--aliases", "deprecated.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("aliased by both"));
}

#[test]
fn stale_alias_target_fails_build_without_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tokens.def"), "// Token: GAP\nGAP_BASE = 16px\n").unwrap();
    fs::write(
        temp.path().join("deprecated.json"),
        r#"{ "content-color-base": ["content-color-1"] }"#,
    )
    .unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["build", "tokens.def", "--aliases", "deprecated.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("content-color-base"))
        .stderr(predicate::str::contains("does not exist"));

    // Validation failed before rendering; nothing may be on disk.
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn unknown_variant_lists_alternatives_and_aborts() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tokens.def"),
        "// Token: FONT_SIZE\nFONT_SIZE_BASE = 16px\nFONT_SIZE_LARGE = 24px\n",
    )
    .unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["resolve", "tokens.def", "fontSize", "huge"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("'huge'"))
        .stderr(predicate::str::contains("'fontSize'"))
        .stderr(predicate::str::contains("base, large"));
}

#[test]
fn namespaced_scheme_without_prefix_suggests_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tokens.def"), "// Token: GAP\nGAP_BASE = 16px\n").unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["build", "tokens.def", "--scheme", "namespaced"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--prefix"));
}

#[test]
fn prefix_collision_in_document_source() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tokens.json"),
        r#"{
            "gap": { "name": "gap-size", "items": { "base": "16px" } },
            "gapSize": { "name": "gap-size", "items": { "base": "16px" } }
        }"#,
    )
    .unwrap();

    toksmith()
        .current_dir(temp.path())
        .args(["check", "tokens.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("gap-size"));
}
