use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cargo_bin() -> &'static str {
    "localemend"
}

fn seed_tree(dir: &std::path::Path) {
    let en = dir.join("en");
    let sk = dir.join("sk");
    fs::create_dir_all(&en).unwrap();
    fs::create_dir_all(&sk).unwrap();
    fs::write(en.join("common.json"), "{\"hello\": \"Hello\"}").unwrap();
    fs::write(sk.join("common.json"), "{\"hello\": \"Ahoj\",}").unwrap();
    fs::write(sk.join("pages.json"), "not json at all").unwrap();
}

#[test]
fn sweep_fixes_broken_files_and_exits_zero_despite_failures() {
    let dir = tempdir().unwrap();
    seed_tree(dir.path());
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fixed (trailing-commas)"))
        .stdout(predicate::str::contains("FAILED:"))
        .stdout(predicate::str::contains(
            "summary: 1 valid, 1 fixed, 1 failed, 3 total",
        ));
    // the fixable file was rewritten and now parses
    let fixed = fs::read_to_string(dir.path().join("sk/common.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
    assert_eq!(v["hello"], "Ahoj");
    // the unrecoverable file kept its bytes
    let broken = fs::read_to_string(dir.path().join("sk/pages.json")).unwrap();
    assert_eq!(broken, "not json at all");
}

#[test]
fn verify_exits_one_while_invalid_files_remain() {
    let dir = tempdir().unwrap();
    seed_tree(dir.path());
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--verify"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("2 invalid"));
}

#[test]
fn verify_exits_zero_when_everything_parses() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.json"), "{\"a\": \"1\"}").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--verify"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("all 1 files parse cleanly"));
}

#[test]
fn dry_run_reports_but_leaves_bytes_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fix.json");
    fs::write(&path, "{\"a\": \"1\",}").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--dry-run"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("fixed"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\": \"1\",}");
}

#[test]
fn no_salvage_leaves_scrambled_files_failed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scrambled.json");
    let scrambled = "@@@\n\"x\": \"1\"\n\"y\": \"2\"\n@@@";
    fs::write(&path, scrambled).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--no-salvage"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("FAILED:"));
    assert_eq!(fs::read_to_string(&path).unwrap(), scrambled);
}

#[test]
fn ensure_ascii_escapes_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sk.json");
    fs::write(&path, "{\"thanks\": \"ďakujem\",}").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--ensure-ascii"])
        .arg(&path)
        .assert()
        .success();
    let out = fs::read_to_string(&path).unwrap();
    assert!(out.is_ascii());
    assert!(out.contains("\\u"));
}

#[test]
fn unknown_option_exits_two() {
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn help_mentions_the_default_tree() {
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("public/locales"));
}
