use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_code_snapshot"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code_snapshot"))
        .stdout(predicate::str::contains("--out-dir"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let ws = TempWorkspace::new();
    ws.cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input files given"));
    assert!(!ws.snapshot_path().exists());
}

#[test]
fn reports_count_and_locations() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "print(\"hi\")");
    ws.write_file("b.go", "package main");

    ws.cmd()
        .args(["a.py", "b.go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 section(s)"))
        .stdout(predicate::str::contains("snapshot.md"))
        .stdout(predicate::str::contains("Extension map:"))
        .stdout(predicate::str::contains("extension_map.md (2 extension(s))"))
        .stdout(predicate::str::contains("Skipped").not());
}

#[test]
fn missing_file_warns_and_continues() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd()
        .args(["ghost.rs", "a.py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: skipping 'ghost.rs'"))
        .stdout(predicate::str::contains("Wrote 1 section(s)"))
        .stdout(predicate::str::contains("Skipped 1 path(s)"));
}

#[cfg(target_os = "linux")]
#[test]
fn unreadable_file_warns_and_continues() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd()
        .args(["/proc/self/mem", "a.py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: skipping '/proc/self/mem': unreadable"))
        .stdout(predicate::str::contains("Wrote 1 section(s)"));
}

#[test]
fn directory_argument_is_skipped() {
    let ws = TempWorkspace::new();
    ws.write_file("src/lib.rs", "pub fn f() {}");

    ws.cmd()
        .args(["src", "src/lib.rs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a regular file"))
        .stdout(predicate::str::contains("Wrote 1 section(s)"));
}

#[test]
fn all_inputs_missing_fails_after_the_loop() {
    let ws = TempWorkspace::new();

    ws.cmd()
        .args(["nope.py", "nada.go"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("warning: skipping 'nope.py'"))
        .stderr(predicate::str::contains("warning: skipping 'nada.go'"))
        .stderr(predicate::str::contains("None of the 2 input path(s)"));

    assert_eq!(ws.read_snapshot(), "");
    assert_eq!(ws.read_map(), "");
}

#[test]
fn same_snapshot_and_map_name_is_refused() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd()
        .args(["--snapshot-name", "same.md", "--map-name", "same.md", "a.py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("would both be written to"))
        .stdout(predicate::str::contains("Wrote").not());
    assert!(!ws.path().join("out").exists());
}

#[test]
fn rust_log_overrides_verbosity() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd()
        .env("RUST_LOG", "info")
        .arg("a.py")
        .assert()
        .success()
        .stderr(predicate::str::contains("info: wrote 1 section(s)"));
}

#[test]
fn strict_mode_stops_on_missing_file() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd()
        .args(["--strict", "ghost.rs", "a.py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Skipped 'ghost.rs': no such file"));
}

#[test]
fn verbose_logs_fence_choice() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd()
        .args(["-vv", "a.py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("debug: a.py"))
        .stderr(predicate::str::contains("fence=3 backticks"));
}

#[test]
fn quiet_by_default_on_success() {
    let ws = TempWorkspace::new();
    ws.write_file("a.py", "x = 1");

    ws.cmd().arg("a.py").assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn malformed_mapping_is_rejected_by_parser() {
    let ws = TempWorkspace::new();
    ws.cmd()
        .args(["--map-ext", "cpp", "a.h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected EXT=VALUE"));
}
