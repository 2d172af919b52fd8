//! End-to-end tests for the `flowcli` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary inside an empty directory so no stray config is picked up
fn flowcli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flowcli").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn style_wraps_text_in_role_color() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["style", "command", "add"])
        .assert()
        .success()
        .stdout("\x1b[96madd\x1b[0m\n");
}

#[test]
fn no_color_prints_raw_text() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["--no-color", "style", "error", "bad", "input"])
        .assert()
        .success()
        .stdout("bad input\n");
}

#[test]
fn config_file_can_disable_colors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("flowcli.toml"), "[output]\ncolored = false\n").unwrap();

    flowcli(&dir)
        .args(["style", "success", "done"])
        .assert()
        .success()
        .stdout("done\n");
}

#[test]
fn missing_role_reports_default_message() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .arg("style")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "\x1b[91mHmm, looks like you forgot something! \x1b[0mMissing argument for the command.",
        ));
}

#[test]
fn missing_text_reports_detail_without_color() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["--no-color", "style", "task"])
        .assert()
        .code(1)
        .stderr(
            "[ERROR] Hmm, looks like you forgot something! \
             Tell me which text to style, e.g. flowcli style command add\n",
        );
}

#[test]
fn unknown_role_fails() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["--no-color", "style", "teal", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown role 'teal'"));
}

#[test]
fn palette_lists_all_roles() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["--no-color", "palette", "--sample", "Aa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. project     → Aa"))
        .stdout(predicate::str::contains("13. dim         → Aa"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir).args(["--no-color", "init"]).assert().success();

    let content = std::fs::read_to_string(dir.path().join("flowcli.toml")).unwrap();
    assert!(content.contains("colored = true"));

    flowcli(&dir)
        .args(["--no-color", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn broken_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("flowcli.toml"), "[output\n").unwrap();

    flowcli(&dir)
        .args(["--no-color", "palette"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file flowcli.toml"));
}

#[test]
fn init_force_rewrites_broken_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flowcli.toml");
    std::fs::write(&path, "[output\n").unwrap();

    flowcli(&dir)
        .args(["--no-color", "init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("colored = true"));
}

#[test]
fn init_failure_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let output = flowcli(&dir)
        .args(["--no-color", "--config", "nodir/flowcli.toml", "init"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    assert_eq!(stderr.matches("[ERROR]").count(), 1, "stderr was: {stderr}");
    assert!(stderr.contains("Failed to write config file nodir/flowcli.toml"));
}

#[test]
fn verbose_flag_shows_config_diagnostics() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["--no-color", "-v", "palette"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No config at flowcli.toml, using defaults"));
}

#[test]
fn verbose_from_config_takes_effect_after_loading() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("flowcli.toml"), "[output]\nverbose = true\n").unwrap();

    flowcli(&dir)
        .args(["--no-color", "palette"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dispatching"))
        .stderr(predicate::str::contains("Loaded config").not());
}

#[test]
fn quiet_run_keeps_stderr_empty() {
    let dir = TempDir::new().unwrap();
    flowcli(&dir)
        .args(["--no-color", "style", "info", "hi"])
        .assert()
        .success()
        .stderr("");
}
