#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn pwd_meter() -> Command {
    let mut cmd = Command::cargo_bin("pwd-meter").expect("binary should compile");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn console_is_the_default_driver() {
    pwd_meter()
        .write_stdin("Aa1!Aa1!Aa1!\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password Strength Meter"))
        .stdout(predicate::str::contains(
            "Password strength: Very Strong (score: 7/11)",
        ));
}

#[test]
fn console_reports_penalties() {
    pwd_meter()
        .arg("console")
        .write_stdin("qwertyyyy\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weak (score: -1/11)"))
        .stdout(predicate::str::contains("- ⚠️ Avoid the keyboard pattern 'qwerty'."));
}

#[test]
fn console_exit_sentinel_ignores_case() {
    pwd_meter()
        .arg("console")
        .write_stdin("ExIt\npassword\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password strength:").not());
}

#[test]
fn console_ends_cleanly_without_sentinel() {
    pwd_meter()
        .arg("console")
        .write_stdin("aaaaaaaa\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weak (score: 2/11)"));
}

#[test]
fn form_renders_masked_report() {
    pwd_meter()
        .arg("form")
        .write_stdin("Tr0ub4dorX\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your password here: **********"))
        .stdout(predicate::str::contains("Strong (score: 5/11)"))
        .stdout(predicate::str::contains("Tr0ub4dorX").not());
}

#[test]
fn form_without_input_shows_prompt() {
    pwd_meter()
        .arg("form")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter your password to check its strength.",
        ));
}

#[test]
fn quiet_conflicts_with_verbose() {
    pwd_meter()
        .args(["-q", "-v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
