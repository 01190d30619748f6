use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("backend-probe").unwrap()
}

#[test]
fn help_describes_checks() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("CORS preflight"))
        .stdout(contains("--verbose"));
}

#[test]
fn version_flag() {
    cmd().arg("--version").assert().success().stdout(contains("backend-probe"));
}

#[test]
fn rejects_target_arguments() {
    cmd().arg("http://localhost:9999").assert().failure();
}
