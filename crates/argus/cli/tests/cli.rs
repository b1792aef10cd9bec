//! Binary smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

fn argus() -> Command {
    let mut cmd = Command::cargo_bin("argus").unwrap();
    // Keep the test hermetic against operator environments.
    for var in [
        "ARGUS_CONFIG",
        "ARGUS_ACCOUNT",
        "ARGUS_ENV",
        "ARGUS_SECRETS",
        "ARGUS_CONTROLLER_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_all_subcommands() {
    argus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("onboard"))
        .stdout(predicate::str::contains("update-thresholds"))
        .stdout(predicate::str::contains("create-health-rules"))
        .stdout(predicate::str::contains("teardown"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn missing_account_fails_before_any_network_call() {
    argus()
        .args(["--config", "/nonexistent/argus.toml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("account"));
}

#[test]
fn missing_secrets_path_fails_with_config_error() {
    argus()
        .args([
            "--config",
            "/nonexistent/argus.toml",
            "--account",
            "acme-prod",
            "--environment",
            "prod",
            "status",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("secrets"));
}
