//! End-to-end tests for the `plan` command.
//!
//! These tests invoke the actual CLI binary against configuration files in a
//! temporary directory.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_plan_lists_logins_for_each_server() {
    let fixture = TestFixture::new().with_config(configs::FULL);

    fixture
        .command()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("node1 -> deploy@10.0.0.1"))
        .stdout(predicate::str::contains("node2 -> deploy@10.0.0.2"))
        .stdout(predicate::str::contains("/srv/crypti/0.2.1"))
        .stdout(predicate::str::contains("crypti-linux-0.2.1.zip"))
        .stdout(predicate::str::contains("sequential, 0ms delay"));
}

#[test]
fn test_plan_without_servers() {
    let fixture = TestFixture::new().with_config(configs::MINIMAL);

    fixture
        .command()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("hosts: none"));
}

#[test]
fn test_plan_json() {
    let fixture = TestFixture::new().with_config(configs::FULL);

    let output = fixture
        .command()
        .args(["plan", "--json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan --json should print JSON");
    assert_eq!(json["install_path"], "/srv/crypti/0.2.1");
    assert_eq!(json["hosts"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        json["os_package_conflicts"],
        serde_json::json!(["nodejs", "nodejs-legacy", "npm"])
    );
}

#[test]
fn test_plan_config_from_env() {
    let fixture = TestFixture::new().with_file("deploy.yml", configs::FULL);

    fixture
        .command()
        .env("CRYPTI_KIT_CONFIG", fixture.path().join("deploy.yml"))
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy@10.0.0.1"));
}

#[test]
fn test_plan_missing_config_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"))
        .stderr(predicate::str::contains("config.yml"));
}

#[test]
fn test_plan_invalid_yaml_fails() {
    let fixture = TestFixture::new().with_config(configs::INVALID_YAML);

    fixture.command().arg("plan").assert().failure();
}
