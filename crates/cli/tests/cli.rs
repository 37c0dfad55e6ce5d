use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn config_init_writes_example_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");

    let mut cmd = cargo_bin_cmd!("news-herald");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).expect("read config");
    assert!(content.contains("interval_hours = 4"));
    assert!(content.contains("api_key_env"));

    // The example must round-trip through the TOML parser
    let parsed: Value = toml_to_json(&content);
    assert!(parsed.get("feeds").is_some());
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write_config(&dir, "[general]\nlog_level = \"debug\"\n");

    let mut cmd = cargo_bin_cmd!("news-herald");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn run_once_dry_run_with_no_feeds_is_a_no_op() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write_config(&dir, "[feeds]\nurls = []\n");

    let mut cmd = cargo_bin_cmd!("news-herald");
    cmd.args(["run", "--once", "--dry-run", "--config"])
        .arg(&config_path)
        .assert()
        .success();
}

#[test]
fn profile_fails_fast_when_credentials_are_missing() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write_config(
        &dir,
        r#"[x]
api_key_env = "NEWS_HERALD_TEST_MISSING_KEY"
api_secret_env = "NEWS_HERALD_TEST_MISSING_SECRET"
access_token_env = "NEWS_HERALD_TEST_MISSING_TOKEN"
access_token_secret_env = "NEWS_HERALD_TEST_MISSING_TOKEN_SECRET"
"#,
    );

    let mut cmd = cargo_bin_cmd!("news-herald");
    cmd.args(["profile", "--handle", "someone", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEWS_HERALD_TEST_MISSING_KEY"));
}

#[test]
fn doctor_reports_missing_credentials_as_json() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write_config(
        &dir,
        r#"[feeds]
urls = ["https://news.example/rss"]

[x]
api_key_env = "NEWS_HERALD_TEST_MISSING_KEY"
api_secret_env = "NEWS_HERALD_TEST_MISSING_SECRET"
access_token_env = "NEWS_HERALD_TEST_MISSING_TOKEN"
access_token_secret_env = "NEWS_HERALD_TEST_MISSING_TOKEN_SECRET"
"#,
    );

    let mut cmd = cargo_bin_cmd!("news-herald");
    let output = cmd
        .args(["doctor", "--json", "--config"])
        .arg(&config_path)
        .output()
        .expect("run doctor");

    assert!(!output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["feeds"]["status"], "ok");
    assert_eq!(value["credentials"]["status"], "error");
    assert_eq!(value["overall"], "error");
}

fn toml_to_json(content: &str) -> Value {
    let parsed: toml::Value = toml::from_str(content).expect("valid toml");
    serde_json::to_value(parsed).expect("toml to json")
}
