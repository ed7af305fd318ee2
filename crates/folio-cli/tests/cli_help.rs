use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_shows_commands() {
    cargo_bin_cmd!("folio")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("folio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_url_round_trips() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["config", "set-url", "http://backend.example.com"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(contents.contains("http://backend.example.com"));
}

#[test]
fn test_malformed_base_url_is_rejected() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["--base-url", "not a url", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend base URL"));
}
