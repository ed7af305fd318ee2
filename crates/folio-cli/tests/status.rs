//! Integration tests for `folio status`.
//!
//! Drives the binary against a mock backend and checks the per-endpoint
//! report plus the exit code.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_status_reports_healthy_backend() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":"b1","title":"Snow notes","description":"","author":"Laura","authorId":1,"createdAt":"2026-01-12T09:30:00Z"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .args(["--base-url", &server.uri(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/api/health"))
        .stdout(predicate::str::contains("no active session"))
        .stdout(predicate::str::contains("1 blogs"));
}

#[tokio::test]
async fn test_status_fails_when_health_check_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .args(["--base-url", &server.uri(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("backend is unreachable"));
}
