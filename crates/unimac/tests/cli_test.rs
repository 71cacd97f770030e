//! Integration tests for the `unimac` CLI binary.
//!
//! Argument handling runs without a controller; report commands run against
//! a wiremock classic controller on loopback.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `unimac` binary with env isolation.
fn unimac_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unimac");
    cmd.env_remove("UNIMAC_HOST")
        .env_remove("UNIMAC_USER")
        .env_remove("UNIMAC_PASSWORD")
        .env_remove("UNIMAC_CA_CERT")
        .env_remove("RUST_LOG");
    cmd
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": data }))
}

/// One site: gateway G1, root switch S1, access point A1 on S1 port 5,
/// a wired client on S1 port 3 and a wireless client on A1.
async fn mock_controller() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(ok(json!([{ "_id": "s1", "name": "default", "desc": "Default" }])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/device"))
        .respond_with(ok(json!([
            { "mac": "00:00:00:00:00:01", "type": "ugw", "name": "G1", "ip": "10.0.0.1",
              "config_network": { "type": "static", "ip": "10.0.0.1" } },
            { "mac": "00:00:00:00:00:02", "type": "usw", "name": "S1", "ip": "10.0.0.2",
              "uplink": { "uplink_mac": "00:00:00:00:00:01", "num_port": 0 },
              "downlink_table": [{ "mac": "00:00:00:00:00:03", "port_idx": 5 }] },
            { "mac": "00:00:00:00:00:03", "type": "uap", "name": "A1", "ip": "10.0.0.3" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/sta"))
        .respond_with(ok(json!([
            { "mac": "bb:00:00:00:00:01", "hostname": "desktop", "ip": "10.0.0.60",
              "sw_mac": "00:00:00:00:00:02", "sw_port": 3, "is_wired": true },
            { "mac": "aa:00:00:00:00:01", "hostname": "phone", "ip": "10.0.0.61",
              "ap_mac": "00:00:00:00:00:03", "rssi": 30 }
        ])))
        .mount(&server)
        .await;

    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unimac_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_help_flag() {
    unimac_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("devices")
            .and(predicate::str::contains("clients"))
            .and(predicate::str::contains("licenses"))
            .and(predicate::str::contains("UNIMAC_HOST")),
    );
}

#[test]
fn test_version_subcommand() {
    unimac_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("unimac {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_licenses_subcommand() {
    unimac_cmd().arg("licenses").assert().success().stdout(
        predicate::str::contains("MIT License").and(predicate::str::contains("reqwest")),
    );
}

#[test]
fn test_unknown_subcommand() {
    unimac_cmd()
        .arg("routers")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ── Output validation ───────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_unsupported_extension_fails_before_connecting() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.txt");

    unimac_cmd()
        .args(["--host", &server.uri(), "devices", "--output"])
        .arg(&report)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("report.txt"));

    assert!(!report.exists(), "no file may be created");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_ca_cert_is_a_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ca.pem");

    unimac_cmd()
        .args(["--host", &server.uri(), "--ca-cert"])
        .arg(&missing)
        .arg("devices")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not connect"));
}

// ── End-to-end reports ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_devices_csv() {
    let server = mock_controller().await;
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("devices.csv");

    unimac_cmd()
        .args(["--host", &server.uri(), "-u", "admin", "-p", "secret", "devices", "--output"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("Connected to")
                .and(predicate::str::contains("1 sites found"))
                .and(predicate::str::contains("with 1 USW added 1")),
        );

    let csv = std::fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "MAC,Type,Site,IP,Name,Network,Uplink,UplinkPort,ConfigIP,Note",
            "00:00:00:00:00:01,USG,Default (default),10.0.0.1,G1,,none,none,10.0.0.1,",
            "00:00:00:00:00:02,USW,Default (default),10.0.0.2,S1,,00:00:00:00:00:01,0,none,root",
            "00:00:00:00:00:03,UAP,Default (default),10.0.0.3,A1,,S1,5,none,",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clients_json_sorted() {
    let server = mock_controller().await;
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("clients.json");

    unimac_cmd()
        .env("UNIMAC_HOST", server.uri())
        .env("UNIMAC_USER", "admin")
        .env("UNIMAC_PASSWORD", "secret")
        .args(["clients", "--sort", "--output"])
        .arg(&report)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("2 clients connected")
                .and(predicate::str::contains("to 1 switches and 1 access points")),
        );

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["MAC"], "aa:00:00:00:00:01");
    assert_eq!(rows[0]["AP"], "A1");
    assert_eq!(rows[0]["RSSI"], 30);
    assert_eq!(rows[0]["SwitchPort"], serde_json::Value::Null);
    assert_eq!(rows[1]["Switch"], "S1");
    assert_eq!(rows[1]["SwitchPort"], 3);
    assert_eq!(rows[1]["Site"], "Default (default)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clients_table_on_stdout_quiet() {
    let server = mock_controller().await;

    unimac_cmd()
        .args(["--host", &server.uri(), "-q", "clients"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(
            predicate::str::contains("LastSeen")
                .and(predicate::str::contains("desktop"))
                .and(predicate::str::contains("phone")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("api.err.Invalid"))
        .mount(&server)
        .await;

    unimac_cmd()
        .args(["--host", &server.uri(), "-u", "admin", "-p", "nope", "devices"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Authentication failed"));
}
