//! Integration tests for the `beamlab` CLI binary.
//!
//! Offline commands run against an isolated config directory; backend
//! commands run against a wiremock server or an unreachable port.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `beamlab` binary with env isolation.
///
/// Clears all `BEAMLAB_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn beamlab_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("beamlab");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("BEAMLAB_PROFILE")
        .env_remove("BEAMLAB_SERVER")
        .env_remove("BEAMLAB_OUTPUT")
        .env_remove("BEAMLAB_TIMEOUT");
    cmd
}

fn home() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = beamlab_cmd(&home()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    beamlab_cmd(&home()).arg("--help").assert().success().stdout(
        predicate::str::contains("link")
            .and(predicate::str::contains("run"))
            .and(predicate::str::contains("compare")),
    );
}

#[test]
fn test_version_flag() {
    beamlab_cmd(&home())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("beamlab"));
}

#[test]
fn test_completions_bash() {
    beamlab_cmd(&home())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_unknown_system_is_rejected_by_parser() {
    beamlab_cmd(&home())
        .args(["link", "show", "--system", "4G"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("4G"));
}

// ── Link (offline) ──────────────────────────────────────────────────

#[test]
fn test_link_show_defaults() {
    beamlab_cmd(&home())
        .args(["link", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5G (Sub-6 GHz)")
                .and(predicate::str::contains("3500 MHz"))
                .and(predicate::str::contains("20 MHz")),
        );
}

#[test]
fn test_link_validate_ok() {
    beamlab_cmd(&home())
        .args(["link", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_link_validate_reports_every_error() {
    beamlab_cmd(&home())
        .args(["link", "validate", "--power", "60", "--distance", "0.5"])
        .assert()
        .code(2)
        .stdout(
            predicate::str::contains("Power must be between")
                .and(predicate::str::contains("Distance must be between")),
        )
        .stderr(predicate::str::contains("Invalid link configuration"));
}

#[test]
fn test_link_wire_is_in_hz() {
    let output = beamlab_cmd(&home())
        .args(["link", "wire", "--system", "6G", "--frequency", "3700"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["system"], "6G");
    assert_eq!(body["frequency"].as_f64(), Some(3.7e9));
    assert_eq!(body["bandwidth_hz"].as_f64(), Some(2e8));
    assert_eq!(body["tx_antenna"]["polarization"], "H");
}

#[test]
fn test_link_wire_basic_omits_antennas() {
    let output = beamlab_cmd(&home())
        .args(["link", "wire", "--basic"])
        .output()
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(body.get("tx_antenna").is_none());
    assert!(body.get("bandwidth_hz").is_none());
}

#[test]
fn test_link_summary_json() {
    let output = beamlab_cmd(&home())
        .args(["-o", "json", "link", "summary", "--power", "30"])
        .output()
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(body["simulation_id"].as_str().unwrap().starts_with("sim_"));
    assert_eq!(body["parameters"]["power"], "30 dBm");
}

// ── Units (offline) ─────────────────────────────────────────────────

#[test]
fn test_units_conversions() {
    beamlab_cmd(&home())
        .args(["units", "power", "23"])
        .assert()
        .success()
        .stdout("-7.00 dBW\n");
    beamlab_cmd(&home())
        .args(["units", "distance", "1.5", "--km"])
        .assert()
        .success()
        .stdout("1500 m\n");
    beamlab_cmd(&home())
        .args(["units", "frequency", "3500000000", "--to", "GHz"])
        .assert()
        .success()
        .stdout("3.5 GHz\n");
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_is_under_config_home() {
    let home = home();
    beamlab_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_link_defaults_feed_link_commands() {
    let home = home();
    beamlab_cmd(&home)
        .args(["config", "set", "link.system", "5G-A"])
        .assert()
        .success();

    beamlab_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("system = \"5G-A\""));

    beamlab_cmd(&home)
        .args(["link", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5G-A (Advanced)").and(predicate::str::contains("80 MHz")),
        );
}

#[test]
fn test_config_set_unknown_key() {
    beamlab_cmd(&home())
        .args(["config", "set", "controller", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_config_use_unknown_profile() {
    beamlab_cmd(&home())
        .args(["config", "use", "lab"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Profile 'lab' not found"));
}

#[test]
fn test_unknown_profile_flag_fails_before_connecting() {
    beamlab_cmd(&home())
        .args(["--profile", "lab", "health"])
        .assert()
        .code(2);
}

// ── Backend ─────────────────────────────────────────────────────────

#[test]
fn test_health_unreachable_backend() {
    beamlab_cmd(&home())
        .args(["--server", "http://127.0.0.1:9", "health"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not reach"));
}

#[test]
fn test_run_invalid_link_never_connects() {
    // Port 9 would fail with exit code 7 if a request were made.
    beamlab_cmd(&home())
        .args(["--server", "http://127.0.0.1:9", "run", "--power", "99"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Power must be between"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_submits_to_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/config"))
        .and(body_partial_json(json!({
            "frequency": 3_500_000_000.0,
            "system": "6G",
            "bandwidth_hz": 200_000_000.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let home = home();
    let uri = server.uri();
    beamlab_cmd(&home)
        .args(["--server", uri.as_str(), "-o", "plain", "run", "--system", "6G"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sim_"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_compare_json() {
    let server = MockServer::start().await;
    let metrics = |snr: f64| {
        json!({
            "power_received": -60.0,
            "snr": snr,
            "path_loss": 80.0,
            "bandwidth_hz": 2e7,
            "system_gain": 0.0
        })
    };
    Mock::given(method("POST"))
        .and(path("/api/compare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comparison": {
                "systems": { "5G": metrics(30.0), "5G-A": metrics(33.0), "6G": metrics(31.0) },
                "range_data": {},
                "parameters": {
                    "power_dbm": 23.0,
                    "frequency_hz": 3.5e9,
                    "distance_m": 200.0
                }
            }
        })))
        .mount(&server)
        .await;

    let home = home();
    let uri = server.uri();
    beamlab_cmd(&home)
        .args(["--server", uri.as_str(), "-o", "plain", "compare"])
        .assert()
        .success()
        .stdout("5G-A\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_results_empty_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let home = home();
    let uri = server.uri();
    beamlab_cmd(&home)
        .args(["--server", uri.as_str(), "results"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No results yet"));
}
