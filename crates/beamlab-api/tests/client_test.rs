#![allow(clippy::unwrap_used)]
// Integration tests for `SimulatorClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use beamlab_api::types::{AntennaPayload, ConfigPayload};
use beamlab_api::{Error, SimulatorClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SimulatorClient) {
    let server = MockServer::start().await;
    let client = SimulatorClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn payload() -> ConfigPayload {
    let antenna = AntennaPayload {
        gain_dbi: 15.0,
        polarization: "H".into(),
        beamwidth_deg: 65.0,
    };
    ConfigPayload {
        frequency: 3_500_000_000.0,
        power: 23.0,
        distance: 200.0,
        system: "5G".into(),
        tx_antenna: Some(antenna.clone()),
        rx_antenna: Some(antenna),
        bandwidth_hz: Some(20_000_000.0),
    }
}

// ── /api/config ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_submit_config_posts_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/config"))
        .and(body_json(json!({
            "frequency": 3_500_000_000.0,
            "power": 23.0,
            "distance": 200.0,
            "system": "5G",
            "tx_antenna": { "gain_dbi": 15.0, "polarization": "H", "beamwidth_deg": 65.0 },
            "rx_antenna": { "gain_dbi": 15.0, "polarization": "H", "beamwidth_deg": 65.0 },
            "bandwidth_hz": 20_000_000.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    tokio_test::assert_ok!(client.submit_config(&payload()).await);
}

#[tokio::test]
async fn test_submit_config_ignores_unknown_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.submit_config(&payload()).await.unwrap();
}

#[tokio::test]
async fn test_submit_config_validation_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/config"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "detail": "power out of range" })),
        )
        .mount(&server)
        .await;

    let result = client.submit_config(&payload()).await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "power out of range");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── /api/results ────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_results_full() {
    let (server, client) = setup().await;

    let body = json!({
        "power_received": -62.5,
        "snr": 31.2,
        "path_loss": 89.3,
        "spectrum": [
            { "freq": 3_499_000_000.0, "magnitude": -80.0 },
            { "freq": 3_500_000_000.0, "magnitude": -20.0 }
        ],
        "system": "5G",
        "bandwidth_hz": 20_000_000.0,
        "antenna": {
            "tx_gain_dbi": 15.0,
            "rx_gain_dbi": 15.0,
            "tx_polarization": "H",
            "rx_polarization": "V",
            "tx_beamwidth_deg": 65.0,
            "rx_beamwidth_deg": 65.0,
            "polarization_mismatch_loss_db": 20.0,
            "antenna_gain_db": 10.0
        },
        "power_dbm": 23.0,
        "frequency_hz": 3_500_000_000.0,
        "distance_m": 200.0
    });

    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let results = client.get_results().await.unwrap();

    assert_eq!(results.power_received, Some(-62.5));
    assert_eq!(results.spectrum.len(), 2);
    assert_eq!(results.system.as_deref(), Some("5G"));
    let antenna = results.antenna.unwrap();
    assert_eq!(antenna.rx_polarization, "V");
    assert_eq!(antenna.polarization_mismatch_loss_db, 20.0);
}

#[tokio::test]
async fn test_get_results_empty_backend() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "power_received": null,
            "snr": null,
            "path_loss": null,
            "spectrum": [],
            "system": null
        })))
        .mount(&server)
        .await;

    let results = client.get_results().await.unwrap();
    assert!(results.power_received.is_none());
    assert!(results.spectrum.is_empty());
}

#[tokio::test]
async fn test_get_results_bad_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.get_results().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_get_results_bad_json_multibyte_preview() {
    let (server, client) = setup().await;

    // The 200th byte falls inside a two-byte character.
    let body = format!("{}é not json", "a".repeat(199));
    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let err = client.get_results().await.unwrap_err();
    match err {
        Error::Deserialization { message, body: raw } => {
            assert_eq!(raw, body);
            assert!(message.contains("body preview"), "message: {message}");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── /api/range ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_range() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/range"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range_data": [
                { "distance": 10.0, "power_received": -40.0, "snr": 50.0, "path_loss": 63.0 },
                { "distance": 100.0, "power_received": -60.0, "snr": 30.0, "path_loss": 83.0 }
            ]
        })))
        .mount(&server)
        .await;

    let range = client.get_range(&payload()).await.unwrap();
    assert_eq!(range.range_data.len(), 2);
    assert_eq!(range.range_data[1].distance, 100.0);
}

// ── /api/compare ────────────────────────────────────────────────────

#[tokio::test]
async fn test_compare() {
    let (server, client) = setup().await;

    let metrics = |gain: f64| {
        json!({
            "power_received": -60.0,
            "snr": 30.0,
            "path_loss": 83.0,
            "bandwidth_hz": 20_000_000.0,
            "system_gain": gain
        })
    };

    Mock::given(method("POST"))
        .and(path("/api/compare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comparison": {
                "systems": { "5G": metrics(0.0), "5G-A": metrics(3.0), "6G": metrics(6.0) },
                "range_data": { "5G": [], "5G-A": [], "6G": [] },
                "parameters": {
                    "power_dbm": 23.0,
                    "frequency_hz": 3_500_000_000.0,
                    "distance_m": 200.0
                }
            }
        })))
        .mount(&server)
        .await;

    let response = client.compare(&payload()).await.unwrap();
    let comparison = response.comparison;

    let tags: Vec<&str> = comparison.systems.keys().map(String::as_str).collect();
    assert_eq!(tags, vec!["5G", "5G-A", "6G"]);
    assert_eq!(comparison.systems["6G"].system_gain, 6.0);
    assert!(comparison.parameters.bandwidth_hz.is_none());
}

// ── /health ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "service": "beamforming-backend",
            "version": null
        })))
        .mount(&server)
        .await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "beamforming-backend");
    assert!(health.version.is_none());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_plain_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.get_results().await.unwrap_err();
    assert!(err.is_transient());
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/range"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_range(&payload()).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on the discard port.
    let uri = "http://127.0.0.1:9";
    let client = SimulatorClient::new(uri, &TransportConfig::default()).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
}
