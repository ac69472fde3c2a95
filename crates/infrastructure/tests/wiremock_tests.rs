//! Wiremock integration tests for the weather adapter
//!
//! Drives the adapter through the application port against a local mock of
//! the OpenWeatherMap API.

use application::error::ApplicationError;
use application::ports::WeatherPort;
use domain::value_objects::CityName;
use infrastructure::OpenWeatherAdapter;
use integration_weather::WeatherApiConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> OpenWeatherAdapter {
    OpenWeatherAdapter::with_config(WeatherApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..WeatherApiConfig::default()
    })
    .expect("adapter creation should succeed")
}

const NAIROBI_BODY: &str = r#"{
    "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
    "main": {"temp": 24.8, "feels_like": 24.6, "pressure": 1017, "humidity": 48},
    "wind": {"speed": 5.66, "deg": 140},
    "dt": 1700000000,
    "sys": {"country": "KE", "sunrise": 1699933270, "sunset": 1699977100},
    "timezone": 10800,
    "id": 184745,
    "name": "Nairobi",
    "cod": 200
}"#;

#[tokio::test]
async fn adapter_returns_a_domain_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Nairobi"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(NAIROBI_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let city = CityName::new("Nairobi").expect("valid city");
    let report = adapter
        .report_for_city(&city)
        .await
        .expect("lookup succeeds");

    assert_eq!(report.city().as_str(), "Nairobi");
    assert_eq!(report.country(), Some("KE"));
    assert_eq!(report.temperature().rounded(), 25);
    assert_eq!(report.humidity().value(), 48);
    assert_eq!(report.condition_display(), "Few clouds");
    assert_eq!(report.utc_offset().as_seconds(), 10_800);
}

#[tokio::test]
async fn provider_404_surfaces_as_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"cod": "404", "message": "city not found"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let city = CityName::new("Atlantis").expect("valid city");
    let result = adapter.report_for_city(&city).await;

    match result {
        Err(ApplicationError::CityNotFound(message)) => {
            assert_eq!(message, "city not found");
        }
        other => panic!("expected CityNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_outage_is_a_retryable_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let city = CityName::new("London").expect("valid city");
    let err = adapter
        .report_for_city(&city)
        .await
        .expect_err("lookup fails");

    assert!(err.is_retryable());
}

#[tokio::test]
async fn availability_probe_hits_the_provider() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(NAIROBI_BODY, "application/json"))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    assert!(adapter.is_available().await);
}
