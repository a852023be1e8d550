//! Upload → bulk geocode → search, against a mocked provider.

use std::time::Duration;

use radiusos_core::{normalize, read_raw_csv};
use radiusos_geocode::{geocode_missing, search, GeocoderConfig, NominatimClient, SearchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPLOAD: &str = "\
facility_name,city,state
Origin Clinic,Quito,EC
Ten Mile Depot,Quito,EC
Forty Mile Yard,Quito,EC
Lost Depot,Quito,EC
";

async fn mount_place(server: &MockServer, q: &str, lat: &str, lon: &str) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", q))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "lat": lat, "lon": lon }])),
        )
        .mount(server)
        .await;
}

async fn provider() -> MockServer {
    let server = MockServer::start().await;
    mount_place(&server, "Origin Clinic, Quito, EC", "0.0", "0.0").await;
    mount_place(&server, "Ten Mile Depot, Quito, EC", "0.0", "0.1446").await;
    mount_place(&server, "Forty Mile Yard, Quito, EC", "0.0", "0.5783").await;
    mount_place(&server, "Null Island", "0.0", "0.0").await;
    // Anything else: no match.
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer) -> NominatimClient {
    NominatimClient::new(&GeocoderConfig {
        base_url: server.uri(),
        api_key: None,
        user_agent: "radiusos-test/0.1".to_owned(),
        timeout_secs: 5,
        country_codes: None,
        min_delay: Duration::ZERO,
    })
    .unwrap()
}

#[tokio::test]
async fn upload_geocode_and_search_within_25_miles() {
    let server = provider().await;
    let geocoder = client(&server);

    let mut table = normalize(&read_raw_csv(UPLOAD.as_bytes()).unwrap()).unwrap();
    let report = geocode_missing(&geocoder, &mut table).await;

    assert_eq!(report.attempted, 4);
    assert_eq!(report.resolved, 3);
    assert_eq!(report.unresolved, 1);
    assert_eq!(table.locatable_count(), 3);

    let outcome = search(&geocoder, &table, "Null Island", 25.0).await.unwrap();
    let names: Vec<&str> = outcome.results.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["Origin Clinic", "Ten Mile Depot"]);
    assert!(outcome.results[0].distance_miles <= outcome.results[1].distance_miles);
}

#[tokio::test]
async fn unresolved_search_address_renders_nothing() {
    let server = provider().await;
    let geocoder = client(&server);

    let mut table = normalize(&read_raw_csv(UPLOAD.as_bytes()).unwrap()).unwrap();
    geocode_missing(&geocoder, &mut table).await;

    let err = search(&geocoder, &table, "Nowhere At All", 25.0)
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::SearchAddressUnresolved { ref address } if address == "Nowhere At All"));
}

#[tokio::test]
async fn provider_outage_leaves_rows_unlocatable_without_failing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let geocoder = client(&server);

    let mut table = normalize(&read_raw_csv(UPLOAD.as_bytes()).unwrap()).unwrap();
    let report = geocode_missing(&geocoder, &mut table).await;

    assert_eq!(report.attempted, 4);
    assert_eq!(report.unresolved, 4);
    assert_eq!(table.locatable_count(), 0);
    assert_eq!(table.records.len(), 4);
}
