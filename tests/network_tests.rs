use chrono::NaiveDate;
use serde_json::json;
use tahajod::{GeoCoordinate, Planner, PlannerConfig, TahajodError, format_duration};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> PlannerConfig {
    PlannerConfig::new()
        .ip_api_url(format!("{}/json/", server.uri()))
        .timings_url(format!("{}/v1/timings", server.uri()))
}

fn timings_body(isha: &str, fajr: &str) -> serde_json::Value {
    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": fajr,
                "Dhuhr": "12:01",
                "Asr": "15:14",
                "Maghrib": "18:20",
                "Isha": isha
            }
        }
    })
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

async fn mount_timings(server: &MockServer, date: &str, isha: &str, fajr: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/timings"))
        .and(query_param("date", date))
        .respond_with(ResponseTemplate::new(200).set_body_json(timings_body(isha, fajr)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn schedule_with_supplied_coordinates() {
    let server = MockServer::start().await;
    mount_timings(&server, "15-03-2026", "19:30", "04:40").await;
    mount_timings(&server, "16-03-2026", "19:31", "04:45").await;

    let planner = Planner::new(config_for(&server));
    let coords = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
    let report = planner.schedule_for(Some(coords), test_date()).await.unwrap();

    // Isha from today's timings, Fajr from tomorrow's.
    assert!(report.location.is_none());
    assert_eq!(report.schedule.fajr.format("%H:%M").to_string(), "04:45");
    assert_eq!(format_duration(report.schedule.total_night_duration), "9h 15m");
}

#[tokio::test]
async fn timings_request_carries_coordinates_and_method() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/timings"))
        .and(query_param("latitude", "-6.2088"))
        .and(query_param("longitude", "106.8456"))
        .and(query_param("method", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timings_body("19:30", "04:45")))
        .expect(2)
        .mount(&server)
        .await;

    let planner = Planner::new(config_for(&server));
    let coords = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
    planner.schedule_for(Some(coords), test_date()).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn location_lookup_feeds_the_pipeline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "lat": -6.2088,
            "lon": 106.8456,
            "city": "Jakarta",
            "country": "Indonesia"
        })))
        .mount(&server)
        .await;
    mount_timings(&server, "15-03-2026", "19:30", "04:40").await;
    mount_timings(&server, "16-03-2026", "19:31", "04:45").await;

    let planner = Planner::new(config_for(&server));
    let report = planner.schedule_for(None, test_date()).await.unwrap();

    let location = report.location.expect("location should come from IP lookup");
    assert_eq!(location.display_name(), "Jakarta, Indonesia");
    assert_eq!(report.coords, GeoCoordinate::new_unchecked(-6.2088, 106.8456));
}

#[tokio::test]
async fn location_failure_short_circuits_the_pipeline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    // The timings endpoint must never be contacted after a location failure.
    Mock::given(method("GET"))
        .and(path("/v1/timings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timings_body("19:30", "04:45")))
        .expect(0)
        .mount(&server)
        .await;

    let planner = Planner::new(config_for(&server));
    let err = planner.schedule_for(None, test_date()).await.unwrap_err();

    assert!(matches!(err, TahajodError::Location(_)));
    server.verify().await;
}

#[tokio::test]
async fn out_of_range_coordinates_stop_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/timings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timings_body("19:30", "04:45")))
        .expect(0)
        .mount(&server)
        .await;

    let planner = Planner::new(config_for(&server));
    let coords = GeoCoordinate::new_unchecked(91.0, 0.0);
    let err = planner.schedule_for(Some(coords), test_date()).await.unwrap_err();

    assert!(matches!(err, TahajodError::InvalidCoordinates { .. }));
    server.verify().await;
}

#[tokio::test]
async fn looked_up_coordinates_are_still_validated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "lat": 123.0,
            "lon": 0.0
        })))
        .mount(&server)
        .await;

    let planner = Planner::new(config_for(&server));
    let err = planner.schedule_for(None, test_date()).await.unwrap_err();

    assert!(matches!(err, TahajodError::InvalidCoordinates { .. }));
}

#[tokio::test]
async fn missing_isha_key_is_a_timings_error() {
    let server = MockServer::start().await;

    let body_without_isha = json!({
        "code": 200,
        "status": "OK",
        "data": { "timings": { "Fajr": "04:45", "Maghrib": "18:20" } }
    });
    Mock::given(method("GET"))
        .and(path("/v1/timings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body_without_isha))
        .mount(&server)
        .await;

    let planner = Planner::new(config_for(&server));
    let coords = GeoCoordinate::new(21.4225, 39.8262).unwrap();
    let err = planner.schedule_for(Some(coords), test_date()).await.unwrap_err();

    assert!(matches!(err, TahajodError::Timings(_)));
}

#[tokio::test]
async fn malformed_timings_payload_is_a_timings_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/timings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let planner = Planner::new(config_for(&server));
    let coords = GeoCoordinate::new(21.4225, 39.8262).unwrap();
    let err = planner.schedule_for(Some(coords), test_date()).await.unwrap_err();

    assert!(matches!(err, TahajodError::Timings(_)));
}
