//! Integration tests using mock HTTP server
//!
//! Exercises every endpoint of `JwstClient` end to end against wiremock:
//! request construction → envelope unwrap → projection / pagination.

use jwstapi::{ApiResponse, ClientConfig, Error, JsonValue, JwstClient, PageOptions, SuffixInfo};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> JwstClient {
    JwstClient::with_config(ClientConfig::new("test-key").base_url(server.uri())).unwrap()
}

fn body(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "body": value }))
}

fn error(status: u16, value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": value }))
}

/// Mount a single page response that must be requested exactly `times` times
async fn mount_page(
    server: &MockServer,
    route: &str,
    page: u32,
    per_page: u32,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page.to_string()))
        .and(query_param("perPage", per_page.to_string()))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

// ============================================================================
// Version
// ============================================================================

#[tokio::test]
async fn test_version_unwraps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("X-API-KEY", "test-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(body(json!({"version": "1.2.0", "status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).version().await.unwrap();
    assert_eq!(
        result,
        ApiResponse::Data(json!({"version": "1.2.0", "status": "ok"}))
    );
}

#[tokio::test]
async fn test_version_returns_error_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(error(401, json!("Invalid API key")))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).version().await.unwrap();
    assert_eq!(result, ApiResponse::Failure(json!("Invalid API key")));
}

#[tokio::test]
async fn test_empty_key_reaches_the_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_exists("X-API-KEY"))
        .respond_with(error(401, json!("Invalid API key")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        JwstClient::with_config(ClientConfig::new("").base_url(mock_server.uri())).unwrap();
    let result = client.version().await.unwrap();
    assert_eq!(result, ApiResponse::Failure(json!("Invalid API key")));
}

#[tokio::test]
async fn test_malformed_envelope_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": 1})))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).version().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { status: 200, .. }));
}

// ============================================================================
// Programs list
// ============================================================================

#[tokio::test]
async fn test_programs_list_projects_ids_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/program/list"))
        .respond_with(body(json!([
            {"program": "A", "category": "GO"},
            {"program": "B"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).programs_list().await.unwrap();
    assert_eq!(
        result,
        ApiResponse::Data(vec!["A".to_string(), "B".to_string()])
    );
}

#[tokio::test]
async fn test_programs_list_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/program/list"))
        .respond_with(body(json!([])))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).programs_list().await.unwrap();
    assert_eq!(result, ApiResponse::Data(Vec::<String>::new()));
}

#[tokio::test]
async fn test_programs_list_missing_field_is_projection_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/program/list"))
        .respond_with(body(json!([{"id": "A"}])))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).programs_list().await.unwrap_err();
    assert!(matches!(err, Error::Projection { what: "programs", .. }));
}

#[tokio::test]
async fn test_programs_list_error_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/program/list"))
        .respond_with(error(500, json!({"message": "internal"})))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).programs_list().await.unwrap();
    assert_eq!(result, ApiResponse::Failure(json!({"message": "internal"})));
}

// ============================================================================
// Suffixes list
// ============================================================================

#[tokio::test]
async fn test_suffixes_list_drops_extra_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suffix/list"))
        .respond_with(body(json!([{
            "suffix": "i2d",
            "instruments": ["NIRCam"],
            "description": "d",
            "extra": "ignored"
        }])))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).suffixes_list().await.unwrap();
    let suffixes = result.into_data().unwrap();

    assert_eq!(
        suffixes,
        vec![SuffixInfo {
            suffix: "i2d".to_string(),
            instruments: json!(["NIRCam"]),
            description: json!("d"),
        }]
    );
    assert_eq!(
        serde_json::to_value(&suffixes).unwrap(),
        json!([{"suffix": "i2d", "instruments": ["NIRCam"], "description": "d"}])
    );
}

#[tokio::test]
async fn test_suffixes_list_keeps_non_string_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suffix/list"))
        .respond_with(body(json!([
            {"suffix": "_cal", "instruments": "NIRCam, MIRI", "description": null},
            {"suffix": "_x1d", "instruments": null, "description": {"en": "spectra"}}
        ])))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).suffixes_list().await.unwrap();

    assert_eq!(
        result,
        ApiResponse::Data(vec![
            SuffixInfo {
                suffix: "_cal".to_string(),
                instruments: json!("NIRCam, MIRI"),
                description: JsonValue::Null,
            },
            SuffixInfo {
                suffix: "_x1d".to_string(),
                instruments: JsonValue::Null,
                description: json!({"en": "spectra"}),
            },
        ])
    );
}

#[tokio::test]
async fn test_suffixes_list_missing_field_is_projection_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suffix/list"))
        .respond_with(body(json!([{"suffix": "i2d", "instruments": []}])))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).suffixes_list().await.unwrap_err();
    assert!(matches!(err, Error::Projection { what: "suffixes", .. }));
    assert!(err.to_string().contains("description"));
}

// ============================================================================
// Pagination through the endpoints
// ============================================================================

#[tokio::test]
async fn test_bounded_pagination_is_half_open() {
    let mock_server = MockServer::start().await;
    let route = "/program/id/2731";

    mount_page(&mock_server, route, 1, 10, body(json!([{"id": "r1"}])), 1).await;
    mount_page(&mock_server, route, 2, 10, body(json!([{"id": "r2"}])), 1).await;
    mount_page(&mock_server, route, 3, 10, body(json!([{"id": "r3"}])), 0).await;

    let options = PageOptions::new().first_page(1).last_page(3).per_page(10);
    let result = client_for(&mock_server)
        .program_data("2731", options)
        .await
        .unwrap();

    assert_eq!(
        result,
        ApiResponse::Data(vec![json!({"id": "r1"}), json!({"id": "r2"})])
    );
}

#[tokio::test]
async fn test_unbounded_pagination_stops_on_empty_page() {
    let mock_server = MockServer::start().await;
    let route = "/all/suffix/_cal";

    mount_page(&mock_server, route, 1, 10, body(json!([{"id": "r1"}])), 1).await;
    mount_page(&mock_server, route, 2, 10, body(json!([])), 1).await;
    mount_page(&mock_server, route, 3, 10, body(json!([{"id": "r3"}])), 0).await;

    let result = client_for(&mock_server)
        .data_by_suffix("_cal", PageOptions::default())
        .await
        .unwrap();

    assert_eq!(result, ApiResponse::Data(vec![json!({"id": "r1"})]));
}

#[tokio::test]
async fn test_error_page_discards_accumulated_data() {
    let mock_server = MockServer::start().await;
    let route = "/all/type/fits";

    mount_page(&mock_server, route, 1, 5, body(json!([{"id": "r1"}])), 1).await;
    mount_page(&mock_server, route, 2, 5, error(500, json!("boom")), 1).await;
    mount_page(&mock_server, route, 3, 5, body(json!([{"id": "r3"}])), 0).await;

    let result = client_for(&mock_server)
        .files_by_type("fits", PageOptions::new().per_page(5))
        .await
        .unwrap();

    assert_eq!(result, ApiResponse::Failure(json!("boom")));
}

#[tokio::test]
async fn test_observation_pagination_from_later_page() {
    let mock_server = MockServer::start().await;
    let route = "/observation/jw02731001001";

    mount_page(&mock_server, route, 3, 2, body(json!([{"n": 5}, {"n": 6}])), 1).await;
    mount_page(&mock_server, route, 4, 2, body(json!([{"n": 7}])), 1).await;
    mount_page(&mock_server, route, 5, 2, body(json!([])), 1).await;

    let result = client_for(&mock_server)
        .data_by_observation("jw02731001001", PageOptions::new().first_page(3).per_page(2))
        .await
        .unwrap();

    assert_eq!(
        result,
        ApiResponse::Data(vec![json!({"n": 5}), json!({"n": 6}), json!({"n": 7})])
    );
}

#[tokio::test]
async fn test_path_parameter_is_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all/type/a%2Fb"))
        .and(query_param("page", "1"))
        .respond_with(body(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .files_by_type("a/b", PageOptions::default())
        .await
        .unwrap();

    assert_eq!(result, ApiResponse::Data(vec![]));
}

// ============================================================================
// Idempotence
// ============================================================================

#[tokio::test]
async fn test_repeated_calls_yield_identical_results() {
    let mock_server = MockServer::start().await;
    let route = "/program/id/1345";

    Mock::given(method("GET"))
        .and(path("/program/list"))
        .respond_with(body(json!([{"program": "1345"}])))
        .expect(2)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, route, 1, 10, body(json!([{"id": "r1"}])), 2).await;
    mount_page(&mock_server, route, 2, 10, body(json!([])), 2).await;

    let client = client_for(&mock_server);

    let first_programs = client.programs_list().await.unwrap();
    let second_programs = client.programs_list().await.unwrap();
    assert_eq!(first_programs, second_programs);

    let first_data = client
        .program_data("1345", PageOptions::default())
        .await
        .unwrap();
    let second_data = client
        .program_data("1345", PageOptions::default())
        .await
        .unwrap();
    assert_eq!(first_data, second_data);
    assert_eq!(first_data, ApiResponse::Data(vec![json!({"id": "r1"})]));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/program/id/1", 1, 10, body(json!([{"p": 1}])), 1).await;
    mount_page(&mock_server, "/program/id/1", 2, 10, body(json!([])), 1).await;
    mount_page(&mock_server, "/program/id/2", 1, 10, body(json!([{"p": 2}])), 1).await;
    mount_page(&mock_server, "/program/id/2", 2, 10, body(json!([])), 1).await;

    let client = client_for(&mock_server);
    let (one, two) = tokio::join!(
        client.program_data("1", PageOptions::default()),
        client.program_data("2", PageOptions::default()),
    );

    assert_eq!(one.unwrap(), ApiResponse::Data(vec![json!({"p": 1})]));
    assert_eq!(two.unwrap(), ApiResponse::Data(vec![json!({"p": 2})]));
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_transport_failure_is_distinct_from_error_payload() {
    let client =
        JwstClient::with_config(ClientConfig::new("k").base_url("http://127.0.0.1:1")).unwrap();

    let err = client
        .program_data("2731", PageOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
