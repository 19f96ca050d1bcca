mod common;

use common::{client_for, png_bytes};
use pa_client::{Error, LicenseBulkDataQuery, LicenseGraphRequest, LicenseValueRequest};
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_license_value() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/Counter/api/data/license/abc123/Ccu"))
    .and(query_param("start", "s"))
    .respond_with(ResponseTemplate::new(200).set_body_string("12.25"))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let mut request = LicenseValueRequest::new("abc123", "Ccu");
  request.start = Some("s".to_string());
  assert_eq!(client.license().value(&request).await.unwrap(), 12.25);
}

#[tokio::test]
async fn test_license_graph() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/Counter/api/graph/license/abc123/Rooms"))
    .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(12, 4), "image/png"))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let graph = client.license().graph(&LicenseGraphRequest::new("abc123", "Rooms")).await.unwrap();
  assert_eq!((graph.width(), graph.height()), (12, 4));
}

#[tokio::test]
async fn test_license_bulk_data() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/Counter/api/bulkdata/license"))
    .and(body_json(json!([{"id": "l1", "hash": "abc123", "template": "Ccu"}])))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"l1": 3.5})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let response = client
    .license()
    .bulk_data(&[LicenseBulkDataQuery::new("l1", "abc123", "Ccu")])
    .await
    .unwrap();
  assert_eq!(response["l1"], 3.5);
}

#[tokio::test]
async fn test_license_missing_fields_never_hit_network() {
  let server = MockServer::start().await;
  Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let client = client_for(&server);
  let err = client.license().value(&LicenseValueRequest::new("", "Ccu")).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
  let err = client.license().graph(&LicenseGraphRequest::new("abc123", "")).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_license_bulk_and_dot_hash_never_hit_network() {
  let server = MockServer::start().await;
  Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let client = client_for(&server);
  let err = client
    .license()
    .bulk_data(&[LicenseBulkDataQuery::new("l1", "", "Ccu")])
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));

  let err = client.license().value(&LicenseValueRequest::new("..", "Ccu")).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
}
