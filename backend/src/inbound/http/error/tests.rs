//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn render(error: Error) -> (StatusCode, Option<String>, ErrorBody) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace id is ascii").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn not_found_keeps_its_detail(expected_trace_id: String) {
    let error = Error::not_found("Feature1 not found").with_trace_id(expected_trace_id.clone());

    let (status, header, body) = render(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body.detail, "Feature1 not found");
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("relation \"feature1_sample\" does not exist")
        .with_trace_id(expected_trace_id.clone());

    let (status, header, body) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body.detail, REDACTED_DETAIL);
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (status, header, body) = render(Error::service_unavailable("database unavailable")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(header.is_none());
    assert_eq!(body.detail, "database unavailable");
}

#[rstest]
fn body_serialises_to_a_single_detail_field() {
    let value = serde_json::to_value(body_for(&Error::invalid_request("id must be an integer")))
        .expect("serialise body");
    assert_eq!(value, serde_json::json!({"detail": "id must be an integer"}));
}
