//! Tests for the domain error constructors and trace capture.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
#[case(ErrorCode::InvalidRequest, "invalid_request")]
#[case(ErrorCode::NotFound, "not_found")]
#[case(ErrorCode::InternalError, "internal_error")]
fn codes_have_snake_case_labels(#[case] code: ErrorCode, #[case] expected: &str) {
    assert_eq!(code.as_str(), expected);
}

#[rstest]
fn display_uses_message() {
    let err = Error::not_found("user not found");
    assert_eq!(err.to_string(), "user not found");
}

#[rstest]
fn trace_id_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_captured_from_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_trace_id_overrides_captured_value() {
    let err = Error::invalid_request("bad").with_trace_id("abc");
    assert_eq!(err.trace_id(), Some("abc"));
}
