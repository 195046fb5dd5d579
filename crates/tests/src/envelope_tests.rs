//! Response envelope contract tests against the domain payload types.

use pretty_assertions::assert_eq;
use shared_types::{ApiResponse, Department, Document, DocumentRule, Position, ResponseStatus};

#[test]
fn department_list_envelope_roundtrip() {
    let envelope = ApiResponse::success(server::mock::departments());
    let json = serde_json::to_string(&envelope).unwrap();
    let parsed: ApiResponse<Vec<Department>> = serde_json::from_str(&json).unwrap();
    assert_eq!(envelope, parsed);
}

#[test]
fn error_envelope_has_null_data_for_every_domain_type() {
    let json = r#"{"status":"error","message":"backend unavailable","data":null}"#;

    let documents: ApiResponse<Vec<Document>> = serde_json::from_str(json).unwrap();
    assert_eq!(documents.status, ResponseStatus::Error);
    assert_eq!(documents.data, None);

    let rules: ApiResponse<Vec<DocumentRule>> = serde_json::from_str(json).unwrap();
    assert_eq!(rules.data, None);

    let positions: ApiResponse<Vec<Position>> = serde_json::from_str(json).unwrap();
    assert_eq!(positions.data, None);

    let departments: ApiResponse<Vec<Department>> = serde_json::from_str(json).unwrap();
    assert_eq!(departments.data, None);
}

#[test]
fn null_data_distinct_from_empty_collection() {
    let null_data: ApiResponse<Vec<Document>> =
        serde_json::from_str(r#"{"status":"success","data":null}"#).unwrap();
    assert_eq!(null_data.data, None);

    let empty: ApiResponse<Vec<Document>> =
        serde_json::from_str(r#"{"status":"success","data":[]}"#).unwrap();
    assert_eq!(empty.data, Some(vec![]));
}

#[test]
fn into_result_surfaces_backend_error_message() {
    let envelope: ApiResponse<Vec<Department>> = ApiResponse::error("backend unavailable");
    let err = envelope.into_result().unwrap_err();
    assert_eq!(err.message, "backend unavailable");
}

#[test]
fn success_envelope_unwraps_to_mock_collection() {
    let envelope = ApiResponse::success(server::mock::documents());
    let items = envelope.into_result().unwrap();
    assert_eq!(items, server::mock::documents());
}
