//! Fixture backend tests: every mock builder is input-independent and stable.

use pretty_assertions::assert_eq;
use server::mock;

#[test]
fn admission_stats_identical_for_any_range() {
    let a = mock::admission_stats("7d");
    let b = mock::admission_stats("90d");
    let c = mock::admission_stats("");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn processing_stats_identical_for_any_range() {
    assert_eq!(mock::processing_stats("7d"), mock::processing_stats("all"));
}

#[test]
fn repeated_calls_return_identical_records() {
    assert_eq!(mock::review_stats(), mock::review_stats());
    assert_eq!(
        mock::trainee_document_stats(),
        mock::trainee_document_stats()
    );
    assert_eq!(mock::oversight_stats(), mock::oversight_stats());
    assert_eq!(mock::auth_data(), mock::auth_data());
}

#[test]
fn fixture_session_round_trips_through_json() {
    let session = mock::auth_data();
    let json = serde_json::to_string(&session).unwrap();
    let parsed: shared_types::AuthData = serde_json::from_str(&json).unwrap();
    assert_eq!(session, parsed);
}

#[test]
fn fixture_collections_are_non_empty() {
    assert!(!mock::documents().is_empty());
    assert!(!mock::document_rules().is_empty());
    assert!(!mock::departments().is_empty());
    assert!(!mock::positions().is_empty());
    assert!(!mock::matrix_programs().is_empty());
}

#[test]
fn matrix_programs_cover_every_status() {
    use shared_types::MatrixProgramStatus;

    let statuses: Vec<MatrixProgramStatus> =
        mock::matrix_programs().iter().map(|p| p.status).collect();
    assert!(statuses.contains(&MatrixProgramStatus::PendingReview));
    assert!(statuses.contains(&MatrixProgramStatus::Approved));
    assert!(statuses.contains(&MatrixProgramStatus::Rejected));
}
