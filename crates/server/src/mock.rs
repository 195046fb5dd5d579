//! Fixture data standing in for the admissions backend.
//!
//! Every builder returns the same record on every call. Arguments exist for
//! signature compatibility with the eventual backend and are never consulted,
//! so callers must not assume the returned values reflect their input.

use chrono::{DateTime, Utc};
use shared_types::{
    AdmissionStats, AuthData, CriteriaItem, Department, Document, DocumentRule, MatrixProgram,
    MatrixProgramStatus, OversightStats, Position, ProcessingStats, ReviewStats, Role,
    TraineeDocumentStats,
};
use std::collections::HashMap;

// 2025-09-01T08:00:00Z — fixed so the session record never varies.
const MOCK_LOGIN_TIME: i64 = 1_756_713_600;

/// The fixture session. A real deployment replaces this with a live lookup.
pub fn auth_data() -> AuthData {
    AuthData {
        id: Some(1),
        username: Some("lt.hanh".to_string()),
        email: Some("lt.hanh@idmawa.edu.vn".to_string()),
        avatar_url: None,
        role: Some(Role::Admin.as_tag().to_string()),
        roles: Some(vec![Role::Admin.as_tag().to_string()]),
        token: Some("mock-session-token".to_string()),
        login_time: DateTime::<Utc>::from_timestamp(MOCK_LOGIN_TIME, 0),
        extra: HashMap::new(),
    }
}

fn document(id: i64, name: &str, code: Option<&str>) -> Document {
    Document {
        id,
        name: name.to_string(),
        code: code.map(str::to_string),
        extra: HashMap::new(),
    }
}

pub fn documents() -> Vec<Document> {
    vec![
        document(1, "Medical Certificate Class 1", Some("MED-1")),
        document(2, "Secondary School Transcript", Some("TRANSCRIPT")),
        document(3, "National ID or Passport", Some("ID")),
        document(4, "English Proficiency Certificate", Some("ENG-CERT")),
        document(5, "Criminal Record Check", None),
    ]
}

pub fn document_rules() -> Vec<DocumentRule> {
    vec![
        DocumentRule {
            id: 1,
            name: "Issued within the last 12 months".to_string(),
            code: Some("R-12M".to_string()),
            document: document(1, "Medical Certificate Class 1", Some("MED-1")),
            rule_value_ids: vec![1, 2],
            extra: HashMap::new(),
        },
        DocumentRule {
            id: 2,
            name: "Certified copy required".to_string(),
            code: Some("R-CERT".to_string()),
            document: document(2, "Secondary School Transcript", Some("TRANSCRIPT")),
            rule_value_ids: vec![3],
            extra: HashMap::new(),
        },
        DocumentRule {
            id: 3,
            name: "ICAO level 4 or above".to_string(),
            code: None,
            document: document(4, "English Proficiency Certificate", Some("ENG-CERT")),
            rule_value_ids: vec![4, 5, 6],
            extra: HashMap::new(),
        },
    ]
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            id: 1,
            name: "Flight Training".to_string(),
            code: Some("FT".to_string()),
            extra: HashMap::new(),
        },
        Department {
            id: 2,
            name: "Air Traffic Services".to_string(),
            code: Some("ATS".to_string()),
            extra: HashMap::new(),
        },
        Department {
            id: 3,
            name: "Aeronautical Engineering".to_string(),
            code: Some("AE".to_string()),
            extra: HashMap::new(),
        },
    ]
}

pub fn positions() -> Vec<Position> {
    vec![
        Position {
            id: 1,
            name: "Flight Instructor".to_string(),
            code: Some("FI".to_string()),
            extra: HashMap::new(),
        },
        Position {
            id: 2,
            name: "Ground Instructor".to_string(),
            code: Some("GI".to_string()),
            extra: HashMap::new(),
        },
        Position {
            id: 3,
            name: "Admissions Officer".to_string(),
            code: None,
            extra: HashMap::new(),
        },
    ]
}

pub fn matrix_programs() -> Vec<MatrixProgram> {
    vec![
        MatrixProgram {
            id: 1,
            name: "ATPL Integrated".to_string(),
            status: MatrixProgramStatus::Approved,
            criteria: vec![
                CriteriaItem {
                    id: 1,
                    name: "Minimum age 18".to_string(),
                    description: None,
                },
                CriteriaItem {
                    id: 2,
                    name: "Class 1 medical".to_string(),
                    description: Some("Valid on the enrollment date".to_string()),
                },
            ],
        },
        MatrixProgram {
            id: 2,
            name: "Air Traffic Control Basic".to_string(),
            status: MatrixProgramStatus::PendingReview,
            criteria: vec![],
        },
        MatrixProgram {
            id: 3,
            name: "Cabin Crew Initial".to_string(),
            status: MatrixProgramStatus::Rejected,
            criteria: vec![],
        },
    ]
}

pub fn admission_stats(_range: &str) -> AdmissionStats {
    AdmissionStats {
        total_trainees: 412,
        total_documents: 2874,
        total_departments: 3,
        pending_reviews: 57,
    }
}

pub fn review_stats() -> ReviewStats {
    ReviewStats {
        awaiting_review: 23,
        approved: 164,
        rejected: 11,
        programs_in_matrix: 3,
    }
}

pub fn processing_stats(_range: &str) -> ProcessingStats {
    ProcessingStats {
        received: 340,
        verified: 291,
        returned: 32,
        overdue: 17,
    }
}

pub fn trainee_document_stats() -> TraineeDocumentStats {
    TraineeDocumentStats {
        required: 8,
        submitted: 6,
        approved: 5,
        missing: 2,
    }
}

pub fn oversight_stats() -> OversightStats {
    OversightStats {
        active_programs: 5,
        pending_approvals: 2,
        trainees_enrolled: 412,
        completion_rate_pct: 87.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stats_builders_are_idempotent() {
        assert_eq!(admission_stats("30d"), admission_stats("30d"));
        assert_eq!(review_stats(), review_stats());
        assert_eq!(processing_stats("7d"), processing_stats("7d"));
        assert_eq!(trainee_document_stats(), trainee_document_stats());
        assert_eq!(oversight_stats(), oversight_stats());
    }

    #[test]
    fn stats_builders_ignore_their_argument() {
        assert_eq!(admission_stats("7d"), admission_stats("all-time"));
        assert_eq!(processing_stats(""), processing_stats("anything"));
    }

    #[test]
    fn collections_are_stable_across_calls() {
        assert_eq!(documents(), documents());
        assert_eq!(document_rules(), document_rules());
        assert_eq!(departments(), departments());
        assert_eq!(positions(), positions());
        assert_eq!(matrix_programs(), matrix_programs());
    }

    #[test]
    fn fixture_session_has_a_recognized_role() {
        let session = auth_data();
        assert_eq!(session.primary_role(), Some(Role::Admin));
        assert!(session.login_time.is_some());
    }

    #[test]
    fn document_rules_reference_known_documents() {
        let ids: Vec<i64> = documents().iter().map(|d| d.id).collect();
        for rule in document_rules() {
            assert!(ids.contains(&rule.document.id));
        }
    }
}
