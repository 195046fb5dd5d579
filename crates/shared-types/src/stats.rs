use serde::{Deserialize, Serialize};

/// Academy-wide admission metrics shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdmissionStats {
    pub total_trainees: i64,
    pub total_documents: i64,
    pub total_departments: i64,
    pub pending_reviews: i64,
}

/// Review-queue metrics for the department head dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewStats {
    pub awaiting_review: i64,
    pub approved: i64,
    pub rejected: i64,
    pub programs_in_matrix: i64,
}

/// Document-processing metrics for the academic staff affairs dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessingStats {
    pub received: i64,
    pub verified: i64,
    pub returned: i64,
    pub overdue: i64,
}

/// Per-trainee submission metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraineeDocumentStats {
    pub required: i64,
    pub submitted: i64,
    pub approved: i64,
    pub missing: i64,
}

/// Program oversight metrics for the training director dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OversightStats {
    pub active_programs: i64,
    pub pending_approvals: i64,
    pub trainees_enrolled: i64,
    pub completion_rate_pct: f64,
}
