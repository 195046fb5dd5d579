use serde::{Deserialize, Serialize};

/// A single admission criterion evaluated in the head-role criteria matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriteriaItem {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Review status of a training program in the criteria matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatrixProgramStatus {
    #[default]
    PendingReview,
    Approved,
    Rejected,
}

impl MatrixProgramStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixProgramStatus::PendingReview => "pending_review",
            MatrixProgramStatus::Approved => "approved",
            MatrixProgramStatus::Rejected => "rejected",
        }
    }

    /// Human-readable label for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            MatrixProgramStatus::PendingReview => "Pending Review",
            MatrixProgramStatus::Approved => "Approved",
            MatrixProgramStatus::Rejected => "Rejected",
        }
    }
}

/// A training program row in the criteria matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixProgram {
    pub id: i64,
    pub name: String,
    pub status: MatrixProgramStatus,
    #[serde(default)]
    pub criteria: Vec<CriteriaItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_serializes_to_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&MatrixProgramStatus::PendingReview).unwrap(),
            "\"pending_review\""
        );
        assert_eq!(
            serde_json::to_string(&MatrixProgramStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&MatrixProgramStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn status_rejects_tags_outside_closed_set() {
        assert!(serde_json::from_str::<MatrixProgramStatus>("\"draft\"").is_err());
        assert!(serde_json::from_str::<MatrixProgramStatus>("\"PENDING_REVIEW\"").is_err());
    }

    #[test]
    fn program_deserializes_with_empty_criteria() {
        let json = r#"{"id":1,"name":"ATPL Integrated","status":"approved"}"#;
        let program: MatrixProgram = serde_json::from_str(json).unwrap();
        assert_eq!(program.status, MatrixProgramStatus::Approved);
        assert!(program.criteria.is_empty());
    }
}
