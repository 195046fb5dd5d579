use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Permission class controlling which layouts and pages are reachable.
///
/// Tags are matched exactly as the backend sends them — case-sensitive, no
/// normalization. Unknown tags parse to `None`, and every call site handles
/// that case explicitly rather than defaulting to a guessed role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Head,
    AcademicStaffAffair,
    Trainee,
    TrainingDirector,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Head,
    Role::AcademicStaffAffair,
    Role::Trainee,
    Role::TrainingDirector,
];

impl Role {
    /// Parse a backend role tag. Exact match only — `"admin"` is not `ADMIN`.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "HEAD" => Some(Role::Head),
            "ACADEMIC_STAFF_AFFAIR" => Some(Role::AcademicStaffAffair),
            "TRAINEE" => Some(Role::Trainee),
            "TRAINING_DIRECTOR" => Some(Role::TrainingDirector),
            _ => None,
        }
    }

    /// The wire tag the backend uses for this role.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Head => "HEAD",
            Role::AcademicStaffAffair => "ACADEMIC_STAFF_AFFAIR",
            Role::Trainee => "TRAINEE",
            Role::TrainingDirector => "TRAINING_DIRECTOR",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Head => "Department Head",
            Role::AcademicStaffAffair => "Academic Staff Affairs",
            Role::Trainee => "Trainee",
            Role::TrainingDirector => "Training Director",
        }
    }
}

/// Session payload returned by the authentication endpoints.
///
/// Every field is optional — the backend omits what it does not know.
/// Unrecognized fields are preserved in `extra` instead of being widened
/// into untyped fields on the struct itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Primary role tag (e.g. `"ADMIN"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Full role tag list, when the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<DateTime<Utc>>,
    /// Side-map of fields this client does not model.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AuthData {
    /// The parsed primary role, if the backend sent a recognized tag.
    pub fn primary_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_tag)
    }

    /// True iff the stored role equals `role` exactly.
    pub fn has_role(&self, role: Role) -> bool {
        self.primary_role() == Some(role)
    }

    /// True iff [`Self::has_role`] holds for at least one element.
    ///
    /// Short-circuits on the first match; false for an empty slice
    /// regardless of the stored role.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(*r))
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session_with_role(tag: &str) -> AuthData {
        AuthData {
            role: Some(tag.to_string()),
            ..AuthData::default()
        }
    }

    #[test]
    fn role_tag_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_tag(role.as_tag()), Some(*role));
        }
    }

    #[test]
    fn role_parse_is_case_sensitive() {
        assert_eq!(Role::from_tag("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_tag("admin"), None);
        assert_eq!(Role::from_tag("Admin"), None);
        assert_eq!(Role::from_tag("academic_staff_affair"), None);
    }

    #[test]
    fn role_parse_rejects_unknown_tags() {
        assert_eq!(Role::from_tag(""), None);
        assert_eq!(Role::from_tag("STUDENT"), None);
        assert_eq!(Role::from_tag("SUPERUSER"), None);
    }

    #[test]
    fn role_serde_tags_match_wire_format() {
        assert_eq!(
            serde_json::to_string(&Role::AcademicStaffAffair).unwrap(),
            "\"ACADEMIC_STAFF_AFFAIR\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"TRAINING_DIRECTOR\"").unwrap(),
            Role::TrainingDirector
        );
    }

    #[test]
    fn has_role_is_exact_equality() {
        let session = session_with_role("HEAD");
        assert!(session.has_role(Role::Head));
        assert!(!session.has_role(Role::Admin));
    }

    #[test]
    fn has_role_false_without_session_role() {
        let session = AuthData::default();
        assert!(!session.has_role(Role::Admin));
        assert!(!session.has_role(Role::Trainee));
    }

    #[test]
    fn has_any_role_is_disjunction() {
        let session = session_with_role("TRAINEE");
        assert!(session.has_any_role(&[Role::Admin, Role::Trainee]));
        assert!(session.has_any_role(&[Role::Trainee]));
        assert!(!session.has_any_role(&[Role::Admin, Role::Head]));
    }

    #[test]
    fn has_any_role_false_for_empty_list() {
        let session = session_with_role("ADMIN");
        assert!(!session.has_any_role(&[]));
    }

    #[test]
    fn unknown_role_tag_fails_every_predicate() {
        let session = session_with_role("SUPERUSER");
        assert_eq!(session.primary_role(), None);
        assert!(!session.has_any_role(ALL_ROLES));
    }

    #[test]
    fn auth_data_preserves_unmodeled_fields() {
        let json = r#"{
            "id": 7,
            "username": "nvb.khanh",
            "role": "ACADEMIC_STAFF_AFFAIR",
            "department_code": "FLT-OPS",
            "two_factor": true
        }"#;
        let session: AuthData = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, Some(7));
        assert_eq!(session.primary_role(), Some(Role::AcademicStaffAffair));
        assert_eq!(
            session.extra.get("department_code").unwrap(),
            &serde_json::json!("FLT-OPS")
        );
        assert_eq!(session.extra.get("two_factor").unwrap(), &serde_json::json!(true));

        let reserialized = serde_json::to_value(&session).unwrap();
        assert_eq!(reserialized["department_code"], serde_json::json!("FLT-OPS"));
    }

    #[test]
    fn auth_data_all_fields_optional() {
        let session: AuthData = serde_json::from_str("{}").unwrap();
        assert_eq!(session, AuthData::default());
    }
}
