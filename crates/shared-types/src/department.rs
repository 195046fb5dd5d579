use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An organizational unit of the academy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A staff position within a department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn department_roundtrip() {
        let dept = Department {
            id: 3,
            name: "Flight Training".to_string(),
            code: Some("FT".to_string()),
            extra: HashMap::new(),
        };
        let json = serde_json::to_string(&dept).unwrap();
        let parsed: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(dept, parsed);
    }

    #[test]
    fn position_optional_code_omitted_from_json() {
        let pos = Position {
            id: 9,
            name: "Ground Instructor".to_string(),
            code: None,
            extra: HashMap::new(),
        };
        let json = serde_json::to_string(&pos).unwrap();
        assert!(!json.contains("\"code\""));
    }
}
