use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An admission document type tracked by the academy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Document {
    pub id: i64,
    pub name: String,
    /// Short code (e.g. `"MED-CERT"`), when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A validation rule attached to an admission document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentRule {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The parent document this rule applies to.
    pub document: Document,
    /// Identifiers of the rule values associated with this rule.
    #[serde(default)]
    pub rule_value_ids: Vec<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_deserializes_with_optional_code_absent() {
        let doc: Document = serde_json::from_str(r#"{"id":1,"name":"Medical Certificate"}"#).unwrap();
        assert_eq!(doc.id, 1);
        assert_eq!(doc.code, None);
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn document_rule_references_parent_and_values() {
        let json = r#"{
            "id": 12,
            "name": "Issued within 12 months",
            "code": "R-12M",
            "document": {"id": 1, "name": "Medical Certificate", "code": "MED-CERT"},
            "rule_value_ids": [3, 5, 8]
        }"#;
        let rule: DocumentRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.document.code.as_deref(), Some("MED-CERT"));
        assert_eq!(rule.rule_value_ids, vec![3, 5, 8]);
    }

    #[test]
    fn document_rule_value_ids_default_empty() {
        let json = r#"{"id":2,"name":"Original required","document":{"id":1,"name":"Transcript"}}"#;
        let rule: DocumentRule = serde_json::from_str(json).unwrap();
        assert!(rule.rule_value_ids.is_empty());
    }

    #[test]
    fn unmodeled_fields_survive_roundtrip() {
        let json = r#"{"id":4,"name":"Passport","issuing_authority":"Immigration Dept"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["issuing_authority"], serde_json::json!("Immigration Dept"));
    }
}
