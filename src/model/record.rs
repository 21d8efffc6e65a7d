//! The user record wire/domain type.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// One user entry from the roster dataset.
///
/// Deserialized straight from the wire JSON (an array of flat objects).
/// Unknown extra fields are ignored so upstream additions never break the
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique record identifier (assumed unique per snapshot).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role label (e.g. "member", "admin").
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_dataset_json() {
        let json = r#"{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}"#;
        let record: UserRecord = serde_json::from_str(json).expect("Valid record JSON");
        assert_eq!(record.id.as_str(), "1");
        assert_eq!(record.name, "Aaron Miles");
        assert_eq!(record.email, "aaron@mailinator.com");
        assert_eq!(record.role, "member");
    }

    #[test]
    fn record_ignores_unknown_fields() {
        let json = r#"{"id":"2","name":"B","email":"b@x.com","role":"admin","team":"core"}"#;
        let record: UserRecord = serde_json::from_str(json).expect("Extra fields are ignored");
        assert_eq!(record.role, "admin");
    }

    #[test]
    fn record_with_empty_id_is_rejected() {
        let json = r#"{"id":"","name":"B","email":"b@x.com","role":"admin"}"#;
        let result: Result<UserRecord, _> = serde_json::from_str(json);
        assert!(result.is_err(), "Empty id should fail the smart constructor");
    }

    #[test]
    fn record_array_deserializes_in_order() {
        let json = r#"[
            {"id":"1","name":"A","email":"a@x.com","role":"member"},
            {"id":"2","name":"B","email":"b@x.com","role":"admin"}
        ]"#;
        let records: Vec<UserRecord> = serde_json::from_str(json).expect("Valid array");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "1");
        assert_eq!(records[1].id.as_str(), "2");
    }
}
