//! Wire encoding for the persisted goal collection.
//!
//! The slot holds a JSON array of goal objects using the field names declared
//! on `Goal`. `decode(encode(goals)) == goals` for every valid collection.

use crate::model::goal::Goal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode goals: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode goals: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encodes the full ordered collection.
pub fn encode(goals: &[Goal]) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(goals).map_err(CodecError::Encode)
}

/// Decodes a full ordered collection; any malformed element fails the whole call.
pub fn decode(bytes: &[u8]) -> Result<Vec<Goal>, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, CodecError};
    use crate::model::goal::Goal;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn encodes_json_array_with_camel_case_fields() {
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let target = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap();
        let goal = Goal::with_id(id, "Run 5k", target, true, created);

        let bytes = encode(std::slice::from_ref(&goal)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let first = &value.as_array().expect("array")[0];
        assert_eq!(first["id"], id.to_string());
        assert_eq!(first["title"], "Run 5k");
        assert_eq!(first["targetDate"], "2026-05-01T00:00:00Z");
        assert_eq!(first["isCompleted"], true);
        assert_eq!(first["createdDate"], "2026-04-01T09:30:00Z");
        assert_eq!(decode(&bytes).unwrap(), vec![goal]);
    }

    #[test]
    fn empty_collection_encodes_as_empty_array() {
        let bytes = encode(&[]).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn one_bad_element_fails_the_whole_decode() {
        let raw = br#"[
            {"id":"11111111-2222-4333-8444-555555555555","title":"ok",
             "targetDate":"2026-05-01T00:00:00Z","isCompleted":false,
             "createdDate":"2026-04-01T00:00:00Z"},
            {"id":"11111111-2222-4333-8444-666666666666","title":"missing flag",
             "targetDate":"2026-05-01T00:00:00Z",
             "createdDate":"2026-04-01T00:00:00Z"}
        ]"#;

        assert!(matches!(decode(raw), Err(CodecError::Decode(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let raw = br#"[{"id":"11111111-2222-4333-8444-555555555555","title":"x",
            "targetDate":"2026-05-01T00:00:00Z","isCompleted":false,
            "createdDate":"2026-04-01T00:00:00Z","priority":3}]"#;

        assert!(decode(raw).is_err());
    }
}
