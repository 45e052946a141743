//! A single catalog entry as returned by the upstream service.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::types::{MovieId, Score};

/// One movie in a catalog listing.
///
/// `id` is the only field with identity semantics. Nothing here validates
/// dates, score ranges or titles; the upstream service owns those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, rename = "Movie")]
pub struct MovieRecord {
    #[ts(type = "number")]
    pub id: MovieId,
    pub title: String,
    /// Free-text synopsis. May be empty.
    pub overview: String,
    /// Relative image path. `None` means the service sent `null` ("no
    /// poster"), which is not the same as `Some("")`.
    ///
    /// The key itself must be present on the wire.
    #[serde(deserialize_with = "present_or_null")]
    #[ts(type = "string | null")]
    pub poster_path: Option<String>,
    /// Calendar date as text, in whatever format the service uses.
    pub release_date: String,
    pub vote_average: Score,
    pub popularity: Score,
}

/// Accepts a string or an explicit `null`.
///
/// Routing the field through `deserialize_with` keeps serde from defaulting a
/// missing key to `None`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MovieRecord {
        MovieRecord {
            id: 603,
            title: "The Matrix".to_string(),
            overview: "A hacker learns the truth about his reality.".to_string(),
            poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string()),
            release_date: "1999-03-30".to_string(),
            vote_average: 8.2,
            popularity: 73.914,
        }
    }

    #[test]
    fn record_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialization should succeed");
        let back: MovieRecord =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(record, back);
    }

    #[test]
    fn record_round_trip_without_poster() {
        let mut record = sample_record();
        record.poster_path = None;
        let json = serde_json::to_string(&record).unwrap();
        let back: MovieRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.poster_path, None);
        assert_eq!(record, back);
    }

    #[test]
    fn absent_poster_serializes_as_null() {
        let mut record = sample_record();
        record.poster_path = None;
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("poster_path"));
        assert!(obj["poster_path"].is_null());
    }

    #[test]
    fn empty_poster_is_not_absent() {
        let json = r#"{"id":1,"title":"T","overview":"","poster_path":"","release_date":"","vote_average":0,"popularity":0}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.poster_path.as_deref(), Some(""));
        assert_ne!(record.poster_path, None);
    }

    #[test]
    fn missing_poster_key_is_rejected() {
        let json = r#"{"id":1,"title":"T","overview":"","release_date":"","vote_average":0,"popularity":0}"#;
        let err = serde_json::from_str::<MovieRecord>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `poster_path`"));
    }

    #[test]
    fn integer_scores_are_accepted() {
        let json = r#"{"id":7,"title":"T","overview":"O","poster_path":null,"release_date":"2001-01-01","vote_average":7,"popularity":12}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.vote_average, 7.0);
        assert_eq!(record.popularity, 12.0);
    }

    #[test]
    fn typescript_declaration_matches_interface() {
        let decl = MovieRecord::decl();
        assert!(decl.contains("type Movie ="), "unexpected decl: {decl}");
        assert!(decl.contains("id: number"), "unexpected decl: {decl}");
        assert!(
            decl.contains("poster_path: string | null"),
            "unexpected decl: {decl}"
        );
        assert!(decl.contains("vote_average: number"), "unexpected decl: {decl}");
    }
}
