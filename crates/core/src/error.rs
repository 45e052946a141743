use serde_json::error::Category;

/// Failures surfaced at the wire boundary.
///
/// The shapes themselves never fail; these errors come from decoding a
/// payload into them (or, in theory, encoding them back out).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A required field is missing or has the wrong type, `poster_path` is
    /// neither a string nor `null`, or the document ends early.
    #[error("Malformed record at line {line}, column {column}: {message}")]
    MalformedRecord {
        line: usize,
        column: usize,
        message: String,
    },

    /// The payload is not JSON at all.
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// The underlying reader failed.
    #[error("I/O error while reading payload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encode error: {0}")]
    Encode(String),
}

impl CatalogError {
    /// Classify a decode failure from `serde_json`.
    pub fn from_decode(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        match err.classify() {
            Category::Io => CatalogError::Io(err.into()),
            Category::Syntax => CatalogError::InvalidJson {
                line,
                column,
                message: err.to_string(),
            },
            Category::Data | Category::Eof => CatalogError::MalformedRecord {
                line,
                column,
                message: err.to_string(),
            },
        }
    }

    /// Returns `true` for the missing-field / type-mismatch kind.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, CatalogError::MalformedRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn syntax_errors_classify_as_invalid_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_matches!(
            CatalogError::from_decode(err),
            CatalogError::InvalidJson { line: 1, .. }
        );
    }

    #[test]
    fn data_errors_classify_as_malformed_record() {
        let err = serde_json::from_str::<u32>("\"forty-two\"").unwrap_err();
        let classified = CatalogError::from_decode(err);
        assert!(classified.is_malformed_record());
    }

    #[test]
    fn truncated_documents_classify_as_malformed_record() {
        let err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        assert_matches!(
            CatalogError::from_decode(err),
            CatalogError::MalformedRecord { .. }
        );
    }

    #[test]
    fn display_includes_position() {
        let err = CatalogError::MalformedRecord {
            line: 3,
            column: 14,
            message: "missing field `title`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record at line 3, column 14: missing field `title`"
        );
    }
}
