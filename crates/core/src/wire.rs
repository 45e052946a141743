//! JSON decode/encode boundary for catalog payloads.
//!
//! Field names are matched exactly. Unknown fields sent by the service are
//! ignored so newer payloads keep decoding. Every decode failure is mapped to
//! a [`CatalogError`]; callers that only care about the missing-field /
//! type-mismatch case can use [`CatalogError::is_malformed_record`].

use std::io::Read;

use crate::error::CatalogError;
use crate::movie::MovieRecord;
use crate::page::MovieResponsePage;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one listing page from a JSON string.
pub fn decode_page(json: &str) -> Result<MovieResponsePage, CatalogError> {
    decode_page_slice(json.as_bytes())
}

/// Decode one listing page from raw response bytes.
pub fn decode_page_slice(bytes: &[u8]) -> Result<MovieResponsePage, CatalogError> {
    match serde_json::from_slice::<MovieResponsePage>(bytes) {
        Ok(page) => {
            tracing::debug!(
                page = page.page,
                total_pages = page.total_pages,
                total_results = page.total_results,
                result_count = page.results.len(),
                "Decoded movie listing page",
            );
            Ok(page)
        }
        Err(e) => {
            let err = decode_failure(e, bytes);
            tracing::warn!(error = %err, "Rejected movie listing payload");
            Err(err)
        }
    }
}

/// Decode one listing page from a reader (file, response body, ...).
///
/// The reader is drained before parsing. Reader failures surface as
/// [`CatalogError::Io`].
pub fn decode_page_reader<R: Read>(mut reader: R) -> Result<MovieResponsePage, CatalogError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_page_slice(&bytes)
}

/// Decode a single catalog entry.
pub fn decode_record(json: &str) -> Result<MovieRecord, CatalogError> {
    serde_json::from_str(json).map_err(|e| {
        let err = decode_failure(e, json.as_bytes());
        tracing::warn!(error = %err, "Rejected movie record payload");
        err
    })
}

/// Classify a decode failure. A blank body (e.g. an empty 204 response) is
/// not JSON at all, even though `serde_json` reports it as an early EOF.
fn decode_failure(err: serde_json::Error, input: &[u8]) -> CatalogError {
    if input.iter().all(u8::is_ascii_whitespace) {
        return CatalogError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: "empty payload".to_string(),
        };
    }
    CatalogError::from_decode(err)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a page to its wire form. An absent poster is written as `null`.
///
/// Fails with [`CatalogError::Encode`] if any score is NaN or infinite, since
/// JSON has no spelling for those and `serde_json` would write `null`.
pub fn encode_page(page: &MovieResponsePage) -> Result<String, CatalogError> {
    page.results.iter().try_for_each(ensure_finite_scores)?;
    serde_json::to_string(page).map_err(|e| CatalogError::Encode(e.to_string()))
}

/// Encode a single record to its wire form. Non-finite scores are rejected
/// as in [`encode_page`].
pub fn encode_record(record: &MovieRecord) -> Result<String, CatalogError> {
    ensure_finite_scores(record)?;
    serde_json::to_string(record).map_err(|e| CatalogError::Encode(e.to_string()))
}

fn ensure_finite_scores(record: &MovieRecord) -> Result<(), CatalogError> {
    for (field, value) in [
        ("vote_average", record.vote_average),
        ("popularity", record.popularity),
    ] {
        if !value.is_finite() {
            return Err(CatalogError::Encode(format!(
                "movie {}: {field} is {value}, which JSON cannot represent",
                record.id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
