//! Offline decoding of captured listing payloads.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use marquee_core::types::{Count, PageNumber};
use marquee_core::wire::decode_page_slice;
use marquee_core::{CatalogError, MovieResponsePage};

/// Counts logged for one decoded payload file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub page: PageNumber,
    pub total_pages: Count,
    pub total_results: Count,
    pub result_count: usize,
    /// Records whose `poster_path` was `null`.
    pub without_poster: usize,
}

impl PageSummary {
    pub fn from_page(page: &MovieResponsePage) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
            result_count: page.results.len(),
            without_poster: page
                .results
                .iter()
                .filter(|m| m.poster_path.is_none())
                .count(),
        }
    }
}

/// Outcome of a full run over every configured file.
#[derive(Debug, Default)]
pub struct InspectReport {
    pub decoded: Vec<(PathBuf, PageSummary)>,
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

impl InspectReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read a payload file into memory and decode it.
pub fn inspect_file(path: &Path) -> anyhow::Result<PageSummary> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let page = decode_page_slice(&bytes).map_err(|e| {
        let kind = match &e {
            CatalogError::MalformedRecord { .. } => "malformed record",
            CatalogError::InvalidJson { .. } => "invalid JSON",
            CatalogError::Io(_) => "read failure",
            CatalogError::Encode(_) => "encode failure",
        };
        anyhow::Error::new(e).context(format!("{kind} in {}", path.display()))
    })?;
    Ok(PageSummary::from_page(&page))
}

/// Decode every file, logging one event per file. Failures do not stop the
/// run.
pub fn run<P: AsRef<Path>>(paths: &[P]) -> InspectReport {
    let mut report = InspectReport::default();

    for path in paths {
        let path = path.as_ref();
        match inspect_file(path) {
            Ok(summary) => {
                tracing::info!(
                    path = %path.display(),
                    page = summary.page,
                    total_pages = summary.total_pages,
                    total_results = summary.total_results,
                    result_count = summary.result_count,
                    without_poster = summary.without_poster,
                    "Decoded listing page",
                );
                report.decoded.push((path.to_path_buf(), summary));
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %format!("{e:#}"),
                    "Failed to decode listing page",
                );
                report.failed.push((path.to_path_buf(), e));
            }
        }
    }

    tracing::info!(
        decoded = report.decoded.len(),
        failed = report.failed.len(),
        "Inspection complete",
    );
    report
}
