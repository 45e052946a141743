use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::movie::MovieRecord;
use crate::types::{Count, PageNumber};

/// One page of a paginated movie listing.
///
/// The counters are supplied by the upstream service and may drift between
/// requests. No relationship between `results.len()`, `total_results`,
/// `total_pages` and `page` is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, rename = "MovieResponse")]
pub struct MovieResponsePage {
    #[ts(type = "number")]
    pub page: PageNumber,
    /// Ranked as returned by the service.
    pub results: Vec<MovieRecord>,
    #[ts(type = "number")]
    pub total_pages: Count,
    #[ts(type = "number")]
    pub total_results: Count,
}
