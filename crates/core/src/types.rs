/// Catalog identifiers are assigned by the upstream service.
pub type MovieId = i64;

/// 1-based page index, as numbered by the upstream service.
pub type PageNumber = i64;

/// Page and result counters reported alongside a listing page.
pub type Count = i64;

/// Rating and popularity metrics. Ranges are not enforced.
pub type Score = f64;
