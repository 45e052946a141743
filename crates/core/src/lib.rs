//! `marquee-core` -- wire contract for movie catalog listings.
//!
//! Declares the shape of a single catalog entry ([`MovieRecord`]) and of one
//! page of a paginated listing ([`MovieResponsePage`]) as returned by the
//! upstream media catalog service, plus the JSON decode boundary in
//! [`wire`]. Fetching, caching and pagination traversal live elsewhere.

pub mod error;
pub mod movie;
pub mod page;
pub mod types;
pub mod wire;

pub use error::CatalogError;
pub use movie::MovieRecord;
pub use page::MovieResponsePage;
