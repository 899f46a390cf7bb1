//! Extraction pipeline
//!
//! The fetcher performs single classified GETs; the controller owns the
//! retry budget and the fallback to manual collection.

pub mod controller;
pub mod fetcher;

pub use controller::{extract_record, run_attempts, RunOutcome, MAX_ATTEMPTS};
pub use fetcher::{build_http_client, fetch_page, FetchError};
