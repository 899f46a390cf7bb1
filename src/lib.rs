//! Apptrack: a job-application capture tool
//!
//! This crate extracts structured job-posting fields (company, position,
//! location, canonical link) from the markup of a job-listing page on one of
//! several known job boards, falling back to interactive entry for anything
//! the automated path cannot resolve, and records the result as a new page in
//! a Notion database.
//!
//! Each failure domain carries its own error type: [`ConfigError`] here,
//! [`pipeline::FetchError`] at the fetch boundary, and
//! [`notion::NotionError`] at the record-store boundary.

pub mod config;
pub mod extract;
pub mod notion;
pub mod pipeline;
pub mod prompt;
pub mod record;
pub mod router;

use thiserror::Error;

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

// Re-export commonly used types
pub use config::Config;
pub use extract::Strategy;
pub use record::{Field, JobRecord};
pub use router::{route, Source};
