//! Source router
//!
//! Inspects a raw job-posting link and selects the matching extraction
//! strategy. Matching is first-match-wins over a fixed priority order
//! (LinkedIn, Greenhouse, Lever), with everything else routed to the
//! generic strategy. Routing also normalizes the link into the record and
//! pre-populates any field derivable from the URL alone.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::extract::Strategy;
use crate::record::{Field, JobRecord};

/// The closed set of supported job-board sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    LinkedIn,
    Greenhouse,
    Lever,
    Generic,
}

/// LinkedIn guest API endpoint serving the raw posting markup
const LINKEDIN_FETCH_BASE: &str = "https://www.linkedin.com/jobs-guest/jobs/api/jobPosting/";

/// Canonical public view URL for a LinkedIn posting
const LINKEDIN_VIEW_BASE: &str = "https://www.linkedin.com/jobs/view/";

/// First run of 9 or more consecutive digits in a link
fn job_id_regex() -> &'static Regex {
    static JOB_ID: OnceLock<Regex> = OnceLock::new();
    JOB_ID.get_or_init(|| Regex::new(r"\d{9,}").expect("digit-run pattern is valid"))
}

/// Routes a raw link to its extraction strategy.
///
/// Side effects on the record:
/// - `record.link` is always set to the canonical link (for LinkedIn this is
///   the public view URL synthesized from the job id, not the fetch URL;
///   otherwise it is the trimmed input).
/// - For Lever, the company path segment pre-populates `record.company`
///   before any fetch happens.
///
/// A missing required capture (no LinkedIn job id, no Lever company segment)
/// is a recoverable "cannot auto-extract" condition: the affected strategy
/// or field degrades and routing never fails.
pub fn route(raw_link: &str, record: &mut JobRecord) -> Strategy {
    let link = raw_link.trim();

    if link.contains("linkedin.com") {
        return match job_id_regex().find(link) {
            Some(id) => {
                let id = id.as_str();
                record.link = format!("{}{}", LINKEDIN_VIEW_BASE, id);
                Strategy::new(
                    Source::LinkedIn,
                    Some(format!("{}{}", LINKEDIN_FETCH_BASE, id)),
                )
            }
            None => {
                tracing::warn!("LinkedIn link has no numeric job id: {}", link);
                record.link = link.to_string();
                Strategy::new(Source::LinkedIn, None)
            }
        };
    }

    if link.contains("greenhouse.io") {
        record.link = link.to_string();
        return Strategy::new(Source::Greenhouse, Some(link.to_string()));
    }

    if link.contains("jobs.lever.co") {
        record.link = link.to_string();
        match lever_company_segment(link) {
            Some(company) => record.set(Field::Company, company),
            None => tracing::warn!("Lever link has no company path segment: {}", link),
        }
        return Strategy::new(Source::Lever, Some(link.to_string()));
    }

    tracing::debug!("No known source matched, routing to manual entry: {}", link);
    record.link = link.to_string();
    Strategy::new(Source::Generic, None)
}

/// Extracts the company name from the first path segment of a Lever link
/// (`https://jobs.lever.co/{company}/...`).
fn lever_company_segment(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let mut segments = url.path_segments()?;
    let company = segments.next()?.trim();
    if company.is_empty() {
        None
    } else {
        Some(company.to_string())
    }
}
