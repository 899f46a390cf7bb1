//! Retry/fallback controller
//!
//! Orchestrates fetch, parse, and extraction across a bounded number of
//! attempts, then routes any still-unresolved field to manual collection.
//! Transport failures and incomplete extractions draw from the same attempt
//! budget; neither is fatal, and no backoff is applied between attempts.

use reqwest::Client;
use scraper::Html;

use crate::extract::Strategy;
use crate::pipeline::fetcher::fetch_page;
use crate::prompt::{collect_missing, FieldPrompter};
use crate::record::JobRecord;

/// Attempt budget for the automated extraction loop
pub const MAX_ATTEMPTS: u32 = 3;

/// Terminal state of the automated extraction path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All required fields were resolved by automated extraction
    Complete,

    /// The attempt budget ran out (or there was nothing to fetch) with
    /// fields still unresolved
    Exhausted,
}

/// Runs the bounded fetch-parse-extract loop.
///
/// A strategy without a fetch target exhausts immediately: there is nothing
/// the automated path can do for it. Fields captured on earlier attempts are
/// kept; each retry re-runs the full cycle over a fresh fetch.
pub async fn run_attempts(
    client: &Client,
    strategy: &Strategy,
    record: &mut JobRecord,
) -> RunOutcome {
    let fetch_url = match strategy.fetch_target() {
        Some(url) => url,
        None => {
            tracing::debug!(
                "No fetch target for {:?} source, skipping automated extraction",
                strategy.source()
            );
            return RunOutcome::Exhausted;
        }
    };

    for attempt in 1..=MAX_ATTEMPTS {
        match fetch_page(client, fetch_url).await {
            Ok(body) => {
                // html5ever recovers from malformed markup rather than
                // failing, so a bad page surfaces as missing fields below.
                let document = Html::parse_document(&body);
                strategy.extract(&document, record);

                if record.is_complete() {
                    tracing::info!("Extraction complete after {} attempt(s)", attempt);
                    return RunOutcome::Complete;
                }
                tracing::warn!(
                    "Attempt {}/{}: extraction incomplete, missing {:?}",
                    attempt,
                    MAX_ATTEMPTS,
                    record.missing_fields()
                );
            }
            Err(e) => {
                tracing::warn!("Attempt {}/{}: {}", attempt, MAX_ATTEMPTS, e);
            }
        }
    }

    RunOutcome::Exhausted
}

/// Runs the automated loop and backstops it with manual collection.
///
/// After exhaustion every still-missing field is prompted for individually;
/// fields already captured (by router pre-population or a partial
/// extraction) are never re-prompted. The record is guaranteed complete
/// afterwards. The returned outcome reflects the automated path, so callers
/// can tell a clean run from a manually backstopped one.
pub async fn extract_record<P: FieldPrompter>(
    client: &Client,
    strategy: &Strategy,
    record: &mut JobRecord,
    prompter: &mut P,
) -> RunOutcome {
    let outcome = run_attempts(client, strategy, record).await;
    if outcome == RunOutcome::Exhausted {
        collect_missing(record, prompter);
    }
    outcome
}
