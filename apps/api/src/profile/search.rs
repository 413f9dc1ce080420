//! Search adapter — obtains raw result records for a handle, isolating the
//! pipeline from the search capability's instability.
//!
//! Four query strategies run in order until one yields at least one relevant
//! record. Auth and rate-limit failures abort the ladder immediately (another
//! query will not fix a credential or quota problem); timeouts and transport
//! errors advance to the next strategy.

use thiserror::Error;
use tracing::{info, warn};

use crate::profile::extract::is_relevant;
use crate::search_client::{
    MatchMode, SearchApiError, SearchCapability, SearchQuery, SearchRecord,
};

/// Results below this text length with no highlights are "thin" and trigger
/// one enrichment fetch.
const MIN_TEXT_LEN: usize = 80;
/// Upper bound on profile URLs sent to the enrichment fetch.
const MAX_ENRICH_URLS: usize = 3;
const RESULTS_PER_STRATEGY: usize = 10;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search API authentication failed")]
    AuthFailure,

    #[error("search API rate limited")]
    RateLimited,

    #[error("search timed out on every strategy")]
    Timeout,

    #[error("no relevant search results for the handle")]
    NoResults,

    #[error("search transport failure: {0}")]
    Transport(String),
}

struct Strategy {
    label: &'static str,
    query: SearchQuery,
}

/// The ordered strategy ladder for a handle.
fn strategies(handle: &str) -> Vec<Strategy> {
    vec![
        Strategy {
            label: "profile-url",
            query: SearchQuery {
                query: format!("x.com/{handle}"),
                num_results: RESULTS_PER_STRATEGY,
                include_domains: vec!["x.com".to_string(), "twitter.com".to_string()],
                mode: MatchMode::Keyword,
            },
        },
        Strategy {
            label: "natural-language",
            query: SearchQuery {
                query: format!("{handle} twitter profile bio and recent posts"),
                num_results: RESULTS_PER_STRATEGY,
                include_domains: vec![],
                mode: MatchMode::Neural,
            },
        },
        Strategy {
            label: "mention-author",
            query: SearchQuery {
                query: format!("from:{handle} OR @{handle}"),
                num_results: RESULTS_PER_STRATEGY,
                include_domains: vec!["x.com".to_string(), "twitter.com".to_string()],
                mode: MatchMode::Keyword,
            },
        },
        Strategy {
            label: "unscoped",
            query: SearchQuery {
                query: format!("\"{handle}\" social media profile"),
                num_results: RESULTS_PER_STRATEGY,
                include_domains: vec![],
                mode: MatchMode::Neural,
            },
        },
    ]
}

/// Runs the strategy ladder and returns the first result set containing at
/// least one relevant record, enriched if its content is thin.
pub async fn search_for_handle(
    search: &dyn SearchCapability,
    handle: &str,
) -> Result<Vec<SearchRecord>, SearchError> {
    let mut last_failure: Option<SearchError> = None;
    let mut any_strategy_responded = false;

    for strategy in strategies(handle) {
        match search.search(&strategy.query).await {
            Ok(records) => {
                any_strategy_responded = true;
                if records.iter().any(|r| is_relevant(r, handle)) {
                    info!(
                        "search strategy '{}' found {} records for @{handle}",
                        strategy.label,
                        records.len()
                    );
                    return Ok(enrich_if_thin(search, records, handle).await);
                }
                warn!(
                    "search strategy '{}' returned {} records, none relevant — trying next",
                    strategy.label,
                    records.len()
                );
            }
            // A credential or quota problem is not per-strategy transient.
            Err(SearchApiError::AuthFailure) => return Err(SearchError::AuthFailure),
            Err(SearchApiError::RateLimited) => return Err(SearchError::RateLimited),
            Err(SearchApiError::Timeout) => {
                warn!("search strategy '{}' timed out — trying next", strategy.label);
                last_failure = Some(SearchError::Timeout);
            }
            Err(SearchApiError::Transport(msg)) => {
                warn!(
                    "search strategy '{}' transport error: {msg} — trying next",
                    strategy.label
                );
                last_failure = Some(SearchError::Transport(msg));
            }
        }
    }

    // Strategies that responded but found nothing relevant mean the handle
    // has no usable footprint; only all-errored ladders surface the failure.
    if any_strategy_responded {
        Err(SearchError::NoResults)
    } else {
        Err(last_failure.unwrap_or(SearchError::NoResults))
    }
}

/// When the winning result set carries no substantive content, issue one
/// follow-up content fetch for up to `MAX_ENRICH_URLS` relevant URLs and
/// merge text/highlights back by URL. Enrichment failure is non-fatal.
async fn enrich_if_thin(
    search: &dyn SearchCapability,
    mut records: Vec<SearchRecord>,
    handle: &str,
) -> Vec<SearchRecord> {
    let thin = records.iter().all(|r| {
        r.highlights.is_empty() && r.text.as_deref().map_or(true, |t| t.len() < MIN_TEXT_LEN)
    });
    if !thin {
        return records;
    }

    let urls: Vec<String> = records
        .iter()
        .filter(|r| is_relevant(r, handle))
        .map(|r| r.url.clone())
        .take(MAX_ENRICH_URLS)
        .collect();
    if urls.is_empty() {
        return records;
    }

    match search.fetch_content(&urls).await {
        Ok(fetched) => {
            let mut merged = 0;
            for content in fetched {
                if let Some(record) = records.iter_mut().find(|r| r.url == content.url) {
                    if content.text.as_deref().map_or(false, |t| !t.is_empty()) {
                        record.text = content.text;
                    }
                    record.highlights.extend(content.highlights);
                    merged += 1;
                }
            }
            info!("enriched {merged} thin records for @{handle}");
        }
        Err(e) => {
            warn!("content enrichment failed ({e}); continuing with original results");
        }
    }
    records
}
