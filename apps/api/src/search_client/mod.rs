//! Search Client — wire adapter for the Exa search API.
//!
//! ARCHITECTURAL RULE: no other module issues search HTTP calls. The profile
//! search adapter consumes this only through `SearchCapability`, so tests and
//! future backends swap in without touching the strategy logic.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EXA_SEARCH_URL: &str = "https://api.exa.ai/search";
const EXA_CONTENTS_URL: &str = "https://api.exa.ai/contents";
/// Bounded timeout for every outbound search call.
const CALL_TIMEOUT_SECS: u64 = 30;

/// Transport-level search failure. The strategy ladder in `profile::search`
/// decides which of these abort the ladder and which advance it.
#[derive(Debug, Error)]
pub enum SearchApiError {
    #[error("search API authentication failed")]
    AuthFailure,

    #[error("search API rate limited")]
    RateLimited,

    #[error("search call timed out")]
    Timeout,

    #[error("search transport error: {0}")]
    Transport(String),
}

/// How the search backend should interpret the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact keyword matching — right for profile-URL and operator queries.
    Keyword,
    /// Semantic matching — right for natural-language queries.
    Neural,
}

impl MatchMode {
    fn as_wire(&self) -> &'static str {
        match self {
            MatchMode::Keyword => "keyword",
            MatchMode::Neural => "neural",
        }
    }
}

/// One search request as the strategy ladder specifies it.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub num_results: usize,
    /// Empty = no domain restriction.
    pub include_domains: Vec<String>,
    pub mode: MatchMode,
}

/// One raw search result record. All content fields are best-effort —
/// extraction treats every one of them as optional noise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRecord {
    pub title: Option<String>,
    pub url: String,
    pub text: Option<String>,
    pub highlights: Vec<String>,
    pub image: Option<String>,
}

/// The search capability consumed by the profile search adapter.
#[async_trait]
pub trait SearchCapability: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchRecord>, SearchApiError>;

    /// Follow-up content fetch for result URLs that came back without
    /// substantive text. Returns records keyed by the same URLs.
    async fn fetch_content(&self, urls: &[String]) -> Result<Vec<SearchRecord>, SearchApiError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest<'a> {
    query: &'a str,
    num_results: usize,
    #[serde(rename = "type")]
    match_type: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    include_domains: Vec<String>,
    contents: ExaContentsSpec,
}

#[derive(Debug, Serialize)]
struct ExaContentsSpec {
    text: bool,
    highlights: bool,
}

#[derive(Debug, Serialize)]
struct ExaContentsRequest<'a> {
    urls: &'a [String],
    text: bool,
    highlights: bool,
}

#[derive(Debug, Deserialize)]
struct ExaResponse {
    results: Vec<SearchRecord>,
}

/// Exa-backed search client. Constructed once in `main` and shared.
#[derive(Clone)]
pub struct ExaClient {
    client: Client,
    api_key: String,
}

impl ExaClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(CALL_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn post_exa<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Vec<SearchRecord>, SearchApiError> {
        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchApiError::Timeout
                } else {
                    SearchApiError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => return Err(SearchApiError::AuthFailure),
            429 => return Err(SearchApiError::RateLimited),
            _ => {}
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchApiError::Transport(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: ExaResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                SearchApiError::Timeout
            } else {
                SearchApiError::Transport(e.to_string())
            }
        })?;

        debug!("search call returned {} records", parsed.results.len());
        Ok(parsed.results)
    }
}

#[async_trait]
impl SearchCapability for ExaClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchRecord>, SearchApiError> {
        let body = ExaSearchRequest {
            query: &query.query,
            num_results: query.num_results,
            match_type: query.mode.as_wire(),
            include_domains: query.include_domains.clone(),
            contents: ExaContentsSpec {
                text: true,
                highlights: true,
            },
        };
        self.post_exa(EXA_SEARCH_URL, &body).await
    }

    async fn fetch_content(&self, urls: &[String]) -> Result<Vec<SearchRecord>, SearchApiError> {
        let body = ExaContentsRequest {
            urls,
            text: true,
            highlights: true,
        };
        self.post_exa(EXA_CONTENTS_URL, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_record_deserializes_sparse_result() {
        let json = r#"{"url": "https://x.com/torontodao"}"#;
        let record: SearchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.url, "https://x.com/torontodao");
        assert!(record.title.is_none());
        assert!(record.highlights.is_empty());
    }

    #[test]
    fn test_search_record_deserializes_full_result() {
        let json = r#"{
            "title": "Toronto DAO (@torontodao) / X",
            "url": "https://x.com/torontodao",
            "text": "Building Canada's most vibrant crypto community",
            "highlights": ["vibrant crypto community"],
            "image": "https://pbs.twimg.com/profile_images/123/photo.jpg"
        }"#;
        let record: SearchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.highlights.len(), 1);
        assert!(record.image.is_some());
    }

    #[test]
    fn test_match_mode_wire_names() {
        assert_eq!(MatchMode::Keyword.as_wire(), "keyword");
        assert_eq!(MatchMode::Neural.as_wire(), "neural");
    }

    #[test]
    fn test_search_request_omits_empty_domain_filter() {
        let body = ExaSearchRequest {
            query: "torontodao",
            num_results: 10,
            match_type: "keyword",
            include_domains: vec![],
            contents: ExaContentsSpec {
                text: true,
                highlights: true,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("includeDomains").is_none());
        assert_eq!(json["numResults"], 10);
        assert_eq!(json["type"], "keyword");
    }
}
