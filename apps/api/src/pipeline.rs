//! Pipeline orchestrator — the two operations the application layer invokes.
//!
//! Flow: handle → search → extraction → persona generation, and
//!       persona → recommendation generation.
//!
//! No business logic beyond input validation, adapter sequencing, and 1:1
//! translation of terminal adapter errors into the external taxonomy. The
//! orchestrator never retries; both operations are idempotent and safe for
//! the caller to re-invoke.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::GenerationCapability;
use crate::models::location::Location;
use crate::models::persona::Persona;
use crate::profile::extract::{extract_profile_signal, ExtractionError};
use crate::profile::search::{search_for_handle, SearchError};
use crate::profile::synthesize::{synthesize_persona, PersonaError};
use crate::recs::generate::{generate_recommendations, RecommendationError};
use crate::search_client::SearchCapability;

/// Normalizes a raw handle: trims whitespace and strips one leading `@`.
pub fn normalize_handle(raw: &str) -> String {
    raw.trim().trim_start_matches('@').trim().to_string()
}

/// Builds a `Persona` for a handle: search → extract → synthesize.
pub async fn create_persona(
    search: &dyn SearchCapability,
    generator: &dyn GenerationCapability,
    raw_handle: &str,
) -> Result<Persona, AppError> {
    let handle = normalize_handle(raw_handle);
    if handle.is_empty() {
        return Err(AppError::Validation("xHandle is required".to_string()));
    }

    info!("creating persona for @{handle}");
    let records = search_for_handle(search, &handle)
        .await
        .map_err(map_search_error)?;

    let signal = extract_profile_signal(&records, &handle).map_err(|e| match e {
        ExtractionError::EmptyInput => {
            AppError::NotFound("No usable profile signal found for this handle".to_string())
        }
    })?;

    synthesize_persona(generator, &signal)
        .await
        .map_err(map_persona_error)
}

/// Builds a recommendation set for a persona.
pub async fn create_recommendations(
    generator: &dyn GenerationCapability,
    persona: &Persona,
) -> Result<Vec<Location>, AppError> {
    if normalize_handle(&persona.handle).is_empty() {
        return Err(AppError::Validation(
            "persona must include a handle".to_string(),
        ));
    }
    if persona.traits.is_empty() || persona.interests.is_empty() {
        return Err(AppError::Validation(
            "persona must include traits and interests".to_string(),
        ));
    }

    info!("creating recommendations for @{}", persona.handle);
    generate_recommendations(generator, persona)
        .await
        .map_err(|e| match e {
            RecommendationError::EmptyResponse => AppError::UpstreamEmptyResponse(
                "recommendation generation returned no content".to_string(),
            ),
            RecommendationError::NoResults => AppError::NotFound(
                "No locations could be assembled for this persona".to_string(),
            ),
        })
}

fn map_search_error(e: SearchError) -> AppError {
    match e {
        SearchError::AuthFailure => {
            AppError::UpstreamAuth("search API rejected credentials".to_string())
        }
        SearchError::RateLimited => {
            AppError::UpstreamRateLimited("search API quota exhausted".to_string())
        }
        SearchError::Timeout => {
            AppError::UpstreamTimeout("search strategies timed out".to_string())
        }
        SearchError::NoResults => {
            AppError::NotFound("No usable results found for this handle".to_string())
        }
        SearchError::Transport(msg) => AppError::UpstreamTransport(msg),
    }
}

fn map_persona_error(e: PersonaError) -> AppError {
    match e {
        PersonaError::EmptyResponse => {
            AppError::UpstreamEmptyResponse("persona generation returned no content".to_string())
        }
        PersonaError::InvalidSchema(msg) => AppError::UpstreamInvalidSchema(msg),
        PersonaError::Timeout => {
            AppError::UpstreamTimeout("persona generation timed out".to_string())
        }
        PersonaError::Upstream(msg) => AppError::UpstreamTransport(msg),
    }
}
