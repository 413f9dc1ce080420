//! Persona synthesis — one structured-generation call that turns a
//! `ProfileSignal` into a `Persona`.
//!
//! Single-attempt by contract: retry policy belongs to callers. The adapter's
//! job is prompt construction, strict shape validation, and the mandatory
//! post-processing that keeps the persona invariants true no matter what the
//! generator returned.

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{GenerationCapability, LlmError};
use crate::models::persona::{capitalize_handle, Persona, ProfileSignal, NAME_PLACEHOLDER};
use crate::profile::prompts::{PERSONA_PROMPT_TEMPLATE, PERSONA_SYSTEM};

/// Bounds on prompt content so a noisy signal cannot blow up the call.
const MAX_BIO_CHARS: usize = 500;
const MAX_PROMPT_TWEETS: usize = 15;
const MAX_TWEET_CHARS: usize = 280;
const MAX_FIELD_ENTRIES: usize = 5;

const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("generator returned no content")]
    EmptyResponse,

    #[error("generator response failed schema validation: {0}")]
    InvalidSchema(String),

    #[error("generation call timed out")]
    Timeout,

    #[error("generation upstream failure: {0}")]
    Upstream(String),
}

/// The one accepted response shape. Anything else — a bare array, a wrapper
/// object, a missing field — is `InvalidSchema`, never guessed at.
#[derive(Debug, Deserialize)]
struct PersonaDraft {
    name: String,
    #[allow(dead_code)]
    handle: String,
    bio: String,
    traits: Vec<String>,
    interests: Vec<String>,
}

/// Synthesizes a `Persona` from a `ProfileSignal`.
///
/// Post-processing is unconditional: `handle` is replaced with the signal's
/// trusted handle regardless of what the generator said, and a placeholder or
/// empty `name` becomes the capitalized handle.
pub async fn synthesize_persona(
    generator: &dyn GenerationCapability,
    signal: &ProfileSignal,
) -> Result<Persona, PersonaError> {
    let prompt = build_persona_prompt(signal);

    let value = generator
        .generate(PERSONA_SYSTEM, &prompt, TEMPERATURE)
        .await
        .map_err(|e| match e {
            LlmError::EmptyContent => PersonaError::EmptyResponse,
            LlmError::Parse(parse) => PersonaError::InvalidSchema(parse.to_string()),
            LlmError::Timeout => PersonaError::Timeout,
            other => PersonaError::Upstream(other.to_string()),
        })?;

    let draft: PersonaDraft = serde_json::from_value(value)
        .map_err(|e| PersonaError::InvalidSchema(e.to_string()))?;

    if draft.traits.is_empty() || draft.interests.is_empty() {
        return Err(PersonaError::InvalidSchema(
            "traits and interests must be non-empty".to_string(),
        ));
    }

    let name = normalize_name(&draft.name, &signal.handle);
    let mut traits = draft.traits;
    traits.truncate(MAX_FIELD_ENTRIES);
    let mut interests = draft.interests;
    interests.truncate(MAX_FIELD_ENTRIES);

    info!(
        "synthesized persona for @{} ({} traits, {} interests)",
        signal.handle,
        traits.len(),
        interests.len()
    );

    Ok(Persona {
        name,
        handle: signal.handle.clone(),
        bio: draft.bio,
        traits,
        interests,
        profile_image_url: signal.profile_image_url.clone(),
    })
}

fn normalize_name(raw: &str, handle: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NAME_PLACEHOLDER {
        capitalize_handle(handle)
    } else {
        trimmed.to_string()
    }
}

fn build_persona_prompt(signal: &ProfileSignal) -> String {
    let bio = truncate_chars(&signal.bio, MAX_BIO_CHARS);
    let tweets = if signal.tweets.is_empty() {
        "(none found)".to_string()
    } else {
        signal
            .tweets
            .iter()
            .take(MAX_PROMPT_TWEETS)
            .map(|t| format!("- {}", truncate_chars(t, MAX_TWEET_CHARS)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    PERSONA_PROMPT_TEMPLATE
        .replace("{handle}", &signal.handle)
        .replace("{name}", &signal.name)
        .replace("{bio}", &bio)
        .replace("{tweets}", &tweets)
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
