//! Recommendation generation — batch strategy.
//!
//! One structured call asks for the full target count; up to two corrective
//! calls each ask for exactly the shortfall while excluding every name
//! already accepted. Candidates pass through the dedup gate in response
//! order and are field-repaired on acceptance. A shortfall after all rounds
//! is topped up from the fixed catalog; total failure is not backfilled.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm_client::GenerationCapability;
use crate::models::location::{Coordinates, Location, TARGET_COUNT};
use crate::models::persona::Persona;
use crate::recs::catalog::FALLBACK_CATALOG;
use crate::recs::city::CITY_NAME;
use crate::recs::dedup::DedupGate;
use crate::recs::prompts::{BATCH_PROMPT_TEMPLATE, CORRECTIVE_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::recs::repair::{repair_category, repair_coordinates, repair_rating, sanitize_website};

/// Corrective calls after the initial batch call.
const MAX_CORRECTIVE_ROUNDS: usize = 2;
const TEMPERATURE: f32 = 0.8;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("every generation attempt returned no parsable content")]
    EmptyResponse,

    #[error("no locations could be assembled from generation output")]
    NoResults,
}

/// One candidate as the generator emits it. `name` and `address` are the
/// dedup keys and are required along with the justification; everything else
/// is repairable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationDraft {
    name: String,
    address: String,
    description: String,
    // Free-form on the wire; repaired into the enum on acceptance.
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    coordinates: Option<Coordinates>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    price_level: Option<u8>,
}

/// Generates exactly `TARGET_COUNT` unique locations for a persona.
///
/// Error contract: `EmptyResponse` when no attempt produced parsable
/// content; `NoResults` when content parsed but zero candidates survived the
/// gate. Partial shortfalls are backfilled from the catalog, total failure
/// is not.
pub async fn generate_recommendations(
    generator: &dyn GenerationCapability,
    persona: &Persona,
) -> Result<Vec<Location>, RecommendationError> {
    let persona_json = persona_prompt_json(persona);
    let mut gate = DedupGate::new();
    let mut accepted: Vec<Location> = Vec::new();
    let mut any_parsable = false;

    for round in 0..=MAX_CORRECTIVE_ROUNDS {
        if accepted.len() >= TARGET_COUNT {
            break;
        }
        let shortfall = TARGET_COUNT - accepted.len();
        let prompt = if round == 0 {
            build_batch_prompt(&persona_json, TARGET_COUNT)
        } else {
            build_corrective_prompt(&persona_json, shortfall, gate.accepted_names())
        };

        match generator
            .generate(RECOMMENDATION_SYSTEM, &prompt, TEMPERATURE)
            .await
        {
            Ok(value) => match coerce_location_array(value) {
                Some(items) => {
                    any_parsable = true;
                    let before = accepted.len();
                    for item in items {
                        if accepted.len() >= TARGET_COUNT {
                            break;
                        }
                        let Ok(draft) = serde_json::from_value::<LocationDraft>(item) else {
                            continue;
                        };
                        if let Some(location) = admit_candidate(draft, &mut gate) {
                            accepted.push(location);
                        }
                    }
                    info!(
                        "recommendation round {round}: accepted {} new (total {})",
                        accepted.len() - before,
                        accepted.len()
                    );
                }
                None => {
                    warn!("recommendation round {round}: unrecognized response shape");
                }
            },
            Err(e) => {
                warn!("recommendation round {round} failed: {e}");
            }
        }
    }

    if !any_parsable {
        return Err(RecommendationError::EmptyResponse);
    }
    if accepted.is_empty() {
        return Err(RecommendationError::NoResults);
    }
    if accepted.len() < TARGET_COUNT {
        backfill_from_catalog(&mut accepted, &mut gate);
    }

    Ok(accepted)
}

/// Accepted response shapes: a top-level array, or an object whose
/// `locations` field is an array. Anything else is rejected — never probed
/// for some other array-valued property.
fn coerce_location_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("locations") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Runs a draft through the dedup gate; on admission, repairs every
/// optional field and assigns a fresh opaque id.
fn admit_candidate(draft: LocationDraft, gate: &mut DedupGate) -> Option<Location> {
    if !gate.admit(&draft.name, &draft.address) {
        return None;
    }
    Some(Location {
        id: Uuid::new_v4(),
        name: draft.name.trim().to_string(),
        address: draft.address.trim().to_string(),
        description: draft.description,
        category: repair_category(draft.category.as_deref()),
        coordinates: repair_coordinates(draft.coordinates),
        rating: repair_rating(draft.rating),
        website: sanitize_website(draft.website.as_deref()),
        price_level: draft.price_level,
    })
}

/// Appends catalog entries (skipping collisions) until the set reaches the
/// target or the catalog runs out.
fn backfill_from_catalog(accepted: &mut Vec<Location>, gate: &mut DedupGate) {
    let shortfall = TARGET_COUNT - accepted.len();
    for entry in FALLBACK_CATALOG {
        if accepted.len() >= TARGET_COUNT {
            break;
        }
        if gate.admit(entry.name, entry.address) {
            accepted.push(entry.to_location());
        }
    }
    if accepted.len() < TARGET_COUNT {
        warn!(
            "backfill catalog exhausted at {} locations (wanted {TARGET_COUNT})",
            accepted.len()
        );
    } else {
        info!("backfilled {shortfall} locations from the catalog");
    }
}

fn persona_prompt_json(persona: &Persona) -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "name": persona.name,
        "bio": persona.bio,
        "traits": persona.traits,
        "interests": persona.interests,
    }))
    .unwrap_or_else(|_| persona.bio.clone())
}

fn build_batch_prompt(persona_json: &str, count: usize) -> String {
    BATCH_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{city}", CITY_NAME)
        .replace("{persona_json}", persona_json)
}

fn build_corrective_prompt(persona_json: &str, count: usize, exclude: &[String]) -> String {
    let exclude_names = exclude
        .iter()
        .map(|n| format!("- {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    CORRECTIVE_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{city}", CITY_NAME)
        .replace("{persona_json}", persona_json)
        .replace("{exclude_names}", &exclude_names)
}
