use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::location::Location;
use crate::models::persona::Persona;
use crate::pipeline::create_recommendations;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocationsRequest {
    // Option so a missing field surfaces as a 400, not a deserialization reject.
    pub persona: Option<Persona>,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub success: bool,
    pub locations: Vec<Location>,
}

/// POST /api/v1/locations
pub async fn handle_create_locations(
    State(state): State<AppState>,
    Json(req): Json<LocationsRequest>,
) -> Result<Json<LocationsResponse>, AppError> {
    let persona = req
        .persona
        .ok_or_else(|| AppError::Validation("persona is required".to_string()))?;
    let locations = create_recommendations(state.generator.as_ref(), &persona).await?;
    Ok(Json(LocationsResponse {
        success: true,
        locations,
    }))
}
